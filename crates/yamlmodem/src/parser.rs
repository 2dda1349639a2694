//! The pull-based consumer surface.
//!
//! `YamlParser` layers the `hasNext`/`next` protocol over the adapter state
//! machine and exposes typed accessors for the most recently returned event.
//!
//! # Examples
//!
//! ```rust
//! use yamlmodem::{JsonEvent, ScalarStyle, YamlEvent, YamlParser};
//!
//! let events = vec![
//!     YamlEvent::StreamStart,
//!     YamlEvent::DocumentStart,
//!     YamlEvent::MappingStart,
//!     YamlEvent::Scalar {
//!         value: "a".into(),
//!         style: ScalarStyle::Plain,
//!     },
//!     YamlEvent::Scalar {
//!         value: "1".into(),
//!         style: ScalarStyle::Plain,
//!     },
//!     YamlEvent::MappingEnd,
//!     YamlEvent::DocumentEnd,
//!     YamlEvent::StreamEnd,
//! ];
//! let mut parser = YamlParser::new(events.into_iter());
//!
//! assert_eq!(parser.next_event().unwrap(), JsonEvent::StartObject);
//! parser.next_event().unwrap();
//! assert_eq!(parser.string().unwrap(), "a");
//! parser.next_event().unwrap();
//! assert!(parser.is_integral_number().unwrap());
//! ```

use crate::{
    adapter::EventAdapter,
    decimal::Decimal,
    error::{AccessError, ParseError},
    event::{JsonEvent, YamlEvent},
    options::AdapterOptions,
};

/// Pull parser yielding JSON events from a document event source.
///
/// Not safe for concurrent use; exactly one document is processed per
/// instance. Dropping the parser is the only cancellation: the adapter never
/// consumes a mid-document cancellation signal itself.
#[derive(Debug)]
pub struct YamlParser<I> {
    adapter: EventAdapter<I>,
    /// Single-event lookahead filled by `has_next`.
    peeked: Option<Result<JsonEvent, ParseError>>,
    /// The most recently returned event, backing the typed accessors.
    current: Option<JsonEvent>,
}

impl<I: Iterator<Item = YamlEvent>> YamlParser<I> {
    #[must_use]
    pub fn new(source: I) -> Self {
        Self::with_options(source, AdapterOptions::default())
    }

    #[must_use]
    pub fn with_options(source: I, options: AdapterOptions) -> Self {
        Self {
            adapter: EventAdapter::with_options(source, options),
            peeked: None,
            current: None,
        }
    }

    /// Returns whether a further JSON event can be produced without error.
    ///
    /// A structural error discovered while looking ahead is reported here,
    /// and again by the `next_event` call that would have produced it.
    ///
    /// # Errors
    ///
    /// Propagates the [`ParseError`] the lookahead ran into.
    pub fn has_next(&mut self) -> Result<bool, ParseError> {
        if self.peeked.is_none() {
            self.peeked = self.adapter.next_event();
        }
        match &self.peeked {
            Some(Ok(_)) => Ok(true),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(false),
        }
    }

    /// Returns the next JSON event.
    ///
    /// # Errors
    ///
    /// A [`ParseError`] for structural violations, [`ParseError::Exhausted`]
    /// when called after `EndOfStream` or after a previous fatal error.
    pub fn next_event(&mut self) -> Result<JsonEvent, ParseError> {
        let item = match self.peeked.take() {
            Some(item) => Some(item),
            None => self.adapter.next_event(),
        };
        match item {
            Some(Ok(event)) => {
                self.current = Some(event.clone());
                Ok(event)
            }
            Some(Err(err)) => {
                self.current = None;
                Err(err)
            }
            None => Err(ParseError::Exhausted),
        }
    }

    /// Text of the current event.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotString`] unless the current event is `KeyName` or
    /// `ValueString`.
    pub fn string(&self) -> Result<&str, AccessError> {
        match &self.current {
            Some(JsonEvent::KeyName(text) | JsonEvent::ValueString(text)) => Ok(text),
            other => Err(AccessError::NotString(name_of(other.as_ref()))),
        }
    }

    /// Decoded decimal of the current `ValueNumber` event.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotNumber`] unless the current event is `ValueNumber`.
    pub fn decimal(&self) -> Result<&Decimal, AccessError> {
        match &self.current {
            Some(JsonEvent::ValueNumber(decimal)) => Ok(decimal),
            other => Err(AccessError::NotNumber(name_of(other.as_ref()))),
        }
    }

    /// Whether the current `ValueNumber` holds an integral value.
    ///
    /// # Errors
    ///
    /// [`AccessError::NotNumber`] unless the current event is `ValueNumber`.
    pub fn is_integral_number(&self) -> Result<bool, AccessError> {
        self.decimal().map(Decimal::is_integral)
    }
}

impl<I: Iterator<Item = YamlEvent>> Iterator for YamlParser<I> {
    type Item = Result<JsonEvent, ParseError>;

    /// Ends after `EndOfStream` (or after the first fatal error has been
    /// returned once).
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_event() {
            Err(ParseError::Exhausted) => None,
            item => Some(item),
        }
    }
}

fn name_of(current: Option<&JsonEvent>) -> &'static str {
    current.map_or("(none)", JsonEvent::name)
}
