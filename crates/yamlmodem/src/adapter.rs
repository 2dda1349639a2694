//! The adapter state machine.
//!
//! Pulls one generic document event at a time from the external source,
//! validates it against the context stack, resolves scalar types where
//! relevant, and emits exactly one JSON event per accepted input event. The
//! stream and document boundary markers are consumed silently at the edges of
//! the document.
//!
//! # Examples
//!
//! ```
//! use yamlmodem::{EventAdapter, JsonEvent, ScalarStyle, YamlEvent};
//!
//! let events = vec![
//!     YamlEvent::StreamStart,
//!     YamlEvent::DocumentStart,
//!     YamlEvent::SequenceStart,
//!     YamlEvent::Scalar {
//!         value: "1".into(),
//!         style: ScalarStyle::Plain,
//!     },
//!     YamlEvent::SequenceEnd,
//!     YamlEvent::DocumentEnd,
//!     YamlEvent::StreamEnd,
//! ];
//! let mut adapter = EventAdapter::new(events.into_iter());
//! assert_eq!(adapter.next_event(), Some(Ok(JsonEvent::StartArray)));
//! ```

use crate::{
    context::{Context, ContextStack, Expectation},
    error::ParseError,
    event::{EventKind, JsonEvent, YamlEvent},
    options::AdapterOptions,
    scalar::{self, Resolved},
};

/// Coarse machine state. The fine-grained sub-state inside the document is
/// the context stack itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Stream and document start markers not yet consumed.
    Initial,
    /// Inside the document; the context stack drives what is admissible.
    Node,
    /// The root value has closed; only the document end marker remains.
    Epilogue,
    /// `EndOfStream` has been emitted.
    Done,
    /// A fatal error was raised; the machine is parked, no resynchronization.
    Failed,
}

/// Pull-based adapter from [`YamlEvent`]s to [`JsonEvent`]s.
///
/// One adapter instance processes exactly one document and is torn down with
/// it; there is no cross-document state reuse. The adapter performs no
/// background work and buffers nothing beyond the current in-flight event.
#[derive(Debug)]
pub struct EventAdapter<I> {
    source: I,
    stack: ContextStack,
    state: State,
    options: AdapterOptions,
}

impl<I: Iterator<Item = YamlEvent>> EventAdapter<I> {
    /// Creates an adapter over `source` with the default options.
    #[must_use]
    pub fn new(source: I) -> Self {
        Self::with_options(source, AdapterOptions::default())
    }

    #[must_use]
    pub fn with_options(source: I, options: AdapterOptions) -> Self {
        Self {
            source,
            stack: ContextStack::new(),
            state: State::Initial,
            options,
        }
    }

    /// Produces the next JSON event.
    ///
    /// Returns `None` once `EndOfStream` has been yielded, and after the
    /// first error: a structural error is fatal to the document.
    pub fn next_event(&mut self) -> Option<Result<JsonEvent, ParseError>> {
        match self.state {
            State::Done | State::Failed => None,
            State::Initial | State::Node | State::Epilogue => match self.advance() {
                Ok(event) => Some(Ok(event)),
                Err(err) => {
                    self.state = State::Failed;
                    Some(Err(err))
                }
            },
        }
    }

    fn advance(&mut self) -> Result<JsonEvent, ParseError> {
        match self.state {
            State::Initial => self.open_document(),
            State::Node => match self.source.next() {
                Some(event) => self.transition(event),
                None => Err(ParseError::UnterminatedDocument {
                    depth: self.stack.depth(),
                }),
            },
            State::Epilogue => self.close_document(),
            State::Done | State::Failed => Err(ParseError::Exhausted),
        }
    }

    /// Consumes the stream and document start markers and hands the first
    /// content event to the dispatcher. The empty-document forms collapse to
    /// a single `EndOfStream`.
    fn open_document(&mut self) -> Result<JsonEvent, ParseError> {
        let Some(event) = self.source.next() else {
            return Ok(self.end_of_stream());
        };
        if event.kind() != EventKind::StreamStart {
            return Err(unexpected(&event, "StreamStart"));
        }

        let Some(event) = self.source.next() else {
            return Ok(self.end_of_stream());
        };
        match event.kind() {
            EventKind::StreamEnd => Ok(self.end_of_stream()),
            EventKind::DocumentStart => {
                let Some(event) = self.source.next() else {
                    return Ok(self.end_of_stream());
                };
                if event.kind() == EventKind::DocumentEnd {
                    return Ok(self.end_of_stream());
                }
                self.state = State::Node;
                self.transition(event)
            }
            _ => Err(unexpected(&event, "DocumentStart or StreamEnd")),
        }
    }

    /// Consumes the document end marker. A source that simply stops after
    /// the root value is tolerated; anything other than `DocumentEnd` is
    /// extraneous content.
    fn close_document(&mut self) -> Result<JsonEvent, ParseError> {
        if let Some(event) = self.source.next() {
            if event.kind() != EventKind::DocumentEnd {
                return Err(unexpected(&event, "DocumentEnd"));
            }
        }
        Ok(self.end_of_stream())
    }

    /// The single dispatch over `(context, event)`. Exactly one JSON event
    /// out per accepted input event.
    fn transition(&mut self, event: YamlEvent) -> Result<JsonEvent, ParseError> {
        match (self.stack.last(), event) {
            // Key position: the scalar becomes the member name verbatim,
            // never type-resolved, because object keys are always strings.
            (
                Some(Context::Mapping {
                    expecting: Expectation::Key,
                }),
                YamlEvent::Scalar { value, .. },
            ) => {
                self.stack.expect_value();
                Ok(JsonEvent::KeyName(value))
            }
            (
                Some(Context::Mapping {
                    expecting: Expectation::Key,
                }),
                YamlEvent::MappingEnd,
            ) => {
                self.stack.pop();
                self.value_closed();
                Ok(JsonEvent::EndObject)
            }
            (
                Some(Context::Mapping {
                    expecting: Expectation::Key,
                }),
                event,
            ) => Err(unexpected(&event, "a mapping key or MappingEnd")),

            // Value position: top level, sequence element or mapping value.
            (_, YamlEvent::SequenceStart) => {
                self.stack.push_sequence();
                Ok(JsonEvent::StartArray)
            }
            (_, YamlEvent::MappingStart) => {
                self.stack.push_mapping();
                Ok(JsonEvent::StartObject)
            }
            (_, YamlEvent::Scalar { value, style }) => {
                let event = match scalar::resolve(&value, style, self.options.schema)? {
                    Resolved::Null => JsonEvent::ValueNull,
                    Resolved::Bool(true) => JsonEvent::ValueTrue,
                    Resolved::Bool(false) => JsonEvent::ValueFalse,
                    Resolved::Number(decimal) => JsonEvent::ValueNumber(decimal),
                    Resolved::Str => JsonEvent::ValueString(value),
                };
                self.value_closed();
                Ok(event)
            }

            // Collection closes must match the innermost open collection.
            (Some(Context::Sequence), YamlEvent::SequenceEnd) => {
                self.stack.pop();
                self.value_closed();
                Ok(JsonEvent::EndArray)
            }
            (Some(Context::Sequence), YamlEvent::MappingEnd) => Err(ParseError::MismatchedEnd {
                actual: EventKind::MappingEnd,
                open: "sequence",
            }),
            (Some(Context::Mapping { .. }), YamlEvent::SequenceEnd) => {
                Err(ParseError::MismatchedEnd {
                    actual: EventKind::SequenceEnd,
                    open: "mapping",
                })
            }
            // A close in value expectation means the pending key has no value.
            (Some(Context::Mapping { .. }), event @ YamlEvent::MappingEnd) => {
                Err(unexpected(&event, "the value for the pending key"))
            }
            (None, event @ (YamlEvent::SequenceEnd | YamlEvent::MappingEnd)) => {
                Err(unexpected(&event, "a value or collection start"))
            }

            // Stream and document markers never appear mid-document.
            (_, event) => Err(unexpected(&event, "a value, collection start or end")),
        }
    }

    /// A complete value was produced: flip the enclosing mapping back to key
    /// expectation, or leave the document if the root value just closed.
    fn value_closed(&mut self) {
        if self.stack.is_empty() {
            self.state = State::Epilogue;
        } else {
            self.stack.value_consumed();
        }
    }

    fn end_of_stream(&mut self) -> JsonEvent {
        self.state = State::Done;
        JsonEvent::EndOfStream
    }
}

impl<I: Iterator<Item = YamlEvent>> Iterator for EventAdapter<I> {
    type Item = Result<JsonEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

fn unexpected(event: &YamlEvent, expected: &'static str) -> ParseError {
    ParseError::UnexpectedEvent {
        actual: event.kind(),
        expected,
    }
}
