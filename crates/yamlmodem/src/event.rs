//! Event vocabularies on both sides of the adapter.
//!
//! [`YamlEvent`] is the format-native input: stream and document boundary
//! markers, collection starts and ends, and untyped scalar nodes carrying
//! their quoting style. [`JsonEvent`] is the restricted JSON output the
//! adapter re-emits, one event per accepted input event.
//!
//! # Examples
//!
//! ```
//! use yamlmodem::{EventAdapter, JsonEvent, ScalarStyle, YamlEvent};
//!
//! let events = vec![
//!     YamlEvent::StreamStart,
//!     YamlEvent::DocumentStart,
//!     YamlEvent::Scalar {
//!         value: "true".into(),
//!         style: ScalarStyle::Plain,
//!     },
//!     YamlEvent::DocumentEnd,
//!     YamlEvent::StreamEnd,
//! ];
//! let out: Vec<_> = EventAdapter::new(events.into_iter())
//!     .map(Result::unwrap)
//!     .collect();
//! assert_eq!(out, vec![JsonEvent::ValueTrue, JsonEvent::EndOfStream]);
//! ```
use alloc::string::String;
use core::fmt;

use crate::decimal::Decimal;

/// Quoting style of a scalar node in the source document.
///
/// Only [`Plain`](ScalarStyle::Plain) scalars are eligible for type
/// resolution; every other style is an explicit author declaration that the
/// content is literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarStyle {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
    Folded,
}

impl ScalarStyle {
    #[must_use]
    pub fn is_plain(self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// A document event produced by the external event source, in depth-first
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YamlEvent {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
    /// An untyped scalar node: textual content plus its quoting style.
    Scalar {
        value: String,
        style: ScalarStyle,
    },
}

impl YamlEvent {
    /// The discriminant of this event, used in error reporting.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::StreamStart => EventKind::StreamStart,
            Self::StreamEnd => EventKind::StreamEnd,
            Self::DocumentStart => EventKind::DocumentStart,
            Self::DocumentEnd => EventKind::DocumentEnd,
            Self::SequenceStart => EventKind::SequenceStart,
            Self::SequenceEnd => EventKind::SequenceEnd,
            Self::MappingStart => EventKind::MappingStart,
            Self::MappingEnd => EventKind::MappingEnd,
            Self::Scalar { .. } => EventKind::Scalar,
        }
    }
}

/// Discriminant of a [`YamlEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
    Scalar,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StreamStart => "StreamStart",
            Self::StreamEnd => "StreamEnd",
            Self::DocumentStart => "DocumentStart",
            Self::DocumentEnd => "DocumentEnd",
            Self::SequenceStart => "SequenceStart",
            Self::SequenceEnd => "SequenceEnd",
            Self::MappingStart => "MappingStart",
            Self::MappingEnd => "MappingEnd",
            Self::Scalar => "Scalar",
        })
    }
}

/// A JSON parser event emitted by the adapter.
///
/// The vocabulary and value semantics match a JSON document model: object and
/// array boundaries, member names, and typed scalar values. `EndOfStream` is
/// emitted exactly once, after the single top-level value of the document has
/// closed (or immediately, for an empty document).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JsonEvent {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    /// A mapping key, surfaced verbatim; keys are never type-resolved.
    KeyName(String),
    ValueString(String),
    /// A number decoded to an exact-precision decimal.
    ValueNumber(Decimal),
    ValueTrue,
    ValueFalse,
    ValueNull,
    EndOfStream,
}

impl JsonEvent {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::StartObject => "StartObject",
            Self::EndObject => "EndObject",
            Self::StartArray => "StartArray",
            Self::EndArray => "EndArray",
            Self::KeyName(_) => "KeyName",
            Self::ValueString(_) => "ValueString",
            Self::ValueNumber(_) => "ValueNumber",
            Self::ValueTrue => "ValueTrue",
            Self::ValueFalse => "ValueFalse",
            Self::ValueNull => "ValueNull",
            Self::EndOfStream => "EndOfStream",
        }
    }
}
