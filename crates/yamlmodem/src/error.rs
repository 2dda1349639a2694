//! Failure types raised by the adapter and the pull surface.

use thiserror::Error;

use crate::{decimal::DecimalError, event::EventKind};

/// A fatal parse failure for the current document.
///
/// Structural errors carry the offending event kind and a description of what
/// the current context admitted instead. None of these are recoverable; after
/// the first error the adapter yields no further events for the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An event arrived that the current context does not admit.
    #[error("unexpected {actual} event, expected {expected}")]
    UnexpectedEvent {
        actual: EventKind,
        expected: &'static str,
    },
    /// A collection close did not match the innermost open collection.
    #[error("unexpected {actual} event while a {open} is open")]
    MismatchedEnd {
        actual: EventKind,
        open: &'static str,
    },
    /// The event source was exhausted with collections still open.
    #[error("event source exhausted with {depth} unterminated collection(s)")]
    UnterminatedDocument { depth: usize },
    /// A plain scalar matched the numeral grammar but failed exact decoding.
    #[error(transparent)]
    Number(#[from] DecimalError),
    /// The next event was requested after the stream already ended.
    #[error("no more events in the stream")]
    Exhausted,
}

/// Misuse of a typed accessor on the pull surface.
///
/// Raised when the most recently returned event does not support the
/// accessor. Fatal to the call only; the caller may continue iterating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The current event carries no text; only `KeyName` and `ValueString`
    /// do.
    #[error("current event {0} carries no string value")]
    NotString(&'static str),
    /// The current event carries no number; only `ValueNumber` does.
    #[error("current event {0} carries no number value")]
    NotNumber(&'static str),
}
