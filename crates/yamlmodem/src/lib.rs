//! A pull-based adapter from YAML document events to a JSON event stream.
//!
//! The adapter consumes a generic document event source (stream and document
//! boundaries, collection starts and ends, untyped scalars with a quoting
//! style) and re-emits it as a restricted JSON event stream: structural
//! validation against a context stack, plain-scalar type resolution, and
//! exact-precision numeric decoding. Consumers iterate events without ever
//! materializing a document tree.
//!
//! ```
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
//!
//! let events: Vec<_> = YamlParser::new(events.into_iter())
//!     .map(Result::unwrap)
//!     .collect();
//! assert_eq!(events[0], JsonEvent::StartObject);
//! assert_eq!(events[1], JsonEvent::KeyName("a".into()));
//! assert_eq!(events.last(), Some(&JsonEvent::EndOfStream));
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod adapter;
mod context;
mod decimal;
mod error;
mod event;
mod options;
mod parser;
mod scalar;

#[cfg(test)]
mod tests;

pub use adapter::EventAdapter;
pub use decimal::{Decimal, DecimalError};
pub use error::{AccessError, ParseError};
pub use event::{EventKind, JsonEvent, ScalarStyle, YamlEvent};
pub use options::{AdapterOptions, Schema};
pub use parser::YamlParser;
