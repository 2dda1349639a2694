#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yamlmodem::{AdapterOptions, ScalarStyle, Schema, YamlEvent, YamlParser};

/// Mirror of `YamlEvent` with derived `Arbitrary`.
#[derive(Arbitrary, Debug)]
enum RawEvent {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
    Scalar(String, u8),
}

impl RawEvent {
    fn into_event(self) -> YamlEvent {
        match self {
            RawEvent::StreamStart => YamlEvent::StreamStart,
            RawEvent::StreamEnd => YamlEvent::StreamEnd,
            RawEvent::DocumentStart => YamlEvent::DocumentStart,
            RawEvent::DocumentEnd => YamlEvent::DocumentEnd,
            RawEvent::SequenceStart => YamlEvent::SequenceStart,
            RawEvent::SequenceEnd => YamlEvent::SequenceEnd,
            RawEvent::MappingStart => YamlEvent::MappingStart,
            RawEvent::MappingEnd => YamlEvent::MappingEnd,
            RawEvent::Scalar(value, style) => YamlEvent::Scalar {
                value,
                style: match style % 5 {
                    0 => ScalarStyle::Plain,
                    1 => ScalarStyle::SingleQuoted,
                    2 => ScalarStyle::DoubleQuoted,
                    3 => ScalarStyle::Literal,
                    _ => ScalarStyle::Folded,
                },
            },
        }
    }
}

// Arbitrary event sequences, well-formed or not, must never panic the
// adapter: they either adapt cleanly or stop at the first typed error.
fuzz_target!(|events: (Vec<RawEvent>, bool)| {
    let (events, legacy) = events;
    let schema = if legacy { Schema::Yaml11 } else { Schema::Core };
    let source = events.into_iter().map(RawEvent::into_event);
    let mut saw_error = false;
    for item in YamlParser::with_options(source, AdapterOptions { schema }) {
        if item.is_err() {
            assert!(!saw_error, "events after a fatal error");
            saw_error = true;
        }
    }
});
