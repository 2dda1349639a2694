use alloc::{vec, vec::Vec};

use crate::{
    AdapterOptions, EventAdapter, JsonEvent, ParseError, ScalarStyle, Schema, YamlEvent,
    tests::{document, plain, styled},
};

fn adapt(source: impl Iterator<Item = YamlEvent>) -> Vec<JsonEvent> {
    EventAdapter::new(source)
        .collect::<Result<Vec<_>, ParseError>>()
        .unwrap()
}

#[test]
fn empty_source_yields_end_of_stream() {
    assert_eq!(adapt(Vec::new().into_iter()), vec![JsonEvent::EndOfStream]);
}

#[test]
fn empty_stream_yields_end_of_stream() {
    let events = vec![YamlEvent::StreamStart, YamlEvent::StreamEnd];
    assert_eq!(adapt(events.into_iter()), vec![JsonEvent::EndOfStream]);
}

#[test]
fn empty_document_yields_end_of_stream() {
    assert_eq!(adapt(document([])), vec![JsonEvent::EndOfStream]);
}

#[test]
fn single_pair_mapping() {
    let source = document([
        YamlEvent::MappingStart,
        plain("a"),
        plain("1"),
        YamlEvent::MappingEnd,
    ]);
    assert_eq!(
        adapt(source),
        vec![
            JsonEvent::StartObject,
            JsonEvent::KeyName("a".into()),
            JsonEvent::ValueNumber("1".parse().unwrap()),
            JsonEvent::EndObject,
            JsonEvent::EndOfStream,
        ]
    );
}

#[test]
fn root_scalar_value() {
    assert_eq!(
        adapt(document([plain("hello")])),
        vec![
            JsonEvent::ValueString("hello".into()),
            JsonEvent::EndOfStream
        ]
    );
}

#[test]
fn sequence_of_scalars() {
    let source = document([
        YamlEvent::SequenceStart,
        plain("~"),
        plain("true"),
        plain("3.14"),
        plain("text"),
        YamlEvent::SequenceEnd,
    ]);
    assert_eq!(
        adapt(source),
        vec![
            JsonEvent::StartArray,
            JsonEvent::ValueNull,
            JsonEvent::ValueTrue,
            JsonEvent::ValueNumber("3.14".parse().unwrap()),
            JsonEvent::ValueString("text".into()),
            JsonEvent::EndArray,
            JsonEvent::EndOfStream,
        ]
    );
}

#[test]
fn nested_collections_alternate_key_and_value() {
    let source = document([
        YamlEvent::MappingStart,
        plain("items"),
        YamlEvent::SequenceStart,
        YamlEvent::MappingStart,
        plain("id"),
        plain("1"),
        YamlEvent::MappingEnd,
        YamlEvent::SequenceEnd,
        plain("done"),
        plain("false"),
        YamlEvent::MappingEnd,
    ]);
    assert_eq!(
        adapt(source),
        vec![
            JsonEvent::StartObject,
            JsonEvent::KeyName("items".into()),
            JsonEvent::StartArray,
            JsonEvent::StartObject,
            JsonEvent::KeyName("id".into()),
            JsonEvent::ValueNumber("1".parse().unwrap()),
            JsonEvent::EndObject,
            JsonEvent::EndArray,
            JsonEvent::KeyName("done".into()),
            JsonEvent::ValueFalse,
            JsonEvent::EndObject,
            JsonEvent::EndOfStream,
        ]
    );
}

#[test]
fn keys_are_never_type_resolved() {
    let source = document([
        YamlEvent::MappingStart,
        plain("true"),
        plain("3"),
        plain("~"),
        plain("x"),
        YamlEvent::MappingEnd,
    ]);
    assert_eq!(
        adapt(source),
        vec![
            JsonEvent::StartObject,
            JsonEvent::KeyName("true".into()),
            JsonEvent::ValueNumber("3".parse().unwrap()),
            JsonEvent::KeyName("~".into()),
            JsonEvent::ValueString("x".into()),
            JsonEvent::EndObject,
            JsonEvent::EndOfStream,
        ]
    );
}

#[test]
fn quoted_scalars_stay_strings() {
    let source = document([
        YamlEvent::SequenceStart,
        styled("true", ScalarStyle::SingleQuoted),
        styled("12", ScalarStyle::DoubleQuoted),
        styled("null", ScalarStyle::Literal),
        styled("~", ScalarStyle::Folded),
        YamlEvent::SequenceEnd,
    ]);
    assert_eq!(
        adapt(source),
        vec![
            JsonEvent::StartArray,
            JsonEvent::ValueString("true".into()),
            JsonEvent::ValueString("12".into()),
            JsonEvent::ValueString("null".into()),
            JsonEvent::ValueString("~".into()),
            JsonEvent::EndArray,
            JsonEvent::EndOfStream,
        ]
    );
}

#[test]
fn legacy_bool_aliases_depend_on_the_schema() {
    let body = [
        YamlEvent::SequenceStart,
        plain("yes"),
        plain("Off"),
        YamlEvent::SequenceEnd,
    ];

    assert_eq!(
        adapt(document(body.clone())),
        vec![
            JsonEvent::StartArray,
            JsonEvent::ValueString("yes".into()),
            JsonEvent::ValueString("Off".into()),
            JsonEvent::EndArray,
            JsonEvent::EndOfStream,
        ]
    );

    let adapter = EventAdapter::with_options(
        document(body),
        AdapterOptions {
            schema: Schema::Yaml11,
        },
    );
    assert_eq!(
        adapter.collect::<Result<Vec<_>, _>>().unwrap(),
        vec![
            JsonEvent::StartArray,
            JsonEvent::ValueTrue,
            JsonEvent::ValueFalse,
            JsonEvent::EndArray,
            JsonEvent::EndOfStream,
        ]
    );
}

#[test]
fn missing_trailing_markers_are_tolerated() {
    // The source ends right after the root value.
    let events = vec![
        YamlEvent::StreamStart,
        YamlEvent::DocumentStart,
        plain("42"),
    ];
    assert_eq!(
        adapt(events.into_iter()),
        vec![
            JsonEvent::ValueNumber("42".parse().unwrap()),
            JsonEvent::EndOfStream
        ]
    );
}

#[test]
fn one_output_event_per_content_event() {
    let body = vec![
        YamlEvent::MappingStart,
        plain("k"),
        YamlEvent::SequenceStart,
        plain("1"),
        plain("2"),
        YamlEvent::SequenceEnd,
        YamlEvent::MappingEnd,
    ];
    let content = body.len();
    assert_eq!(adapt(document(body)).len(), content + 1);
}
