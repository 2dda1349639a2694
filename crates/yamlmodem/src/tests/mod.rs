mod adapt_good;

use alloc::{string::ToString, vec::Vec};

use crate::{ScalarStyle, YamlEvent};

pub(crate) fn plain(value: &str) -> YamlEvent {
    styled(value, ScalarStyle::Plain)
}

pub(crate) fn styled(value: &str, style: ScalarStyle) -> YamlEvent {
    YamlEvent::Scalar {
        value: value.to_string(),
        style,
    }
}

/// Wraps document content in the stream and document boundary markers.
pub(crate) fn document(
    body: impl IntoIterator<Item = YamlEvent>,
) -> impl Iterator<Item = YamlEvent> {
    let mut events = Vec::new();
    events.push(YamlEvent::StreamStart);
    events.push(YamlEvent::DocumentStart);
    events.extend(body);
    events.push(YamlEvent::DocumentEnd);
    events.push(YamlEvent::StreamEnd);
    events.into_iter()
}
