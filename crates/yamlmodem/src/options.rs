//! Adapter configuration.

/// Configuration options for the event adapter.
///
/// # Examples
///
/// ```rust
/// use yamlmodem::{AdapterOptions, Schema, YamlEvent, YamlParser};
///
/// let source = Vec::<YamlEvent>::new().into_iter();
/// let parser = YamlParser::with_options(
///     source,
///     AdapterOptions {
///         schema: Schema::Yaml11,
///     },
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AdapterOptions {
    /// The schema profile used to resolve plain scalars.
    ///
    /// # Default
    ///
    /// [`Schema::Core`]
    pub schema: Schema,
}

/// Which plain-scalar spellings resolve to null and boolean values.
///
/// The recognized spelling sets are a policy of the source format's schema
/// profile, not of the adapter algorithm, so they are an explicit
/// configuration surface. Resolution order is fixed regardless of profile:
/// null, then boolean, then number, then string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Schema {
    /// The core schema: empty content, `~` and ASCII case-insensitive `null`
    /// are null; ASCII case-insensitive `true`/`false` are booleans.
    #[default]
    Core,
    /// [`Core`](Schema::Core) plus the legacy boolean aliases `y`, `n`,
    /// `yes`, `no`, `on` and `off`, ASCII case-insensitive.
    Yaml11,
    /// Strict JSON spellings: exactly `null`, `true` and `false`. Empty
    /// content and `~` stay strings.
    Json,
}

impl Schema {
    pub(crate) fn resolves_null(self, text: &str) -> bool {
        match self {
            Self::Core | Self::Yaml11 => {
                text.is_empty() || text == "~" || text.eq_ignore_ascii_case("null")
            }
            Self::Json => text == "null",
        }
    }

    pub(crate) fn resolves_bool(self, text: &str) -> Option<bool> {
        match self {
            Self::Core => Self::core_bool(text),
            Self::Yaml11 => Self::core_bool(text).or_else(|| Self::legacy_bool(text)),
            Self::Json => match text {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }

    fn core_bool(text: &str) -> Option<bool> {
        if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn legacy_bool(text: &str) -> Option<bool> {
        const TRUE: &[&str] = &["y", "yes", "on"];
        const FALSE: &[&str] = &["n", "no", "off"];
        if TRUE.iter().any(|t| text.eq_ignore_ascii_case(t)) {
            Some(true)
        } else if FALSE.iter().any(|t| text.eq_ignore_ascii_case(t)) {
            Some(false)
        } else {
            None
        }
    }
}
