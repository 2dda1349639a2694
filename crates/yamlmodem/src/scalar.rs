//! Plain-scalar type resolution.
//!
//! Decides whether an untyped textual scalar denotes null, a boolean, a
//! number or a string. The resolver is pure and stateless; apart from the
//! exponent-overflow decode error it is total over its input, degrading to
//! string whenever nothing else matches.

use crate::{
    decimal::{Decimal, DecimalError},
    event::ScalarStyle,
    options::Schema,
};

/// Concrete JSON kind of one resolved scalar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolved {
    Null,
    Bool(bool),
    Number(Decimal),
    /// The scalar stays verbatim text; the caller already owns it.
    Str,
}

/// Resolves a scalar's textual content against the schema profile.
///
/// Non-plain styles are never reinterpreted: quoting is an explicit author
/// declaration that the content is literal text. Plain content is matched in
/// fixed priority order null > boolean > number, since spellings such as `~`
/// would otherwise be ambiguous with plain string content.
pub(crate) fn resolve(
    value: &str,
    style: ScalarStyle,
    schema: Schema,
) -> Result<Resolved, DecimalError> {
    if !style.is_plain() {
        return Ok(Resolved::Str);
    }
    if schema.resolves_null(value) {
        return Ok(Resolved::Null);
    }
    if let Some(b) = schema.resolves_bool(value) {
        return Ok(Resolved::Bool(b));
    }
    match value.parse::<Decimal>() {
        Ok(decimal) => Ok(Resolved::Number(decimal)),
        Err(DecimalError::Malformed(_)) => Ok(Resolved::Str),
        Err(err @ DecimalError::ExponentOverflow(_)) => Err(err),
    }
}
