use crate::model::Schema;
use crate::model::TypeKind;
use std::borrow::Cow;

const ESCAPED_CHARS: [char; 7] = ['"', '\\', '\u{8}', '\u{c}', '\n', '\r', '\t'];

/// Formats the ` = <value>` suffix for an input value's default value.
///
/// `default_value` is expected to already be a GraphQL literal (as reported
/// by introspection) and is emitted verbatim.
pub fn format_default(default_value: Option<&str>) -> String {
    match default_value {
        Some(value) => format!(" = {value}"),
        None => String::new(),
    }
}

/// Escapes `source` for use inside a GraphQL string literal.
///
/// Only `"`, `\`, backspace, form-feed, newline, carriage-return, and tab are
/// escaped. All other characters (including the remaining control
/// characters below U+0020) are passed through unchanged.
///
/// See [String Value](https://spec.graphql.org/October2021/#sec-String-Value).
pub fn escape_string(source: &str) -> Cow<'_, str> {
    if !source.contains(ESCAPED_CHARS) {
        return Cow::Borrowed(source);
    }

    let mut escaped = String::with_capacity(source.len() + 10);
    for ch in source.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{8}' => escaped.push_str("\\b"),
            '\u{c}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Wraps `source` in double quotes after escaping it.
pub fn quote_string(source: &str) -> String {
    format!("\"{}\"", escape_string(source))
}

/// Turns a raw (unencoded) applied-directive argument value into a GraphQL
/// literal using the type declared for that argument.
///
/// The declaration is found by looking up `directive_name` among the schema's
/// directives and `arg_name` among its arguments. `LIST` and `NON_NULL`
/// wrappers are looked through. Values of `String` and `ID` arguments are
/// quoted; everything else (other scalars, enums, input objects) is emitted
/// bare. When no declaration can be found the raw value is returned as-is.
pub fn coerce_argument_value(
    schema: &Schema,
    directive_name: &str,
    arg_name: &str,
    raw_value: &str,
) -> String {
    let declared_type =
        schema.directive(directive_name)
            .and_then(|directive| directive.arg(arg_name))
            .and_then(|arg| arg.type_ref.innermost());

    match declared_type {
        Some(named) if named.kind == TypeKind::Scalar
            && matches!(named.name.as_deref(), Some("String" | "ID")) =>
            quote_string(raw_value),

        Some(_) => raw_value.to_string(),

        None => {
            log::debug!(
                "No declaration found for argument `{arg_name}` of \
                `@{directive_name}`; emitting its value unchanged."
            );
            raw_value.to_string()
        },
    }
}
