use std::collections::BTreeMap;

use crate::core::error::TemplateError;

/// Substitute build properties into a resource template.
///
/// Recognised forms:
/// - `${name}` (whitespace inside the braces is ignored)
/// - `$name` where `name` is `[A-Za-z_][A-Za-z0-9_]*`
/// - `\$` for a literal `$`
///
/// A `$` followed by anything else is kept as is. Every other byte,
/// backslashes included, is copied through untouched.
pub fn expand(
    template: &str,
    properties: &BTreeMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(idx) = rest.find(|c: char| c == '$' || c == '\\') {
        out.push_str(&rest[..idx]);
        let at = offset + idx;
        let tail = &rest[idx..];

        let consumed = if tail.starts_with("\\$") {
            out.push('$');
            2
        } else if tail.starts_with('\\') {
            out.push('\\');
            1
        } else if let Some(body) = tail.strip_prefix("${") {
            let end = body
                .find('}')
                .ok_or(TemplateError::Unterminated { offset: at })?;
            let name = body[..end].trim();
            if !is_identifier(name) {
                return Err(TemplateError::UnsupportedExpression {
                    expr: name.to_string(),
                    offset: at,
                });
            }
            out.push_str(lookup(properties, name, at)?);
            2 + end + 1
        } else {
            let ident_len = identifier_prefix_len(&tail[1..]);
            if ident_len == 0 {
                out.push('$');
                1
            } else {
                out.push_str(lookup(properties, &tail[1..1 + ident_len], at)?);
                1 + ident_len
            }
        };

        rest = &tail[consumed..];
        offset = at + consumed;
    }

    out.push_str(rest);
    Ok(out)
}

fn lookup<'a>(
    properties: &'a BTreeMap<String, String>,
    name: &str,
    offset: usize,
) -> Result<&'a str, TemplateError> {
    properties
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| TemplateError::UnknownProperty {
            name: name.to_string(),
            offset,
        })
}

fn identifier_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && identifier_prefix_len(s) == s.len()
}
