//! Substitution marker normalization for rendered output
//!
//! Launch attribute values embed `$(keyword subject)` markers. For display we
//! rewrite them in a single left-to-right pass: `$(find pkg)` becomes the bare
//! subject, any other keyword becomes `{subject}`. Markers do not nest; the
//! first `)` after each `$(` terminates it, so a `$(` inside a subject is
//! treated as plain text. Resolution of markers against real values happens in
//! the `resolve` module, never here.

use crate::error::{ParseError, Result};

/// Keyword whose subject is spliced in verbatim (a package-share lookup).
const RESOURCE_KEYWORD: &str = "find";

/// Rewrite all substitution markers in `text` for display.
///
/// Marker-free input (including the empty string) passes through unchanged.
/// A `$(` with no matching `)` is an error.
pub fn normalize(text: &str) -> Result<String> {
    if !text.contains("$(") {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("$(") {
        out.push_str(&rest[..open]);
        let body_start = open + 2;
        let close = rest[body_start..].find(')').ok_or_else(|| {
            ParseError::UnterminatedSubstitution {
                text: text.to_string(),
            }
        })?;
        let body = &rest[body_start..body_start + close];
        let (keyword, subject) = split_marker_body(body);
        if keyword == RESOURCE_KEYWORD {
            out.push_str(subject);
        } else {
            out.push('{');
            out.push_str(subject);
            out.push('}');
        }
        rest = &rest[body_start + close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Split a marker body into keyword and subject at the first whitespace run.
/// A body with no whitespace is a keyword with an empty subject.
pub(crate) fn split_marker_body(body: &str) -> (&str, &str) {
    match body.split_once(char::is_whitespace) {
        Some((keyword, subject)) => (keyword, subject.trim()),
        None => (body, ""),
    }
}
