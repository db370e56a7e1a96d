//! Mask tokenizer.

use super::{Segment, SizeSpec, Token};
use crate::error::MaskError;
use regex::Regex;
use std::sync::LazyLock;

/// A complete token: `%`, optional size spec, lowercase field in braces.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%((?:-?\d+)?(?:\.\d+)?)\{([a-z]+)\}").expect("token pattern is valid")
});

/// Split a mask into literal and token segments.
///
/// Tokens are matched left to right without overlap. Anything else, including
/// text that only resembles a token such as `%{Title}` or an unterminated
/// `%{year`, is kept verbatim. A token whose width or precision is out of
/// range makes the mask malformed.
pub fn tokenize(mask: &str) -> Result<Vec<Segment>, MaskError> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(mask) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_literal(&mut segments, &mask[last..whole.start()]);

        let spec = SizeSpec::parse(&caps[1])
            .map_err(|reason| MaskError::malformed(whole.start(), reason))?;

        segments.push(Segment::Token(Token {
            text: whole.as_str().to_string(),
            field: caps[2].to_string(),
            spec,
        }));
        last = whole.end();
    }

    push_literal(&mut segments, &mask[last..]);
    Ok(segments)
}

fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
}
