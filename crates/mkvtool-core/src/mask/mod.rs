//! Filename mask rendering.
//!
//! A mask is literal text mixed with tokens of the form `%<sizespec>{field}`,
//! where the optional size specifier follows printf conventions
//! (`%02.2{season}`, `%-20{title}`). Rendering is all-or-nothing: every token
//! must resolve to a set value, otherwise the render fails listing every
//! token that could not be resolved.
//!
//! Rendering runs in two phases. [`tokenize`] splits the mask into literal
//! and token segments, then each token is resolved against the [`Fields`]
//! independently.

mod format;
mod title;
mod tokenize;

pub use format::SizeSpec;
pub use title::title_case;
pub use tokenize::tokenize;

use crate::error::MaskError;
use crate::fields::{FieldValue, Fields, UNSET_NUMBER_CEILING};

/// Field that gets title capitalization when rendered.
pub const TITLE_FIELD: &str = "title";

/// A piece of a tokenized mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim.
    Literal(String),
    /// A placeholder to resolve.
    Token(Token),
}

/// A single `%<sizespec>{field}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token exactly as written in the mask.
    pub text: String,
    /// Lowercase field name.
    pub field: String,
    pub spec: SizeSpec,
}

impl Token {
    /// Render this token, or `None` when the field is absent or unset.
    pub fn render(&self, fields: &Fields) -> Option<String> {
        match fields.get(&self.field)? {
            FieldValue::Text(value) if !value.is_empty() => {
                if self.field == TITLE_FIELD {
                    Some(self.spec.format_text(&title_case(value)))
                } else {
                    Some(self.spec.format_text(value))
                }
            }
            FieldValue::Number(value) if *value > UNSET_NUMBER_CEILING => {
                Some(self.spec.format_number(*value))
            }
            _ => None,
        }
    }
}

/// Render `mask` with values from `fields`.
///
/// # Errors
///
/// Returns [`MaskError::Malformed`] when a token has an out of range width or
/// precision, and
/// [`MaskError::Unresolved`] listing every token whose field is absent, an
/// empty string, or a non-positive number.
pub fn render_mask(fields: &Fields, mask: &str) -> Result<String, MaskError> {
    let segments = tokenize(mask)?;

    let mut rendered = String::with_capacity(mask.len());
    let mut unresolved = Vec::new();

    for segment in &segments {
        match segment {
            Segment::Literal(text) => rendered.push_str(text),
            Segment::Token(token) => match token.render(fields) {
                Some(value) => rendered.push_str(&value),
                None => unresolved.push(token.text.clone()),
            },
        }
    }

    if !unresolved.is_empty() {
        return Err(MaskError::Unresolved { tokens: unresolved });
    }

    Ok(rendered)
}
