//! Error types for track selection and mask rendering.

/// Errors returned by the track selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// An explicit track index does not exist in the file.
    #[error("track #{index} not found in file {file}")]
    NotFound { index: usize, file: String },

    /// No track satisfied any language of the priority list.
    #[error("no track with language(s): {}", languages.join(","))]
    NoMatch { languages: Vec<String> },
}

impl SelectionError {
    /// Create a not found error.
    pub fn not_found(index: usize, file: impl Into<String>) -> Self {
        Self::NotFound {
            index,
            file: file.into(),
        }
    }
}

/// Errors returned by the mask renderer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    /// One or more tokens had no usable value. Lists every offending token
    /// in mask order, as written in the mask.
    #[error("unable to resolve field(s): {}", tokens.join(", "))]
    Unresolved { tokens: Vec<String> },

    /// The mask contains a token opener that cannot be parsed.
    #[error("malformed mask at byte {position}: {reason}")]
    Malformed { position: usize, reason: String },
}

impl MaskError {
    /// Create a malformed mask error.
    pub fn malformed(position: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            position,
            reason: reason.into(),
        }
    }
}
