//! Error types for slug decoding.

use thiserror::Error;

/// Errors that can occur when decoding a permalink segment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The segment is empty.
    #[error("slug segment cannot be empty")]
    Empty,

    /// The segment does not start with a numeric id.
    #[error("invalid slug: '{segment}' does not start with a numeric id")]
    InvalidSlug { segment: String },

    /// The leading digits do not fit in an entity id.
    #[error("id out of range in slug '{segment}'")]
    IdOutOfRange { segment: String },
}

impl SlugError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, SlugError::Empty)
    }

    /// Returns the offending segment, if the input was not empty.
    pub fn segment(&self) -> Option<&str> {
        match self {
            SlugError::Empty => None,
            SlugError::InvalidSlug { segment } | SlugError::IdOutOfRange { segment } => {
                Some(segment.as_str())
            }
        }
    }
}
