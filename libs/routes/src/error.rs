//! Error types for route parsing and resolution.

use permalink_slug::SlugError;
use thiserror::Error;

use crate::RouteFamily;

/// Errors that can occur when parsing or resolving a permalink path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The path does not start with a known route prefix.
    #[error("unknown route: '{path}'")]
    UnknownRoute { path: String },

    /// The path names a route family but no entity segment.
    #[error("missing entity segment in '{path}'")]
    MissingSegment { path: String },

    /// The path has segments after the entity segment.
    #[error("unexpected segments after entity in '{path}'")]
    UnexpectedSegments { path: String },

    /// The entity segment could not be decoded.
    #[error("invalid entity segment in '{path}': {source}")]
    Slug {
        path: String,
        #[source]
        source: SlugError,
    },

    /// No entity with this id exists in the route family.
    #[error("{family} {id} not found")]
    NotFound { family: RouteFamily, id: i64 },
}

impl RouteError {
    /// Returns true if the router should render a not-found state.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, RouteError::UnknownRoute { .. })
    }

    /// Returns the underlying slug error, if any.
    pub fn slug_error(&self) -> Option<&SlugError> {
        match self {
            RouteError::Slug { source, .. } => Some(source),
            _ => None,
        }
    }
}
