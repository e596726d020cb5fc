//! Errors raised while handling page events.

use pagedom::SurfaceError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The surface rejected an operation (missing element, not an input).
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// The page structure does not match what a widget expects.
    #[error("malformed markup at '{id}': {reason}")]
    Markup { id: String, reason: &'static str },
}

impl PageError {
    pub fn markup(id: impl Into<String>, reason: &'static str) -> Self {
        Self::Markup {
            id: id.into(),
            reason,
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;
