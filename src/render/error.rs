//! Renderer error types.

use std::fmt;

/// Errors that can occur while drawing a trace.
#[derive(Debug)]
pub enum RenderError {
    /// Any error reported by the drawing backend, such as a failure to encode the image.
    Backend(String),
    /// There is nothing to animate.
    EmptyTrace,
    /// Invalid configuration
    InvalidConfig(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Backend(msg) => write!(f, "drawing error: {msg}"),
            RenderError::EmptyTrace => write!(f, "the trace contains no points to draw"),
            RenderError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Wrap a plotters error, which is generic over the backend, into a [`RenderError`].
pub(crate) fn drawing<E: fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
