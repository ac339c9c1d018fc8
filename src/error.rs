use thiserror::Error;

/// Error returned by shape construction and update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A malformed rectangle, vertex list, handle, or a missing required reference.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ShapeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> ShapeError {
        ShapeError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
