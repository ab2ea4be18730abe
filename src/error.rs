//! Error types for the string-art engine.
//!
//! Every failure is deterministic: the same inputs always produce the same error.

use thiserror::Error;

/// Errors returned by [`Disk`](crate::engine::Disk) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiskError {
    /// Construction parameters were rejected. No disk is produced.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the parameters.
        reason: String,
    },

    /// The pixel buffer is not a square grayscale image.
    #[error("Invalid image dimensions: {len} bytes is not a square grayscale buffer")]
    InvalidImageDimensions {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// Greedy selection was requested before any image was processed.
    #[error("No image loaded")]
    NoImageLoaded,
}

impl DiskError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        DiskError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DiskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = DiskError::config("nail_count must be at least 3, got 2");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: nail_count must be at least 3, got 2"
        );

        let err = DiskError::InvalidImageDimensions { len: 10 };
        assert!(err.to_string().contains("10 bytes"));
    }
}
