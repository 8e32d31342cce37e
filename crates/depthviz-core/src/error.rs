//! Error types for core frame operations.

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur when constructing or inspecting frames.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Sample buffer length does not match the profile dimensions.
    #[error("buffer holds {got} samples, profile {width}x{height} needs {expected}")]
    SizeMismatch {
        /// Samples found in the buffer
        got: usize,
        /// Samples required by the profile
        expected: usize,
        /// Profile width
        width: u32,
        /// Profile height
        height: u32,
    },

    /// Sample buffer variant does not match the profile's pixel format.
    #[error("buffer format {got} does not match profile format {expected}")]
    FormatMismatch {
        /// Format implied by the buffer variant
        got: &'static str,
        /// Format declared by the profile
        expected: &'static str,
    },

    /// Width or height is zero.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch_message() {
        let err = CoreError::SizeMismatch {
            got: 10,
            expected: 307200,
            width: 640,
            height: 480,
        };
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains("640x480"));
    }
}
