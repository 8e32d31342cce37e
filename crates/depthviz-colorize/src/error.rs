//! Error types for colorization.

use depthviz_core::CoreError;
use thiserror::Error;

/// Result type for colorization operations.
pub type ColorizeResult<T> = Result<T, ColorizeError>;

/// Errors that can occur while colorizing a frame.
#[derive(Debug, Error)]
pub enum ColorizeError {
    /// Composite frame sets carry multiple streams and are not
    /// colorizable as a unit.
    #[error("composite frame sets are not colorizable")]
    CompositeFrame,

    /// The frame is not a depth-class input.
    #[error("unsupported input: {stream} stream in {format}")]
    UnsupportedFrame {
        /// Stream kind of the rejected frame.
        stream: &'static str,
        /// Pixel format of the rejected frame.
        format: &'static str,
    },

    /// The configured color map index is outside the registry.
    #[error("unknown color map index {0}")]
    UnknownColorMap(usize),

    /// Frame construction or validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
