//! Palette error types.

use thiserror::Error;

/// Result type for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;

/// Errors that can occur when building or selecting color maps.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color map needs at least two control points.
    #[error("color map needs at least 2 control points, got {0}")]
    TooFewPoints(usize),

    /// Quantization level must be at least two.
    #[error("quantization needs at least 2 levels, got {0}")]
    TooFewLevels(u32),

    /// No palette registered under the given index.
    #[error("unknown palette index {0}")]
    UnknownIndex(usize),
}
