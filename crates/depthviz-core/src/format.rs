//! Pixel format and stream tags.
//!
//! These are the canonical format definitions used across the depthviz
//! crates. Depth cameras report either metric depth (`Z16`, scaled to
//! meters by a per-sensor unit factor) or stereo disparity
//! (`Disparity32`, inverse-proportional to depth); the colorizer emits
//! `Rgb8`.

/// Pixel data format of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 16-bit unsigned depth, in sensor-specific units.
    Z16,
    /// 32-bit float stereo disparity with fixed sub-pixel precision.
    Disparity32,
    /// Interleaved 8-bit RGB, the visualization output format.
    Rgb8,
}

impl PixelFormat {
    /// Bytes each pixel occupies in a raw buffer.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Z16 => 2,
            Self::Disparity32 => 4,
            Self::Rgb8 => 3,
        }
    }

    /// Whether this is a depth-class format the colorizer accepts as input.
    #[inline]
    pub const fn is_depth_class(&self) -> bool {
        matches!(self, Self::Z16 | Self::Disparity32)
    }

    /// Short name for diagnostics.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Z16 => "Z16",
            Self::Disparity32 => "Disparity32",
            Self::Rgb8 => "Rgb8",
        }
    }
}

/// The logical stream a profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Depth or disparity stream.
    Depth,
    /// Color stream.
    Color,
    /// Infrared stream.
    Infrared,
}

impl StreamKind {
    /// Short name for diagnostics.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Depth => "depth",
            Self::Color => "color",
            Self::Infrared => "infrared",
        }
    }
}
