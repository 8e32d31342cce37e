//! Stream profiles and their identity tokens.
//!
//! A [`StreamProfile`] describes one stream's geometry and format. Each
//! profile carries a [`ProfileId`] that is unique for the process
//! lifetime; downstream processing blocks compare ids to detect a source
//! change (e.g. the colorizer re-derives its target profile and
//! calibration only when the id differs from the previous frame's).

use crate::format::{PixelFormat, StreamKind};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PROFILE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity token for a stream profile.
///
/// Two frames originate from the same source exactly when their profile
/// ids are equal. Ids are never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(u64);

impl ProfileId {
    fn next() -> Self {
        Self(NEXT_PROFILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Video stream intrinsics.
///
/// Only the horizontal focal length is carried; it is all the
/// disparity-to-depth conversion needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intrinsics {
    /// Horizontal focal length, in pixels.
    pub fx: f32,
}

/// Description of one video stream: kind, format, and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamProfile {
    id: ProfileId,
    stream: StreamKind,
    format: PixelFormat,
    width: u32,
    height: u32,
    intrinsics: Intrinsics,
}

impl StreamProfile {
    /// Creates a profile with a fresh identity and default intrinsics.
    pub fn new(stream: StreamKind, format: PixelFormat, width: u32, height: u32) -> Self {
        Self {
            id: ProfileId::next(),
            stream,
            format,
            width,
            height,
            intrinsics: Intrinsics::default(),
        }
    }

    /// Sets the stream intrinsics (builder style).
    pub fn with_intrinsics(mut self, intrinsics: Intrinsics) -> Self {
        self.intrinsics = intrinsics;
        self
    }

    /// Derives the visualization target profile: same stream and
    /// geometry, [`PixelFormat::Rgb8`], fresh identity.
    pub fn to_rgb8(&self) -> Self {
        Self {
            id: ProfileId::next(),
            stream: self.stream,
            format: PixelFormat::Rgb8,
            width: self.width,
            height: self.height,
            intrinsics: self.intrinsics,
        }
    }

    /// The profile's identity token.
    #[inline]
    pub fn id(&self) -> ProfileId {
        self.id
    }

    /// The logical stream kind.
    #[inline]
    pub fn stream(&self) -> StreamKind {
        self.stream
    }

    /// The pixel format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel count (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The stream intrinsics.
    #[inline]
    pub fn intrinsics(&self) -> Intrinsics {
        self.intrinsics
    }
}
