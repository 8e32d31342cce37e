//! Frame containers.
//!
//! A [`VideoFrame`] owns one stream's samples together with its
//! [`StreamProfile`] and, when the hosting pipeline provides one, a handle
//! to the originating sensor. [`Frame`] wraps either a single video frame
//! or a composite set of frames; processing blocks that operate on single
//! streams reject the composite variant.
//!
//! # Memory Layout
//!
//! Samples are stored row-major, top-to-bottom. `Rgb8` data is
//! interleaved `[R G B R G B ...]` with stride `width * 3`.

use crate::error::{CoreError, Result};
use crate::format::PixelFormat;
use crate::profile::StreamProfile;
use crate::sensor::DepthSensor;
use std::sync::Arc;

/// Raw sample storage, tagged by format.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleBuffer {
    /// 16-bit depth samples.
    Z16(Vec<u16>),
    /// 32-bit float disparity samples.
    Disparity32(Vec<f32>),
    /// Interleaved 8-bit RGB samples.
    Rgb8(Vec<u8>),
}

impl SampleBuffer {
    /// The pixel format this buffer stores.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        match self {
            Self::Z16(_) => PixelFormat::Z16,
            Self::Disparity32(_) => PixelFormat::Disparity32,
            Self::Rgb8(_) => PixelFormat::Rgb8,
        }
    }

    /// Number of pixels the buffer holds.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        match self {
            Self::Z16(v) => v.len(),
            Self::Disparity32(v) => v.len(),
            Self::Rgb8(v) => v.len() / 3,
        }
    }
}

/// One video frame: profile, samples, and an optional sensor handle.
#[derive(Clone)]
pub struct VideoFrame {
    profile: StreamProfile,
    data: SampleBuffer,
    sensor: Option<Arc<dyn DepthSensor>>,
}

impl VideoFrame {
    /// Creates a frame, validating that the buffer matches the profile's
    /// format and dimensions.
    pub fn new(profile: StreamProfile, data: SampleBuffer) -> Result<Self> {
        Self::with_sensor_opt(profile, data, None)
    }

    /// Creates a frame carrying a handle to the sensor it originated from.
    pub fn with_sensor(
        profile: StreamProfile,
        data: SampleBuffer,
        sensor: Arc<dyn DepthSensor>,
    ) -> Result<Self> {
        Self::with_sensor_opt(profile, data, Some(sensor))
    }

    fn with_sensor_opt(
        profile: StreamProfile,
        data: SampleBuffer,
        sensor: Option<Arc<dyn DepthSensor>>,
    ) -> Result<Self> {
        if profile.width() == 0 || profile.height() == 0 {
            return Err(CoreError::InvalidDimensions {
                width: profile.width(),
                height: profile.height(),
            });
        }
        if data.format() != profile.format() {
            return Err(CoreError::FormatMismatch {
                got: data.format().name(),
                expected: profile.format().name(),
            });
        }
        let expected = profile.pixel_count();
        if data.pixel_count() != expected {
            return Err(CoreError::SizeMismatch {
                got: data.pixel_count(),
                expected,
                width: profile.width(),
                height: profile.height(),
            });
        }
        Ok(Self {
            profile,
            data,
            sensor,
        })
    }

    /// The frame's stream profile.
    #[inline]
    pub fn profile(&self) -> &StreamProfile {
        &self.profile
    }

    /// The raw sample buffer.
    #[inline]
    pub fn data(&self) -> &SampleBuffer {
        &self.data
    }

    /// The originating sensor, when the pipeline attached one.
    #[inline]
    pub fn sensor(&self) -> Option<&Arc<dyn DepthSensor>> {
        self.sensor.as_ref()
    }

    /// Number of pixels in the frame.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.pixel_count()
    }

    /// Depth samples, if this is a `Z16` frame.
    #[inline]
    pub fn as_z16(&self) -> Option<&[u16]> {
        match &self.data {
            SampleBuffer::Z16(v) => Some(v),
            _ => None,
        }
    }

    /// Disparity samples, if this is a `Disparity32` frame.
    #[inline]
    pub fn as_disparity32(&self) -> Option<&[f32]> {
        match &self.data {
            SampleBuffer::Disparity32(v) => Some(v),
            _ => None,
        }
    }

    /// RGB bytes, if this is an `Rgb8` frame.
    #[inline]
    pub fn as_rgb8(&self) -> Option<&[u8]> {
        match &self.data {
            SampleBuffer::Rgb8(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Debug for VideoFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoFrame")
            .field("profile", &self.profile)
            .field("format", &self.data.format())
            .field("pixels", &self.data.pixel_count())
            .field("has_sensor", &self.sensor.is_some())
            .finish()
    }
}

/// A frame as delivered by the pipeline: single video frame or a
/// composite set of synchronized frames.
#[derive(Debug, Clone)]
pub enum Frame {
    /// A single video frame.
    Video(VideoFrame),
    /// A composite set of frames from multiple streams.
    Set(Vec<VideoFrame>),
}

impl Frame {
    /// The contained video frame, unless this is a composite set.
    #[inline]
    pub fn as_video(&self) -> Option<&VideoFrame> {
        match self {
            Self::Video(f) => Some(f),
            Self::Set(_) => None,
        }
    }

    /// Whether this is a composite frame set.
    #[inline]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

impl From<VideoFrame> for Frame {
    fn from(frame: VideoFrame) -> Self {
        Self::Video(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::StreamKind;

    #[test]
    fn test_valid_frame() {
        let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 4, 2);
        let frame = VideoFrame::new(profile, SampleBuffer::Z16(vec![0; 8])).unwrap();
        assert_eq!(frame.sample_count(), 8);
        assert!(frame.as_z16().is_some());
        assert!(frame.as_disparity32().is_none());
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 4, 2);
        let err = VideoFrame::new(profile, SampleBuffer::Z16(vec![0; 7])).unwrap_err();
        assert!(matches!(err, CoreError::SizeMismatch { got: 7, .. }));
    }

    #[test]
    fn test_format_mismatch_rejected() {
        let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 2, 2);
        let err = VideoFrame::new(profile, SampleBuffer::Disparity32(vec![0.0; 4])).unwrap_err();
        assert!(matches!(err, CoreError::FormatMismatch { .. }));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 0, 2);
        let err = VideoFrame::new(profile, SampleBuffer::Z16(vec![])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_frame_set() {
        let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 2, 2);
        let video = VideoFrame::new(profile, SampleBuffer::Z16(vec![0; 4])).unwrap();
        let set = Frame::Set(vec![video.clone()]);
        assert!(set.is_set());
        assert!(set.as_video().is_none());
        assert!(Frame::from(video).as_video().is_some());
    }
}
