//! # depthviz-core
//!
//! Core types for depth and disparity frame visualization.
//!
//! This crate provides the shared vocabulary used across the depthviz
//! workspace: pixel formats, stream profiles, frame containers, and the
//! narrow sensor-calibration seam the colorizer reads through.
//!
//! # Types
//!
//! - [`PixelFormat`] / [`StreamKind`] - format and stream tags
//! - [`StreamProfile`] / [`ProfileId`] - stream identity and geometry
//! - [`VideoFrame`] / [`Frame`] / [`SampleBuffer`] - frame containers
//! - [`DepthSensor`] / [`StereoCalibration`] - sensor calibration seam
//!
//! # Usage
//!
//! ```rust
//! use depthviz_core::{PixelFormat, StreamKind, StreamProfile, SampleBuffer, VideoFrame};
//!
//! let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 640, 480);
//! let data = SampleBuffer::Z16(vec![0u16; 640 * 480]);
//! let frame = VideoFrame::new(profile, data).unwrap();
//! assert_eq!(frame.sample_count(), 640 * 480);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod format;
mod frame;
mod profile;
mod sensor;

pub use error::{CoreError, Result};
pub use format::{PixelFormat, StreamKind};
pub use frame::{Frame, SampleBuffer, VideoFrame};
pub use profile::{Intrinsics, ProfileId, StreamProfile};
pub use sensor::{DepthSensor, StereoCalibration};
