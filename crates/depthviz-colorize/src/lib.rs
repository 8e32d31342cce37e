//! # depthviz-colorize
//!
//! Turns raw depth and disparity frames into RGB8 visualization frames.
//!
//! The [`Colorizer`] maps each scalar sample to a color from the active
//! palette under one of two policies:
//!
//! - **Equalized** - a cumulative histogram of the current frame
//!   stretches the gradient across the values actually present, so
//!   contrast adapts to the scene.
//! - **Fixed** - a user range in meters is mapped linearly; for
//!   disparity input the range is first converted through the sensor's
//!   stereo calibration.
//!
//! # Modules
//!
//! - [`histogram`] - cumulative depth histogram
//! - [`config`] - configuration options, presets, control handle
//! - [`calibration`] - disparity/depth conversion cache
//! - [`colorizer`] - the orchestrator and its four strategies
//!
//! # Usage
//!
//! ```rust
//! use depthviz_core::{Frame, PixelFormat, SampleBuffer, StreamKind, StreamProfile, VideoFrame};
//! use depthviz_colorize::Colorizer;
//!
//! let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 2, 2);
//! let frame = Frame::from(
//!     VideoFrame::new(profile, SampleBuffer::Z16(vec![0, 1200, 1200, 3400])).unwrap(),
//! );
//!
//! let mut colorizer = Colorizer::new();
//! assert!(Colorizer::should_process(&frame));
//! let rgb = colorizer.process(&frame).unwrap();
//! assert_eq!(rgb.as_rgb8().unwrap().len(), 2 * 2 * 3);
//! ```
//!
//! # Concurrency
//!
//! `process` takes `&mut self`; one call at a time per instance. The
//! configuration lives behind a shared handle ([`ControlHandle`]) so a
//! control path may adjust options concurrently; each `process` call
//! snapshots the configuration once at entry.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod calibration;
pub mod colorizer;
pub mod config;
pub mod histogram;

mod error;

pub use calibration::DisparityCalibration;
pub use colorizer::{Colorizer, Strategy};
pub use config::{ColorizerConfig, ControlHandle, OptionBounds, VisualPreset};
pub use error::{ColorizeError, ColorizeResult};
pub use histogram::DepthHistogram;
