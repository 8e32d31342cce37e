//! The colorizer orchestrator and its per-pixel strategies.
//!
//! Each frame is rendered by exactly one of four strategies, selected by
//! the input format and the equalization flag:
//!
//! | format | equalize | strategy |
//! |---|---|---|
//! | Z16 | true | [`Strategy::DepthEqualized`] |
//! | Z16 | false | [`Strategy::DepthFixed`] |
//! | Disparity32 | true | [`Strategy::DisparityEqualized`] |
//! | Disparity32 | false | [`Strategy::DisparityFixed`] |
//!
//! Zero-valued samples mean "no data" and always render black.

use crate::calibration::DisparityCalibration;
use crate::config::{ColorizerConfig, ControlHandle};
use crate::error::{ColorizeError, ColorizeResult};
use crate::histogram::DepthHistogram;
use depthviz_core::{Frame, PixelFormat, SampleBuffer, StreamKind, StreamProfile, VideoFrame};
use depthviz_palette::{ColorMap, registry};
use tracing::{debug, trace};

/// The four per-pixel mapping strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Depth samples, histogram-equalized positions.
    DepthEqualized,
    /// Depth samples, linear position within the metric range.
    DepthFixed,
    /// Disparity samples, histogram-equalized positions.
    DisparityEqualized,
    /// Disparity samples, linear position within the disparity window.
    DisparityFixed,
}

impl Strategy {
    /// Selects the strategy for an input format and equalization mode.
    ///
    /// Returns `None` for non-depth-class formats.
    pub fn select(format: PixelFormat, equalize: bool) -> Option<Self> {
        match (format, equalize) {
            (PixelFormat::Z16, true) => Some(Self::DepthEqualized),
            (PixelFormat::Z16, false) => Some(Self::DepthFixed),
            (PixelFormat::Disparity32, true) => Some(Self::DisparityEqualized),
            (PixelFormat::Disparity32, false) => Some(Self::DisparityFixed),
            (PixelFormat::Rgb8, _) => None,
        }
    }

    /// Strategy name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthEqualized => "depth_equalized",
            Self::DepthFixed => "depth_fixed",
            Self::DisparityEqualized => "disparity_equalized",
            Self::DisparityFixed => "disparity_fixed",
        }
    }
}

/// Depth visualization processing block.
///
/// Holds the mutable per-source state reused across frames: the
/// calibration cache, the preallocated histogram, and the derived output
/// profile. Configuration is shared through [`ControlHandle`] and read
/// once per `process` call.
///
/// # Example
///
/// ```rust
/// use depthviz_core::{Frame, PixelFormat, SampleBuffer, StreamKind, StreamProfile, VideoFrame};
/// use depthviz_colorize::{Colorizer, VisualPreset};
///
/// let mut colorizer = Colorizer::new();
/// colorizer.control().set_visual_preset(VisualPreset::Fixed);
///
/// let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 2, 1);
/// let frame = Frame::from(
///     VideoFrame::new(profile, SampleBuffer::Z16(vec![0, 3000])).unwrap(),
/// );
/// let rgb = colorizer.process(&frame).unwrap();
/// assert_eq!(&rgb.as_rgb8().unwrap()[0..3], &[0, 0, 0]);
/// ```
pub struct Colorizer {
    control: ControlHandle,
    calibration: DisparityCalibration,
    histogram: DepthHistogram,
    target: Option<StreamProfile>,
}

impl Colorizer {
    /// Creates a colorizer with default configuration.
    pub fn new() -> Self {
        Self {
            control: ControlHandle::new(),
            calibration: DisparityCalibration::new(),
            histogram: DepthHistogram::new(),
            target: None,
        }
    }

    /// A handle for the control path to adjust options.
    pub fn control(&self) -> ControlHandle {
        self.control.clone()
    }

    /// The current configuration snapshot.
    pub fn config(&self) -> ColorizerConfig {
        self.control.snapshot()
    }

    /// Admission filter: whether `process` can colorize this frame.
    ///
    /// Rejects composite frame sets and frames whose stream is not
    /// depth-class. Callers should skip rejected frames; they are not an
    /// error.
    pub fn should_process(frame: &Frame) -> bool {
        match frame.as_video() {
            Some(video) => {
                video.profile().stream() == StreamKind::Depth
                    && video.profile().format().is_depth_class()
            }
            None => false,
        }
    }

    /// Colorizes one frame into a new RGB8 frame of the same geometry.
    ///
    /// On a frame-source change (profile identity differs from the
    /// previous call's) the target profile and calibration are
    /// recomputed first. Frames [`Self::should_process`] rejects produce
    /// an error here.
    pub fn process(&mut self, frame: &Frame) -> ColorizeResult<VideoFrame> {
        let video = frame.as_video().ok_or(ColorizeError::CompositeFrame)?;
        let profile = video.profile();
        if profile.stream() != StreamKind::Depth || !profile.format().is_depth_class() {
            return Err(unsupported(video));
        }

        let config = self.control.snapshot();
        let map = registry::get(config.map_index)
            .ok_or(ColorizeError::UnknownColorMap(config.map_index))?;

        if self.calibration.needs_refresh(profile.id()) {
            debug!(
                width = profile.width(),
                height = profile.height(),
                format = profile.format().name(),
                "new frame source"
            );
            self.target = Some(profile.to_rgb8());
            self.calibration.refresh(profile, video.sensor());
        }
        let target = match &self.target {
            Some(t) => t.clone(),
            None => profile.to_rgb8(),
        };

        let strategy = Strategy::select(profile.format(), config.equalize)
            .ok_or_else(|| unsupported(video))?;
        trace!(
            strategy = strategy.name(),
            map_index = config.map_index,
            "colorizing frame"
        );

        let mut out = vec![0u8; profile.pixel_count() * 3];
        match strategy {
            Strategy::DepthEqualized => {
                let samples = video.as_z16().ok_or_else(|| unsupported(video))?;
                self.histogram.update_z16(samples);
                let hist = &self.histogram;
                fill(&mut out, samples, map, |d: u16| {
                    (d != 0).then(|| hist.normalized(d as usize))
                });
            }
            Strategy::DepthFixed => {
                let samples = video.as_z16().ok_or_else(|| unsupported(video))?;
                let units = self.calibration.depth_units();
                let min = config.min_range_m;
                let span = config.max_range_m - config.min_range_m;
                fill(&mut out, samples, map, move |d: u16| {
                    (d != 0).then(|| (d as f32 * units - min) / span)
                });
            }
            Strategy::DisparityEqualized => {
                let samples = video.as_disparity32().ok_or_else(|| unsupported(video))?;
                self.histogram.update_disparity32(samples);
                let hist = &self.histogram;
                fill(&mut out, samples, map, |s: f32| {
                    let v = s as usize;
                    (v != 0).then(|| hist.normalized(v))
                });
            }
            Strategy::DisparityFixed => {
                let samples = video.as_disparity32().ok_or_else(|| unsupported(video))?;
                let (dmin, dmax) =
                    self.calibration.disparity_range(config.min_range_m, config.max_range_m);
                fill(&mut out, samples, map, move |s: f32| {
                    (s != 0.0).then(|| (s - dmin) / (dmax - dmin))
                });
            }
        }

        Ok(VideoFrame::new(target, SampleBuffer::Rgb8(out))?)
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new()
    }
}

fn unsupported(video: &VideoFrame) -> ColorizeError {
    ColorizeError::UnsupportedFrame {
        stream: video.profile().stream().name(),
        format: video.profile().format().name(),
    }
}

/// Writes one RGB triple per sample; `position` returns the normalized
/// palette position, or `None` for no-data samples (rendered black).
#[cfg(feature = "parallel")]
fn fill<T, F>(out: &mut [u8], samples: &[T], map: &ColorMap, position: F)
where
    T: Copy + Send + Sync,
    F: Fn(T) -> Option<f32> + Sync,
{
    use rayon::prelude::*;

    out.par_chunks_exact_mut(3)
        .zip(samples.par_iter())
        .for_each(|(px, &s)| {
            let color = match position(s) {
                Some(t) => map.lookup(t),
                None => [0, 0, 0],
            };
            px.copy_from_slice(&color);
        });
}

/// Writes one RGB triple per sample; `position` returns the normalized
/// palette position, or `None` for no-data samples (rendered black).
#[cfg(not(feature = "parallel"))]
fn fill<T, F>(out: &mut [u8], samples: &[T], map: &ColorMap, position: F)
where
    T: Copy,
    F: Fn(T) -> Option<f32>,
{
    for (px, &s) in out.chunks_exact_mut(3).zip(samples) {
        let color = match position(s) {
            Some(t) => map.lookup(t),
            None => [0, 0, 0],
        };
        px.copy_from_slice(&color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisualPreset;
    use depthviz_core::{DepthSensor, Intrinsics, StereoCalibration};
    use std::sync::Arc;

    struct StubSensor(Option<StereoCalibration>);

    impl DepthSensor for StubSensor {
        fn stereo_calibration(&self) -> Option<StereoCalibration> {
            self.0
        }
    }

    fn z16_frame(width: u32, height: u32, samples: Vec<u16>) -> Frame {
        let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, width, height);
        Frame::from(VideoFrame::new(profile, SampleBuffer::Z16(samples)).unwrap())
    }

    fn pixel(frame: &VideoFrame, index: usize) -> [u8; 3] {
        let data = frame.as_rgb8().unwrap();
        [data[index * 3], data[index * 3 + 1], data[index * 3 + 2]]
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(
            Strategy::select(PixelFormat::Z16, true),
            Some(Strategy::DepthEqualized)
        );
        assert_eq!(
            Strategy::select(PixelFormat::Z16, false),
            Some(Strategy::DepthFixed)
        );
        assert_eq!(
            Strategy::select(PixelFormat::Disparity32, true),
            Some(Strategy::DisparityEqualized)
        );
        assert_eq!(
            Strategy::select(PixelFormat::Disparity32, false),
            Some(Strategy::DisparityFixed)
        );
        assert_eq!(Strategy::select(PixelFormat::Rgb8, true), None);
    }

    #[test]
    fn test_should_process_filters() {
        assert!(Colorizer::should_process(&z16_frame(2, 2, vec![0; 4])));

        let color = StreamProfile::new(StreamKind::Color, PixelFormat::Rgb8, 2, 2);
        let color_frame =
            Frame::from(VideoFrame::new(color, SampleBuffer::Rgb8(vec![0; 12])).unwrap());
        assert!(!Colorizer::should_process(&color_frame));

        let depth = StreamProfile::new(StreamKind::Depth, PixelFormat::Z16, 2, 2);
        let video = VideoFrame::new(depth, SampleBuffer::Z16(vec![0; 4])).unwrap();
        assert!(!Colorizer::should_process(&Frame::Set(vec![video])));
    }

    #[test]
    fn test_rejected_frames_error_in_process() {
        let mut colorizer = Colorizer::new();
        let color = StreamProfile::new(StreamKind::Color, PixelFormat::Rgb8, 2, 2);
        let frame = Frame::from(VideoFrame::new(color, SampleBuffer::Rgb8(vec![0; 12])).unwrap());
        assert!(matches!(
            colorizer.process(&frame),
            Err(ColorizeError::UnsupportedFrame { .. })
        ));
        assert!(matches!(
            colorizer.process(&Frame::Set(vec![])),
            Err(ColorizeError::CompositeFrame)
        ));
    }

    #[test]
    fn test_all_zero_frame_is_black() {
        let mut colorizer = Colorizer::new();
        for equalize in [true, false] {
            colorizer.control().set_histogram_equalization(equalize);
            let rgb = colorizer.process(&z16_frame(3, 2, vec![0; 6])).unwrap();
            assert!(rgb.as_rgb8().unwrap().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_depth_fixed_full_range_hits_last_point() {
        let mut colorizer = Colorizer::new();
        let control = colorizer.control();
        control.set_histogram_equalization(false);
        control.set_min_range_m(0.0);
        control.set_max_range_m(6.0);

        // 6000 raw units * 0.001 m/unit = 6.0 m -> position 1.0.
        let rgb = colorizer.process(&z16_frame(1, 1, vec![6000])).unwrap();
        let jet_last = registry::get(0).unwrap().lookup(1.0);
        assert_eq!(pixel(&rgb, 0), jet_last);
    }

    #[test]
    fn test_depth_equalized_2x2() {
        let mut colorizer = Colorizer::new();
        let rgb = colorizer.process(&z16_frame(2, 2, vec![0, 1, 1, 2])).unwrap();

        assert_eq!(pixel(&rgb, 0), [0, 0, 0]);
        assert_eq!(pixel(&rgb, 1), pixel(&rgb, 2));
        assert_ne!(pixel(&rgb, 1), pixel(&rgb, 3));
        // Value 2 tops the cumulative distribution: last palette point.
        assert_eq!(pixel(&rgb, 3), registry::get(0).unwrap().lookup(1.0));
    }

    #[test]
    fn test_output_profile_matches_input_geometry() {
        let mut colorizer = Colorizer::new();
        let rgb = colorizer.process(&z16_frame(4, 3, vec![100; 12])).unwrap();
        assert_eq!(rgb.profile().format(), PixelFormat::Rgb8);
        assert_eq!(rgb.profile().width(), 4);
        assert_eq!(rgb.profile().height(), 3);
    }

    #[test]
    fn test_disparity_fixed_with_calibration() {
        let sensor: Arc<dyn DepthSensor> = Arc::new(StubSensor(Some(StereoCalibration {
            depth_units: 0.001,
            stereo_baseline_mm: 50.0,
        })));
        let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Disparity32, 2, 1)
            .with_intrinsics(Intrinsics { fx: 400.0 });
        // factor = 0.05 * 400 * 32 / 0.001 = 640000
        // range [0.5 m, 4 m] -> disparity window [160, 1280]
        let frame = Frame::from(
            VideoFrame::with_sensor(
                profile,
                SampleBuffer::Disparity32(vec![1280.0, 160.0]),
                sensor,
            )
            .unwrap(),
        );

        let mut colorizer = Colorizer::new();
        let control = colorizer.control();
        control.set_histogram_equalization(false);
        control.set_min_range_m(0.5);
        control.set_max_range_m(4.0);

        let rgb = colorizer.process(&frame).unwrap();
        let jet = registry::get(0).unwrap();
        // High disparity is near range -> top of the palette.
        assert_eq!(pixel(&rgb, 0), jet.lookup(1.0));
        assert_eq!(pixel(&rgb, 1), jet.lookup(0.0));
    }

    #[test]
    fn test_disparity_without_stereo_sensor_degrades() {
        let sensor: Arc<dyn DepthSensor> = Arc::new(StubSensor(None));
        let profile = StreamProfile::new(StreamKind::Depth, PixelFormat::Disparity32, 2, 1);
        let frame = Frame::from(
            VideoFrame::with_sensor(profile, SampleBuffer::Disparity32(vec![0.0, 32.0]), sensor)
                .unwrap(),
        );

        let mut colorizer = Colorizer::new();
        colorizer.control().set_histogram_equalization(false);

        // Conversion factor is still zero; output is defined, zero
        // samples stay black.
        let rgb = colorizer.process(&frame).unwrap();
        assert_eq!(pixel(&rgb, 0), [0, 0, 0]);
    }

    #[test]
    fn test_preset_switch_changes_palette() {
        let mut colorizer = Colorizer::new();
        colorizer.control().set_visual_preset(VisualPreset::Near);

        // Near preset: fixed range [0.3, 1.5] with the Hue palette.
        let rgb = colorizer.process(&z16_frame(1, 1, vec![1500])).unwrap();
        let hue = registry::get(1).unwrap();
        assert_eq!(pixel(&rgb, 0), hue.lookup(1.0));
    }
}
