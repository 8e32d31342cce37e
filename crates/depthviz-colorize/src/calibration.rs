//! Disparity/depth conversion cache.
//!
//! Converting between stereo disparity and metric depth needs three
//! per-sensor values: the depth unit scale, the stereo baseline, and the
//! horizontal focal length. They only change when the frame source
//! changes, so the cache is keyed on the stream-profile identity and the
//! sensor is queried once per source change, never per frame.

use depthviz_core::{DepthSensor, PixelFormat, ProfileId, StreamProfile};
use std::sync::Arc;
use tracing::debug;

/// Sub-pixel precision of disparity samples: values carry 5 fractional
/// bits, i.e. 32 steps per pixel of disparity.
pub const DISPARITY_FRACTIONAL_BITS: u32 = 5;

/// Depth unit scale assumed when no sensor calibration is available
/// (millimeter units).
pub const DEFAULT_DEPTH_UNITS: f32 = 0.001;

/// Cached disparity/depth conversion state for one frame source.
#[derive(Debug, Clone)]
pub struct DisparityCalibration {
    source: Option<ProfileId>,
    is_stereo: bool,
    focal_length_mm: f32,
    stereo_baseline_m: f32,
    depth_units: f32,
    conversion_factor: f32,
}

impl DisparityCalibration {
    /// Creates an empty cache with the default depth unit scale.
    pub fn new() -> Self {
        Self {
            source: None,
            is_stereo: false,
            focal_length_mm: 0.0,
            stereo_baseline_m: 0.0,
            depth_units: DEFAULT_DEPTH_UNITS,
            conversion_factor: 0.0,
        }
    }

    /// Whether `id` differs from the source this cache was computed for.
    #[inline]
    pub fn needs_refresh(&self, id: ProfileId) -> bool {
        self.source != Some(id)
    }

    /// Recomputes the cache for a new frame source.
    ///
    /// Queries the sensor's stereo capability once. A non-stereo sensor
    /// leaves the previous conversion factor in place; disparity frames
    /// from such a source still colorize, just not meaningfully.
    pub fn refresh(&mut self, profile: &StreamProfile, sensor: Option<&Arc<dyn DepthSensor>>) {
        self.source = Some(profile.id());

        match sensor.and_then(|s| s.stereo_calibration()) {
            Some(cal) => {
                self.is_stereo = true;
                self.depth_units = cal.depth_units;
                self.stereo_baseline_m = cal.stereo_baseline_mm * 0.001;
                if profile.format() == PixelFormat::Disparity32 {
                    self.focal_length_mm = profile.intrinsics().fx;
                    let fractions = (1u32 << DISPARITY_FRACTIONAL_BITS) as f32;
                    self.conversion_factor =
                        self.stereo_baseline_m * self.focal_length_mm * fractions
                            / self.depth_units;
                }
                debug!(
                    depth_units = self.depth_units,
                    baseline_m = self.stereo_baseline_m,
                    fx = self.focal_length_mm,
                    factor = self.conversion_factor,
                    "refreshed stereo calibration"
                );
            }
            None => {
                self.is_stereo = false;
                debug!("source is not stereo-based, keeping prior conversion factor");
            }
        }
    }

    /// Whether the current source is stereo-based.
    #[inline]
    pub fn is_stereo(&self) -> bool {
        self.is_stereo
    }

    /// Meters per raw depth unit for the current source.
    #[inline]
    pub fn depth_units(&self) -> f32 {
        self.depth_units
    }

    /// The cached depth-to-disparity conversion factor.
    #[inline]
    pub fn conversion_factor(&self) -> f32 {
        self.conversion_factor
    }

    /// Converts a metric depth window into a disparity window.
    ///
    /// Disparity decreases as depth increases, so the near depth bound
    /// yields the disparity maximum and the far bound the minimum.
    pub fn disparity_range(&self, min_range_m: f32, max_range_m: f32) -> (f32, f32) {
        let disparity_min = self.conversion_factor / max_range_m * self.depth_units;
        let disparity_max = self.conversion_factor / min_range_m * self.depth_units;
        (disparity_min, disparity_max)
    }
}

impl Default for DisparityCalibration {
    fn default() -> Self {
        Self::new()
    }
}
