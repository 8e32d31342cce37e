//! Sensor calibration seam.
//!
//! The colorizer never talks to a device directly; it reads stereo
//! calibration through [`DepthSensor`], a one-method trait the hosting
//! pipeline implements. A sensor that is not stereo-capable returns
//! `None` and disparity conversion is skipped.

/// Calibration values a stereo depth sensor exposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoCalibration {
    /// Meters per raw depth unit (e.g. 0.001 for millimeter units).
    pub depth_units: f32,
    /// Distance between the stereo pair's imagers, in millimeters.
    pub stereo_baseline_mm: f32,
}

/// Read access to a sensor's stereo capability.
///
/// Queried once per stream-profile change, not per frame. Implementations
/// should be cheap and infallible; "not stereo" is expressed as `None`,
/// not as an error.
pub trait DepthSensor: Send + Sync {
    /// Returns the stereo calibration, or `None` if the sensor is not
    /// stereo-based.
    fn stereo_calibration(&self) -> Option<StereoCalibration>;
}
