//! Color map control points and lookup.

use crate::error::{PaletteError, PaletteResult};

/// An ordered palette of RGB control points.
///
/// `lookup(t)` renders a normalized scalar as a color by linear
/// interpolation between the two bracketing control points. A quantized
/// map first snaps `t` to one of a fixed number of equal levels, which
/// turns the gradient into discrete bands.
///
/// # Invariants
///
/// - At least two control points.
/// - `lookup(0.0)` equals the first point and `lookup(1.0)` the last,
///   exactly.
///
/// # Example
///
/// ```rust
/// use depthviz_palette::ColorMap;
///
/// let ramp = ColorMap::new(vec![[255.0, 255.0, 255.0], [0.0, 0.0, 0.0]]).unwrap();
/// assert_eq!(ramp.lookup(0.0), [255, 255, 255]);
/// assert_eq!(ramp.lookup(1.0), [0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    points: Vec<[f32; 3]>,
    quantization: Option<u32>,
}

impl ColorMap {
    /// Creates a continuous color map from control points.
    pub fn new(points: Vec<[f32; 3]>) -> PaletteResult<Self> {
        if points.len() < 2 {
            return Err(PaletteError::TooFewPoints(points.len()));
        }
        Ok(Self {
            points,
            quantization: None,
        })
    }

    /// Creates a quantized color map with `levels` discrete output levels.
    pub fn quantized(points: Vec<[f32; 3]>, levels: u32) -> PaletteResult<Self> {
        if points.len() < 2 {
            return Err(PaletteError::TooFewPoints(points.len()));
        }
        if levels < 2 {
            return Err(PaletteError::TooFewLevels(levels));
        }
        Ok(Self {
            points,
            quantization: Some(levels),
        })
    }

    /// Number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; maps hold at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Quantization level count, if this map is quantized.
    #[inline]
    pub fn quantization(&self) -> Option<u32> {
        self.quantization
    }

    /// The control points, in order.
    #[inline]
    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    /// Looks up the color for a normalized position.
    ///
    /// `t` is clamped to `[0, 1]`; non-finite values map to 0. Never
    /// fails and never allocates.
    pub fn lookup(&self, t: f32) -> [u8; 3] {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let t = match self.quantization {
            // Snap to the nearest of N equal levels.
            Some(levels) => {
                let steps = (levels - 1) as f32;
                (t * steps).round() / steps
            }
            None => t,
        };

        let last = self.points.len() - 1;
        let pos = t * last as f32;
        let idx0 = (pos.floor() as usize).min(last);
        let idx1 = (idx0 + 1).min(last);
        let frac = pos - idx0 as f32;

        let a = self.points[idx0];
        let b = self.points[idx1];
        [
            lerp(a[0], b[0], frac),
            lerp(a[1], b[1], frac),
            lerp(a[2], b[2], frac),
        ]
    }
}

#[inline]
fn lerp(a: f32, b: f32, frac: f32) -> u8 {
    (a + (b - a) * frac).round().clamp(0.0, 255.0) as u8
}
