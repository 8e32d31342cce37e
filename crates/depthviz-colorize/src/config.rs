//! Colorizer configuration, presets, and the shared control handle.
//!
//! Options mirror a camera-pipeline option surface: each numeric option
//! has declared min/max/step/default bounds and out-of-range writes are
//! clamped, not rejected. A [`ControlHandle`] is a cheap clone the UI or
//! control path holds; the colorizer snapshots the configuration once
//! per processed frame, so a frame is rendered under one consistent
//! configuration (last write wins between frames).

use depthviz_palette::registry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Declared bounds of a numeric option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionBounds {
    /// Smallest accepted value.
    pub min: f32,
    /// Largest accepted value.
    pub max: f32,
    /// UI step granularity.
    pub step: f32,
    /// Default value.
    pub default: f32,
}

/// Bounds of the `min_range_m` option.
pub const MIN_RANGE_BOUNDS: OptionBounds = OptionBounds {
    min: 0.0,
    max: 16.0,
    step: 0.1,
    default: 0.0,
};

/// Bounds of the `max_range_m` option.
pub const MAX_RANGE_BOUNDS: OptionBounds = OptionBounds {
    min: 0.0,
    max: 16.0,
    step: 0.1,
    default: 6.0,
};

/// Bounds of the `color_map_index` option; the upper bound tracks the
/// palette registry.
pub fn color_map_bounds() -> OptionBounds {
    OptionBounds {
        min: 0.0,
        max: (registry::len() - 1) as f32,
        step: 1.0,
        default: 0.0,
    }
}

/// Named colorization presets.
///
/// Setting a preset writes `{equalize, map_index, min_range_m,
/// max_range_m}` together as one fixed table entry; the write is atomic
/// with respect to configuration snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualPreset {
    /// Histogram equalization with the Jet palette; ranges untouched.
    #[default]
    Dynamic,
    /// Fixed range 0-6 m, Jet palette.
    Fixed,
    /// Fixed range 0.3-1.5 m, Hue palette.
    Near,
    /// Fixed range 1-16 m, Jet palette.
    Far,
}

impl VisualPreset {
    /// Preset for a stable option index, if in range.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Dynamic),
            1 => Some(Self::Fixed),
            2 => Some(Self::Near),
            3 => Some(Self::Far),
            _ => None,
        }
    }

    /// Stable option index of this preset.
    #[inline]
    pub fn index(&self) -> u32 {
        match self {
            Self::Dynamic => 0,
            Self::Fixed => 1,
            Self::Near => 2,
            Self::Far => 3,
        }
    }

    /// Display name shown in option descriptions.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dynamic => "Dynamic",
            Self::Fixed => "Fixed",
            Self::Near => "Near",
            Self::Far => "Far",
        }
    }

    fn apply(&self, config: &mut ColorizerConfig) {
        config.preset = *self;
        match self {
            Self::Dynamic => {
                config.equalize = true;
                config.map_index = 0;
            }
            Self::Fixed => {
                config.equalize = false;
                config.map_index = 0;
                config.min_range_m = 0.0;
                config.max_range_m = 6.0;
            }
            Self::Near => {
                config.equalize = false;
                config.map_index = 1;
                config.min_range_m = 0.3;
                config.max_range_m = 1.5;
            }
            Self::Far => {
                config.equalize = false;
                config.map_index = 0;
                config.min_range_m = 1.0;
                config.max_range_m = 16.0;
            }
        }
    }
}

/// The colorizer's configuration, snapshotted per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorizerConfig {
    /// Fixed-mode lower bound, meters.
    pub min_range_m: f32,
    /// Fixed-mode upper bound, meters.
    pub max_range_m: f32,
    /// Whether histogram equalization is active.
    pub equalize: bool,
    /// Active palette index into the registry.
    pub map_index: usize,
    /// Last preset written.
    pub preset: VisualPreset,
}

impl Default for ColorizerConfig {
    fn default() -> Self {
        Self {
            min_range_m: MIN_RANGE_BOUNDS.default,
            max_range_m: MAX_RANGE_BOUNDS.default,
            equalize: true,
            map_index: 0,
            preset: VisualPreset::Dynamic,
        }
    }
}

/// Shared, clamping access to a colorizer's configuration.
///
/// Clones share the same underlying configuration; setters clamp into
/// the declared option bounds instead of failing.
///
/// # Example
///
/// ```rust
/// use depthviz_colorize::{ControlHandle, VisualPreset};
///
/// let control = ControlHandle::new();
/// control.set_visual_preset(VisualPreset::Near);
/// let config = control.snapshot();
/// assert_eq!(config.min_range_m, 0.3);
/// assert_eq!(config.map_index, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ControlHandle {
    shared: Arc<RwLock<ColorizerConfig>>,
}

impl ControlHandle {
    /// Creates a handle over a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, ColorizerConfig> {
        match self.shared.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, ColorizerConfig> {
        match self.shared.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Copies the current configuration.
    pub fn snapshot(&self) -> ColorizerConfig {
        *self.read()
    }

    /// Sets the fixed-mode lower bound in meters, clamped to
    /// [`MIN_RANGE_BOUNDS`].
    pub fn set_min_range_m(&self, meters: f32) {
        self.write().min_range_m = meters.clamp(MIN_RANGE_BOUNDS.min, MIN_RANGE_BOUNDS.max);
    }

    /// Sets the fixed-mode upper bound in meters, clamped to
    /// [`MAX_RANGE_BOUNDS`].
    pub fn set_max_range_m(&self, meters: f32) {
        self.write().max_range_m = meters.clamp(MAX_RANGE_BOUNDS.min, MAX_RANGE_BOUNDS.max);
    }

    /// Selects the active palette, clamped into the registry.
    pub fn set_color_map_index(&self, index: usize) {
        self.write().map_index = index.min(registry::len() - 1);
    }

    /// Toggles histogram equalization.
    pub fn set_histogram_equalization(&self, enabled: bool) {
        self.write().equalize = enabled;
    }

    /// Applies a preset, overwriting the affected options together.
    pub fn set_visual_preset(&self, preset: VisualPreset) {
        preset.apply(&mut self.write());
    }
}
