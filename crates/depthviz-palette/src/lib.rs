//! # depthviz-palette
//!
//! Color maps for rendering normalized scalar values as RGB.
//!
//! A [`ColorMap`] is an ordered sequence of RGB control points with a
//! clamped, linearly interpolating lookup; optionally quantized into a
//! fixed number of discrete levels. The [`registry`] module exposes the
//! built-in palettes under stable integer indices, matching the indices
//! the colorizer's `color_map_index` option takes.
//!
//! # Usage
//!
//! ```rust
//! use depthviz_palette::{ColorMap, registry};
//!
//! // Index 0 is Jet: blue (near) through red to dark red (far).
//! let jet = registry::get(0).unwrap();
//! assert_eq!(jet.lookup(0.0), [0, 0, 255]);
//!
//! // Custom two-point ramp.
//! let ramp = ColorMap::new(vec![[0.0, 0.0, 0.0], [255.0, 255.0, 255.0]]).unwrap();
//! assert_eq!(ramp.lookup(0.5), [128, 128, 128]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod map;
pub mod registry;

pub use error::{PaletteError, PaletteResult};
pub use map::ColorMap;
