//! Built-in palette registry.
//!
//! Palettes live under stable integer indices; UI layers present the
//! names, processing code looks maps up by index. The registry is built
//! once at startup and is immutable afterwards.
//!
//! | index | name |
//! |---|---|
//! | 0 | Jet |
//! | 1 | Hue |
//! | 2 | Classic |
//! | 3 | White to Black |
//! | 4 | Black to White |
//! | 5 | Bio |
//! | 6 | Cold |
//! | 7 | Warm |
//! | 8 | Quantized |
//! | 9 | Pattern |

use crate::map::ColorMap;
use std::sync::LazyLock;

/// A palette together with its display name.
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    /// Display name shown in option descriptions.
    pub name: &'static str,
    /// The color map itself.
    pub map: ColorMap,
}

fn jet() -> ColorMap {
    ColorMap::new(vec![
        [0.0, 0.0, 255.0],
        [0.0, 255.0, 255.0],
        [255.0, 255.0, 0.0],
        [255.0, 0.0, 0.0],
        [50.0, 0.0, 0.0],
    ])
    .expect("static palette")
}

fn hue() -> ColorMap {
    ColorMap::new(vec![
        [255.0, 0.0, 0.0],
        [255.0, 255.0, 0.0],
        [0.0, 255.0, 0.0],
        [0.0, 255.0, 255.0],
        [0.0, 0.0, 255.0],
        [255.0, 0.0, 255.0],
        [255.0, 0.0, 0.0],
    ])
    .expect("static palette")
}

fn classic() -> ColorMap {
    ColorMap::new(vec![
        [30.0, 77.0, 203.0],
        [25.0, 60.0, 192.0],
        [45.0, 117.0, 220.0],
        [204.0, 108.0, 191.0],
        [196.0, 57.0, 178.0],
        [198.0, 33.0, 24.0],
    ])
    .expect("static palette")
}

fn grayscale() -> ColorMap {
    ColorMap::new(vec![[255.0, 255.0, 255.0], [0.0, 0.0, 0.0]]).expect("static palette")
}

fn inv_grayscale() -> ColorMap {
    ColorMap::new(vec![[0.0, 0.0, 0.0], [255.0, 255.0, 255.0]]).expect("static palette")
}

fn biomes() -> ColorMap {
    ColorMap::new(vec![
        [0.0, 0.0, 204.0],
        [204.0, 230.0, 255.0],
        [255.0, 255.0, 153.0],
        [170.0, 255.0, 128.0],
        [0.0, 153.0, 0.0],
        [230.0, 242.0, 255.0],
    ])
    .expect("static palette")
}

fn cold() -> ColorMap {
    ColorMap::new(vec![
        [230.0, 247.0, 255.0],
        [0.0, 92.0, 230.0],
        [0.0, 179.0, 179.0],
        [0.0, 51.0, 153.0],
        [0.0, 5.0, 15.0],
    ])
    .expect("static palette")
}

fn warm() -> ColorMap {
    ColorMap::new(vec![
        [255.0, 255.0, 230.0],
        [255.0, 204.0, 0.0],
        [255.0, 136.0, 77.0],
        [255.0, 51.0, 0.0],
        [128.0, 0.0, 0.0],
        [10.0, 0.0, 0.0],
    ])
    .expect("static palette")
}

fn quantized() -> ColorMap {
    ColorMap::quantized(vec![[255.0, 255.0, 255.0], [0.0, 0.0, 0.0]], 6)
        .expect("static palette")
}

fn pattern() -> ColorMap {
    // 50 alternating white/black points: high-frequency bands for depth
    // contour inspection.
    let points = (0..50)
        .map(|i| {
            if i % 2 == 0 {
                [255.0, 255.0, 255.0]
            } else {
                [0.0, 0.0, 0.0]
            }
        })
        .collect();
    ColorMap::new(points).expect("static palette")
}

static REGISTRY: LazyLock<Vec<PaletteEntry>> = LazyLock::new(|| {
    vec![
        PaletteEntry { name: "Jet", map: jet() },
        PaletteEntry { name: "Hue", map: hue() },
        PaletteEntry { name: "Classic", map: classic() },
        PaletteEntry { name: "White to Black", map: grayscale() },
        PaletteEntry { name: "Black to White", map: inv_grayscale() },
        PaletteEntry { name: "Bio", map: biomes() },
        PaletteEntry { name: "Cold", map: cold() },
        PaletteEntry { name: "Warm", map: warm() },
        PaletteEntry { name: "Quantized", map: quantized() },
        PaletteEntry { name: "Pattern", map: pattern() },
    ]
});

/// All registered palettes, in index order.
pub fn all() -> &'static [PaletteEntry] {
    &REGISTRY
}

/// The palette at `index`, or `None` if out of range.
pub fn get(index: usize) -> Option<&'static ColorMap> {
    REGISTRY.get(index).map(|entry| &entry.map)
}

/// The display name of the palette at `index`.
pub fn name(index: usize) -> Option<&'static str> {
    REGISTRY.get(index).map(|entry| entry.name)
}

/// Number of registered palettes.
pub fn len() -> usize {
    REGISTRY.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_layout() {
        assert_eq!(len(), 10);
        assert_eq!(name(0), Some("Jet"));
        assert_eq!(name(9), Some("Pattern"));
        assert_eq!(name(10), None);
        assert!(get(10).is_none());
    }

    #[test]
    fn test_every_palette_hits_its_endpoints() {
        for entry in all() {
            let points = entry.map.points();
            assert!(points.len() >= 2, "{} has too few points", entry.name);
            let first = points[0].map(|c| c as u8);
            let last = points[points.len() - 1].map(|c| c as u8);
            assert_eq!(entry.map.lookup(0.0), first, "{} start", entry.name);
            assert_eq!(entry.map.lookup(1.0), last, "{} end", entry.name);
        }
    }

    #[test]
    fn test_jet_endpoints() {
        let jet = get(0).unwrap();
        assert_eq!(jet.lookup(0.0), [0, 0, 255]);
        assert_eq!(jet.lookup(1.0), [50, 0, 0]);
    }

    #[test]
    fn test_quantized_palette_is_quantized() {
        assert_eq!(get(8).unwrap().quantization(), Some(6));
        assert_eq!(get(9).unwrap().len(), 50);
    }
}
