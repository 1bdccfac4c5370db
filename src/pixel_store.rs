//! Sparse coordinate → color map. The logical truth of which cells are lit.

use crate::data_types::PixelColor;
use glam::DVec2;
use std::collections::HashMap;

/// A grid coordinate packed into one integer: the bit patterns of `x` and
/// `y`, high and low half. Coordinates are used verbatim, so `(2.5, 1.0)` and
/// `(2.0, 1.0)` are different cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelKey(u128);

impl PixelKey {
    /// `None` for non-finite coordinates. `-0.0` packs like `0.0`.
    pub fn from_pos(pos: DVec2) -> Option<Self> {
        if !pos.is_finite() {
            return None;
        }
        // Adding +0.0 turns -0.0 into +0.0 and leaves everything else alone.
        let x = (pos.x + 0.0).to_bits() as u128;
        let y = (pos.y + 0.0).to_bits() as u128;
        Some(Self(x << 64 | y))
    }

    pub fn pos(self) -> DVec2 {
        DVec2::new(
            f64::from_bits((self.0 >> 64) as u64),
            f64::from_bits(self.0 as u64),
        )
    }
}

#[derive(Debug, Default)]
pub struct PixelStore {
    pixels: HashMap<PixelKey, PixelColor>,
}

impl PixelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: PixelKey) -> Option<PixelColor> {
        self.pixels.get(&key).copied()
    }

    pub fn insert(&mut self, key: PixelKey, color: PixelColor) {
        self.pixels.insert(key, color);
    }

    pub fn remove(&mut self, key: PixelKey) -> Option<PixelColor> {
        self.pixels.remove(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = PixelKey> + '_ {
        self.pixels.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DVec2, PixelColor)> + '_ {
        self.pixels.iter().map(|(k, c)| (k.pos(), *c))
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
