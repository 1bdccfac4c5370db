//! Shape rasterizers.
//!
//! Each algorithm breaks a shape into single-cell writes against a
//! [`PixelSink`] and keeps no state between calls.

pub mod circle;
pub mod line;
pub mod rect;

pub use circle::{filled_circle, outlined_circle, AngularWindow, FILL_ANGLE_STEP};
pub use line::line;
pub use rect::{filled_rect, outlined_rect};

use crate::data_types::Color;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Destination of rasterized cells.
pub trait PixelSink {
    fn set_pixel(&mut self, pos: DVec2, color: Color);
}

/// Records every write in order.
impl PixelSink for Vec<(DVec2, Color)> {
    fn set_pixel(&mut self, pos: DVec2, color: Color) {
        self.push((pos, color));
    }
}

/// Angular extent of a circle draw, in degrees. 0° points along +x and angles
/// grow toward +y.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcSpan {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcSpan {
    pub const FULL: Self = Self {
        start_angle: 0.0,
        end_angle: 360.0,
    };

    pub fn new(start_angle: f64, end_angle: f64) -> Self {
        Self {
            start_angle,
            end_angle,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.start_angle.is_finite() && self.end_angle.is_finite()
    }
}

impl Default for ArcSpan {
    fn default() -> Self {
        Self::FULL
    }
}
