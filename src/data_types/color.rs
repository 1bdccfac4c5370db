use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A drawing color as callers supply it.
///
/// `rgb` holds 0–255 channels. A color without `rgb` erases the cell it is
/// written to instead of lighting it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub rgb: Option<Vec3>,
    /// Opacity in `[0, 1]`, 1 when unset.
    #[serde(default)]
    pub a: Option<f32>,
}

impl Color {
    pub const ERASE: Self = Self { rgb: None, a: None };
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            rgb: Some(Vec3::new(r, g, b)),
            a: None,
        }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            rgb: Some(Vec3::new(r, g, b)),
            a: Some(a),
        }
    }

    pub fn alpha(mut self, a: f32) -> Self {
        self.a = Some(a);
        self
    }

    pub fn is_erase(&self) -> bool {
        self.rgb.is_none()
    }

    /// Resolves to the stored form, or `None` for an erase.
    pub fn resolve(&self) -> Option<PixelColor> {
        self.rgb.map(|rgb| PixelColor {
            rgb,
            a: self.a.map_or(1.0, |a| if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) }),
        })
    }
}

/// Color of a lit cell. Always has RGB.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelColor {
    pub rgb: Vec3,
    pub a: f32,
}
