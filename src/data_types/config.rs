use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

/// Fractional layout: nodes are sized as fractions of a declared grid extent
/// so the surface can stretch to whatever size the host gives it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoResizeOptions {
    pub enabled: bool,
    #[serde(default)]
    pub max_width: f64,
    #[serde(default)]
    pub max_height: f64,
}

impl AutoResizeOptions {
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            enabled: true,
            max_width,
            max_height,
        }
    }

    /// Horizontal divisor. Zero or NaN falls back to 1.
    pub fn width_divisor(&self) -> f64 {
        divisor(self.max_width)
    }

    /// Vertical divisor. Zero or NaN falls back to 1.
    pub fn height_divisor(&self) -> f64 {
        divisor(self.max_height)
    }

    /// True when either extent is unusable and the fallback kicks in.
    pub fn uses_fallback(&self) -> bool {
        is_unset(self.max_width) || is_unset(self.max_height)
    }
}

fn is_unset(v: f64) -> bool {
    v == 0.0 || v.is_nan()
}

fn divisor(v: f64) -> f64 {
    if is_unset(v) {
        1.0
    } else {
        v
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Edge length of one logical pixel in fixed layout.
    #[serde(default = "default_pixel_size")]
    pub pixel_size: u32,
    #[serde(default)]
    pub auto_resize: Option<AutoResizeOptions>,
}

fn default_pixel_size() -> u32 {
    1
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            pixel_size: default_pixel_size(),
            auto_resize: None,
        }
    }
}

impl CanvasConfig {
    pub fn fixed(pixel_size: u32) -> Self {
        Self {
            pixel_size,
            auto_resize: None,
        }
    }

    pub fn auto_resize(max_width: f64, max_height: f64) -> Self {
        Self {
            pixel_size: default_pixel_size(),
            auto_resize: Some(AutoResizeOptions::new(max_width, max_height)),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid canvas config")
    }

    /// Pixel size with 0 read as 1.
    pub fn effective_pixel_size(&self) -> u32 {
        self.pixel_size.max(1)
    }

    pub fn auto_resize_enabled(&self) -> bool {
        self.auto_resize.is_some_and(|o| o.enabled)
    }
}
