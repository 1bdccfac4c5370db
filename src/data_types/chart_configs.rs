use super::Color;
use eyre::{Result, WrapErr};
use glam::DVec2;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Area of the pixel grid a chart paints into, in grid units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRegion {
    pub pos: DVec2,
    pub size: DVec2,
}

impl ChartRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    pub fn center(&self) -> DVec2 {
        self.pos + self.size / 2.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub region: ChartRegion,
    /// Fixed bar width. Derived from the item count when unset or not positive.
    #[serde(default)]
    pub bar_width: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub region: ChartRegion,
    #[serde(default)]
    pub line_color: Option<Color>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub region: ChartRegion,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarItem {
    pub value: f64,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub value: f64,
    pub dot_color: Color,
    /// Dot radius. The theme default applies when unset or zero.
    #[serde(default)]
    pub dot_size: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieItem {
    pub value: f64,
    pub color: Color,
}

/// Parses a JSON array of chart items.
pub fn load_items<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).wrap_err("invalid chart items")
}
