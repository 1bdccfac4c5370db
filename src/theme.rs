//! Default colors and proportions shared by the charts.

use crate::data_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub axis_color: Color,
    /// Line chart segments when the chart sets no color of its own.
    pub line_color: Color,
    /// Line chart dot radius when an item sets none.
    pub dot_radius: f64,
    /// Bars and points peak at `1 / headroom` of the region height.
    pub headroom: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            line_color: Color::BLACK,
            dot_radius: 2.0,
            headroom: 1.2,
        }
    }
}
