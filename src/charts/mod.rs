//! Bar, line and pie charts painted onto a shared [`Canvas`].
//!
//! Charts keep no pixel state. Every `draw` clears the chart's region and
//! repaints it from the given items.

pub mod bar;
pub mod line;
pub mod pie;

pub use bar::BarChart;
pub use line::LineChart;
pub use pie::PieChart;

use crate::canvas::{Canvas, SharedCanvas};
use crate::data_types::{ChartRegion, Color};
use crate::host::SceneHost;
use crate::rasterizer::rect::steps_below;
use crate::scales::LinearScale;
use eyre::{ensure, Result};
use glam::DVec2;
use tracing::warn;

pub trait Chart<H: SceneHost> {
    type Item;

    fn canvas(&self) -> &SharedCanvas<H>;

    fn region(&self) -> &ChartRegion;

    /// Repaints the region from `items`. On error the canvas is untouched.
    fn draw(&self, items: &[Self::Item]) -> Result<()>;

    /// Erases every cell of the region.
    fn clear(&self) {
        clear_region(&mut *self.canvas().borrow_mut(), self.region());
    }
}

/// Erases `width × height` cells starting at the region origin.
pub(crate) fn clear_region<H: SceneHost>(canvas: &mut Canvas<H>, region: &ChartRegion) {
    if !region.pos.is_finite() || !region.size.is_finite() {
        warn!(?region, "skipping clear of non-finite region");
        return;
    }
    for x in steps_below(region.pos.x, region.right()) {
        for y in steps_below(region.pos.y, region.bottom()) {
            canvas.set_pixel(DVec2::new(x, y), Color::ERASE);
        }
    }
}

/// Left and bottom axis lines.
pub(crate) fn draw_axes<H: SceneHost>(canvas: &mut Canvas<H>, region: &ChartRegion, color: Color) {
    let origin = DVec2::new(region.pos.x, region.bottom());
    canvas.draw_line(region.pos, origin, color);
    canvas.draw_line(origin, DVec2::new(region.right(), region.bottom()), color);
}

pub(crate) fn ensure_finite(values: impl IntoIterator<Item = f64>) -> Result<()> {
    for (i, value) in values.into_iter().enumerate() {
        ensure!(value.is_finite(), "item {i} has non-finite value {value}");
    }
    Ok(())
}

/// Value axis shared by bar and line charts: `0..=headroom × max` onto the
/// region's bottom..top. `None` when there are no values.
pub(crate) fn value_scale(
    values: &[f64],
    region: &ChartRegion,
    headroom: f64,
) -> Result<Option<LinearScale>> {
    ensure_finite(values.iter().copied())?;
    let Some(max) = values.iter().copied().reduce(f64::max) else {
        return Ok(None);
    };
    let denom = max * headroom;
    ensure!(
        denom.is_finite() && denom > 0.0,
        "cannot normalize values against {denom} (max {max})"
    );
    Ok(Some(LinearScale::value_axis(denom, region.bottom(), region.pos.y)))
}
