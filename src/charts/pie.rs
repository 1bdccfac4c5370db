use super::{clear_region, ensure_finite, Chart};
use crate::canvas::SharedCanvas;
use crate::data_types::{ChartRegion, PieChartConfig, PieItem};
use crate::host::SceneHost;
use crate::rasterizer::ArcSpan;
use eyre::{ensure, Result};
use tracing::debug;

pub struct PieChart<H: SceneHost> {
    canvas: SharedCanvas<H>,
    config: PieChartConfig,
}

impl<H: SceneHost> PieChart<H> {
    pub fn new(canvas: SharedCanvas<H>, config: PieChartConfig) -> Self {
        Self { canvas, config }
    }

    /// Angular span of every item, in input order. Slices are contiguous and
    /// start at 0°.
    pub fn slices(items: &[PieItem]) -> Result<Vec<ArcSpan>> {
        ensure_finite(items.iter().map(|item| item.value))?;
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let total: f64 = items.iter().map(|item| item.value).sum();
        ensure!(
            total.is_finite() && total != 0.0,
            "pie values sum to {total}"
        );

        let mut start = 0.0;
        Ok(items
            .iter()
            .map(|item| {
                let end = start + item.value / total * 360.0;
                let span = ArcSpan::new(start, end);
                start = end;
                span
            })
            .collect())
    }
}

impl<H: SceneHost> Chart<H> for PieChart<H> {
    type Item = PieItem;

    fn canvas(&self) -> &SharedCanvas<H> {
        &self.canvas
    }

    fn region(&self) -> &ChartRegion {
        &self.config.region
    }

    fn draw(&self, items: &[PieItem]) -> Result<()> {
        let region = &self.config.region;
        let slices = Self::slices(items)?;

        let mut canvas = self.canvas.borrow_mut();
        clear_region(&mut *canvas, region);

        let center = region.center();
        let radius = region.width().min(region.height()) / 2.0;
        for (span, item) in slices.into_iter().zip(items) {
            canvas.draw_filled_circle(center, radius, item.color, span);
        }

        debug!(slices = items.len(), "pie chart drawn");
        Ok(())
    }
}
