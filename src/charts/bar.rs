use super::{clear_region, draw_axes, value_scale, Chart};
use crate::canvas::SharedCanvas;
use crate::data_types::{BarChartConfig, BarItem, ChartRegion};
use crate::host::SceneHost;
use crate::theme::ChartTheme;
use eyre::Result;
use glam::DVec2;
use tracing::debug;

pub struct BarChart<H: SceneHost> {
    canvas: SharedCanvas<H>,
    config: BarChartConfig,
    theme: ChartTheme,
}

impl<H: SceneHost> BarChart<H> {
    pub fn new(canvas: SharedCanvas<H>, config: BarChartConfig) -> Self {
        Self {
            canvas,
            config,
            theme: ChartTheme::default(),
        }
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Bar width for `n` bars: the configured width, or `floor(W / 1.5n)`.
    pub fn bar_width(&self, n: usize) -> f64 {
        self.config
            .bar_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or_else(|| (self.config.region.width() / (n as f64 * 1.5)).floor())
    }
}

impl<H: SceneHost> Chart<H> for BarChart<H> {
    type Item = BarItem;

    fn canvas(&self) -> &SharedCanvas<H> {
        &self.canvas
    }

    fn region(&self) -> &ChartRegion {
        &self.config.region
    }

    fn draw(&self, items: &[BarItem]) -> Result<()> {
        let region = &self.config.region;
        let values: Vec<f64> = items.iter().map(|item| item.value).collect();
        let scale = value_scale(&values, region, self.theme.headroom)?;

        let mut canvas = self.canvas.borrow_mut();
        clear_region(&mut *canvas, region);

        if let Some(scale) = scale {
            let n = items.len() as f64;
            let bar_width = self.bar_width(items.len());
            let spacing = ((region.width() - bar_width * n) / (n + 1.0)).floor();
            let bottom = region.bottom();

            for (i, item) in items.iter().enumerate() {
                let i = i as f64;
                let x = region.pos.x + spacing * (i + 1.0) + bar_width * i;
                let top = scale.map(item.value);
                canvas.draw_filled_rect(
                    DVec2::new(x, top),
                    DVec2::new(x + bar_width, bottom),
                    item.color,
                );
            }
        }

        draw_axes(&mut *canvas, region, self.theme.axis_color);
        debug!(bars = items.len(), "bar chart drawn");
        Ok(())
    }
}
