use super::{clear_region, draw_axes, value_scale, Chart};
use crate::canvas::SharedCanvas;
use crate::data_types::{ChartRegion, LineChartConfig, LineItem};
use crate::host::SceneHost;
use crate::rasterizer::ArcSpan;
use crate::theme::ChartTheme;
use eyre::Result;
use glam::DVec2;
use tracing::debug;

pub struct LineChart<H: SceneHost> {
    canvas: SharedCanvas<H>,
    config: LineChartConfig,
    theme: ChartTheme,
}

impl<H: SceneHost> LineChart<H> {
    pub fn new(canvas: SharedCanvas<H>, config: LineChartConfig) -> Self {
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
}

impl<H: SceneHost> Chart<H> for LineChart<H> {
    type Item = LineItem;

    fn canvas(&self) -> &SharedCanvas<H> {
        &self.canvas
    }

    fn region(&self) -> &ChartRegion {
        &self.config.region
    }

    fn draw(&self, items: &[LineItem]) -> Result<()> {
        let region = &self.config.region;
        let values: Vec<f64> = items.iter().map(|item| item.value).collect();
        let scale = value_scale(&values, region, self.theme.headroom)?;

        let mut canvas = self.canvas.borrow_mut();
        clear_region(&mut *canvas, region);

        if let Some(scale) = scale {
            let spacing = (region.width() / (items.len() as f64 + 1.0)).floor();
            let points: Vec<DVec2> = items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    DVec2::new(
                        region.pos.x + spacing * (i as f64 + 1.0),
                        scale.map(item.value),
                    )
                })
                .collect();

            let line_color = self.config.line_color.unwrap_or(self.theme.line_color);
            for pair in points.windows(2) {
                canvas.draw_line(pair[0], pair[1], line_color);
            }

            for (point, item) in points.iter().zip(items) {
                let radius = item
                    .dot_size
                    .filter(|r| *r != 0.0 && !r.is_nan())
                    .unwrap_or(self.theme.dot_radius);
                canvas.draw_filled_circle(*point, radius, item.dot_color, ArcSpan::FULL);
            }
        }

        draw_axes(&mut *canvas, region, self.theme.axis_color);
        debug!(points = items.len(), "line chart drawn");
        Ok(())
    }
}
