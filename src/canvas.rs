//! Canvas Model
//!
//! `Canvas` owns the pixel store and the node synchronizer. Every drawing
//! operation ends in [`Canvas::set_pixel`], which updates the store and the
//! host node of that cell in the same call, so the set of lit cells and the
//! set of attached nodes never differ between calls.

use crate::data_types::{CanvasConfig, Color, PixelColor};
use crate::host::SceneHost;
use crate::pixel_store::{PixelKey, PixelStore};
use crate::rasterizer::{self, ArcSpan, PixelSink};
use crate::sync::{LayoutMode, NodeSynchronizer};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Canvas shared between charts.
pub type SharedCanvas<H> = Rc<RefCell<Canvas<H>>>;

pub struct Canvas<H: SceneHost> {
    config: CanvasConfig,
    store: PixelStore,
    sync: NodeSynchronizer<H>,
}

impl<H: SceneHost> Canvas<H> {
    /// Canvas rendering onto `surface`. The layout mode is fixed here.
    pub fn new(host: H, surface: H::Surface, config: CanvasConfig) -> Self {
        let layout = LayoutMode::from_config(&config);
        debug!(?layout, "canvas created");
        Self {
            config,
            store: PixelStore::new(),
            sync: NodeSynchronizer::new(host, surface, layout),
        }
    }

    pub fn into_shared(self) -> SharedCanvas<H> {
        Rc::new(RefCell::new(self))
    }

    /// Lights or erases one cell. `pos` is used as given, without rounding.
    pub fn set_pixel(&mut self, pos: DVec2, color: Color) {
        let Some(key) = PixelKey::from_pos(pos) else {
            warn!(?pos, "ignoring pixel at non-finite position");
            return;
        };
        match color.resolve() {
            Some(pixel) => {
                self.store.insert(key, pixel);
                self.sync.bind(key, pixel);
            }
            None => {
                self.store.remove(key);
                self.sync.unbind(key);
            }
        }
    }

    pub fn draw_line(&mut self, start: DVec2, end: DVec2, color: Color) {
        rasterizer::line(self, start, end, color);
    }

    pub fn draw_outlined_rect(&mut self, start: DVec2, end: DVec2, color: Color) {
        rasterizer::outlined_rect(self, start, end, color);
    }

    pub fn draw_filled_rect(&mut self, start: DVec2, end: DVec2, color: Color) {
        rasterizer::filled_rect(self, start, end, color);
    }

    pub fn draw_outlined_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Color,
        span: ArcSpan,
        thickness: u32,
    ) {
        rasterizer::outlined_circle(self, center, radius, color, span, thickness);
    }

    pub fn draw_filled_circle(&mut self, center: DVec2, radius: f64, color: Color, span: ArcSpan) {
        rasterizer::filled_circle(self, center, radius, color, span);
    }

    /// Re-places every node from the current auto-resize extent. No-op in
    /// fixed layout. Pixel contents are untouched.
    pub fn auto_resize(&mut self) {
        self.sync.auto_resize();
    }

    /// Changes the auto-resize extent. Call [`Canvas::auto_resize`] afterwards
    /// to move existing nodes; new nodes use the new extent right away.
    pub fn set_max_extent(&mut self, max_width: f64, max_height: f64) {
        if let Some(options) = self.config.auto_resize.as_mut() {
            options.max_width = max_width;
            options.max_height = max_height;
        }
        self.sync.set_max_extent(max_width, max_height);
    }

    pub fn pixel(&self, pos: DVec2) -> Option<PixelColor> {
        PixelKey::from_pos(pos).and_then(|key| self.store.get(key))
    }

    pub fn pixels(&self) -> impl Iterator<Item = (DVec2, PixelColor)> + '_ {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn node_at(&self, pos: DVec2) -> Option<&H::Node> {
        PixelKey::from_pos(pos).and_then(|key| self.sync.node(key))
    }

    /// Cells that currently have a host node.
    pub fn bound_positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.sync.bound_keys().map(PixelKey::pos)
    }

    /// True when stored cells and bound nodes are exactly the same set.
    pub fn is_synchronized(&self) -> bool {
        self.store.len() == self.sync.len() && self.store.keys().all(|k| self.sync.is_bound(k))
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn layout(&self) -> LayoutMode {
        self.sync.layout()
    }

    pub fn host(&self) -> &H {
        self.sync.host()
    }

    pub fn surface(&self) -> &H::Surface {
        self.sync.surface()
    }
}

impl<H: SceneHost> PixelSink for Canvas<H> {
    fn set_pixel(&mut self, pos: DVec2, color: Color) {
        Canvas::set_pixel(self, pos, color);
    }
}
