//! Keeps one host node per lit cell.
//!
//! Every color change detaches the node bound to the cell (if any) and binds a
//! fresh one. Nodes are never recolored in place.

use crate::data_types::{AutoResizeOptions, CanvasConfig, PixelColor};
use crate::host::{Placement, SceneHost};
use crate::pixel_store::PixelKey;
use glam::DVec2;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// How node placement is derived from a grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutMode {
    /// Absolute units, `pixel_size` per cell.
    Fixed { pixel_size: f64 },
    /// Fractions of the declared grid extent.
    AutoResize(AutoResizeOptions),
}

impl LayoutMode {
    pub fn from_config(config: &CanvasConfig) -> Self {
        match config.auto_resize {
            Some(options) if options.enabled => Self::AutoResize(options),
            _ => Self::Fixed {
                pixel_size: config.effective_pixel_size() as f64,
            },
        }
    }

    /// Position and size of the node for the cell at `pos`.
    pub fn placement(&self, pos: DVec2) -> (Placement, Placement) {
        match self {
            Self::Fixed { pixel_size } => (
                Placement::from_offset(pos * *pixel_size),
                Placement::from_offset(DVec2::splat(*pixel_size)),
            ),
            Self::AutoResize(options) => {
                let cell = DVec2::new(
                    1.0 / options.width_divisor(),
                    1.0 / options.height_divisor(),
                );
                (Placement::from_scale(pos * cell), Placement::from_scale(cell))
            }
        }
    }
}

pub struct NodeSynchronizer<H: SceneHost> {
    host: H,
    surface: H::Surface,
    layout: LayoutMode,
    bindings: HashMap<PixelKey, H::Node>,
}

impl<H: SceneHost> NodeSynchronizer<H> {
    pub fn new(host: H, surface: H::Surface, layout: LayoutMode) -> Self {
        if let LayoutMode::AutoResize(options) = &layout {
            warn_on_fallback(options);
        }
        Self {
            host,
            surface,
            layout,
            bindings: HashMap::new(),
        }
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Replaces the node at `key` with a fresh one showing `color`.
    pub fn bind(&mut self, key: PixelKey, color: PixelColor) {
        if let Some(old) = self.bindings.remove(&key) {
            self.host.detach(old);
        }

        let node = self.host.create_node();
        self.host.set_color(&node, color.rgb);
        self.host.set_opacity(&node, color.a);
        let (position, size) = self.layout.placement(key.pos());
        self.host.set_position(&node, position);
        self.host.set_size(&node, size);
        self.host.attach(&self.surface, &node);
        trace!(pos = ?key.pos(), "bound pixel node");

        self.bindings.insert(key, node);
    }

    /// Detaches the node at `key`, if there is one.
    pub fn unbind(&mut self, key: PixelKey) {
        if let Some(node) = self.bindings.remove(&key) {
            self.host.detach(node);
            trace!(pos = ?key.pos(), "unbound pixel node");
        }
    }

    /// Updates the auto-resize extent. Ignored in fixed layout.
    pub fn set_max_extent(&mut self, max_width: f64, max_height: f64) {
        if let LayoutMode::AutoResize(options) = &mut self.layout {
            options.max_width = max_width;
            options.max_height = max_height;
            warn_on_fallback(options);
        }
    }

    /// Re-places every bound node from the current extent.
    pub fn auto_resize(&mut self) {
        if !matches!(self.layout, LayoutMode::AutoResize(_)) {
            return;
        }
        for (key, node) in &self.bindings {
            let (position, size) = self.layout.placement(key.pos());
            self.host.set_position(node, position);
            self.host.set_size(node, size);
        }
        debug!(nodes = self.bindings.len(), "auto-resized pixel nodes");
    }

    pub fn node(&self, key: PixelKey) -> Option<&H::Node> {
        self.bindings.get(&key)
    }

    pub fn is_bound(&self, key: PixelKey) -> bool {
        self.bindings.contains_key(&key)
    }

    pub fn bound_keys(&self) -> impl Iterator<Item = PixelKey> + '_ {
        self.bindings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn surface(&self) -> &H::Surface {
        &self.surface
    }
}

fn warn_on_fallback(options: &AutoResizeOptions) {
    if options.uses_fallback() {
        warn!(
            max_width = options.max_width,
            max_height = options.max_height,
            "auto-resize extent unset, using divisor 1"
        );
    }
}
