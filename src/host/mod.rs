//! Boundary to the retained-mode scene graph the canvas renders into.
//!
//! The canvas never draws by itself: every lit pixel becomes one node owned by
//! a [`SceneHost`]. Any retained surface (a UI tree, an SVG DOM, a terminal
//! grid) can back a canvas by implementing this trait.

pub mod memory;

pub use memory::{HostEvent, MemoryHost, NodeId, NodeRecord, SurfaceId};

use glam::{DVec2, Vec3};
use serde::{Deserialize, Serialize};

/// Two-part position or size, as retained UI trees usually express them:
/// `scale` is a fraction of the parent surface, `offset` is in absolute units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub scale: DVec2,
    pub offset: DVec2,
}

impl Placement {
    pub fn from_offset(offset: DVec2) -> Self {
        Self {
            scale: DVec2::ZERO,
            offset,
        }
    }

    pub fn from_scale(scale: DVec2) -> Self {
        Self {
            scale,
            offset: DVec2::ZERO,
        }
    }
}

/// Node capability required from the host scene graph.
pub trait SceneHost {
    /// Handle to one visual node.
    type Node;
    /// Handle to the parent surface nodes are attached to.
    type Surface;

    fn create_node(&mut self) -> Self::Node;

    /// Background color, 0–255 channels.
    fn set_color(&mut self, node: &Self::Node, rgb: Vec3);

    fn set_opacity(&mut self, node: &Self::Node, opacity: f32);

    fn set_position(&mut self, node: &Self::Node, position: Placement);

    fn set_size(&mut self, node: &Self::Node, size: Placement);

    fn attach(&mut self, surface: &Self::Surface, node: &Self::Node);

    /// Detaches the node from its parent. Reclaiming it is up to the host.
    fn detach(&mut self, node: Self::Node);
}
