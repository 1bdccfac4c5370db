use super::{Placement, SceneHost};
use glam::Vec3;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

/// Retained state of one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeRecord {
    pub color: Vec3,
    pub opacity: f32,
    pub position: Placement,
    pub size: Placement,
    pub parent: Option<SurfaceId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Created(NodeId),
    Attached(NodeId, SurfaceId),
    Detached(NodeId),
}

/// In-memory scene graph. Detached nodes are dropped immediately.
#[derive(Debug, Default)]
pub struct MemoryHost {
    nodes: HashMap<NodeId, NodeRecord>,
    next_node: u64,
    next_surface: u32,
    created: usize,
    detached: usize,
    events: Option<Vec<HostEvent>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host that also keeps an ordered log of create/attach/detach calls.
    pub fn with_event_log() -> Self {
        Self {
            events: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn create_surface(&mut self) -> SurfaceId {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    /// Nodes currently attached to `surface`, in no particular order.
    pub fn nodes_on(&self, surface: SurfaceId) -> impl Iterator<Item = (NodeId, &NodeRecord)> {
        self.nodes
            .iter()
            .filter(move |(_, n)| n.parent == Some(surface))
            .map(|(id, n)| (*id, n))
    }

    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn detached_count(&self) -> usize {
        self.detached
    }

    pub fn events(&self) -> &[HostEvent] {
        self.events.as_deref().unwrap_or_default()
    }

    fn record(&mut self, event: HostEvent) {
        if let Some(events) = self.events.as_mut() {
            events.push(event);
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeRecord> {
        self.nodes.get_mut(&id)
    }
}

impl SceneHost for MemoryHost {
    type Node = NodeId;
    type Surface = SurfaceId;

    fn create_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.created += 1;
        self.nodes.insert(
            id,
            NodeRecord {
                opacity: 1.0,
                ..Default::default()
            },
        );
        self.record(HostEvent::Created(id));
        id
    }

    fn set_color(&mut self, node: &NodeId, rgb: Vec3) {
        if let Some(n) = self.node_mut(*node) {
            n.color = rgb;
        }
    }

    fn set_opacity(&mut self, node: &NodeId, opacity: f32) {
        if let Some(n) = self.node_mut(*node) {
            n.opacity = opacity;
        }
    }

    fn set_position(&mut self, node: &NodeId, position: Placement) {
        if let Some(n) = self.node_mut(*node) {
            n.position = position;
        }
    }

    fn set_size(&mut self, node: &NodeId, size: Placement) {
        if let Some(n) = self.node_mut(*node) {
            n.size = size;
        }
    }

    fn attach(&mut self, surface: &SurfaceId, node: &NodeId) {
        if let Some(n) = self.node_mut(*node) {
            n.parent = Some(*surface);
        }
        self.record(HostEvent::Attached(*node, *surface));
    }

    fn detach(&mut self, node: NodeId) {
        if self.nodes.remove(&node).is_some() {
            self.detached += 1;
        }
        self.record(HostEvent::Detached(node));
    }
}
