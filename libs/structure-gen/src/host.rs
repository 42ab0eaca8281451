//! # Host Capabilities
//!
//! What the generator needs from the scene it lives in. The host owns the
//! node hierarchy and decides how destruction is carried out; the generator
//! only chooses which [`DestroyMode`] to ask for.

use glam::DVec3;

/// Identifier of a host scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// How a node should be destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyMode {
    /// Reclaim synchronously, before the call returns
    Immediate,
    /// Mark now, reclaim at the host's next synchronization point
    Deferred,
}

impl DestroyMode {
    /// Deferred while the host is advancing its simulation, immediate
    /// otherwise.
    pub fn for_host(simulating: bool) -> Self {
        if simulating {
            DestroyMode::Deferred
        } else {
            DestroyMode::Immediate
        }
    }
}

/// Scene operations the generator consumes.
pub trait SceneHost {
    /// Creates an empty node under `parent` at a local position.
    fn create_node(&mut self, name: &str, parent: NodeId, local_position: DVec3) -> NodeId;

    /// Destroys a node and its descendants.
    fn destroy_node(&mut self, node: NodeId, mode: DestroyMode);

    /// Finds a direct child by name.
    ///
    /// Nodes already scheduled for deferred destruction are not returned.
    fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId>;

    /// Returns true while the host is advancing its own update loop.
    fn is_simulating(&self) -> bool;
}
