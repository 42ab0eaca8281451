//! # In-Memory Scene
//!
//! A minimal [`SceneHost`] for headless tools and tests: a node tree with
//! names and local positions, a simulation flag, and a queue of deferred
//! destructions reclaimed by [`SceneGraph::flush_deferred`].

use crate::host::{DestroyMode, NodeId, SceneHost};
use glam::DVec3;
use log::warn;
use std::collections::HashMap;

/// A node in a [`SceneGraph`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub local_position: DVec3,
    pub children: Vec<NodeId>,
    /// Scheduled for reclamation at the next flush
    pub pending_destroy: bool,
}

/// Node tree implementing [`SceneHost`].
///
/// # Example
///
/// ```rust
/// use structure_gen::{DestroyMode, SceneGraph, SceneHost};
/// use glam::DVec3;
///
/// let mut scene = SceneGraph::new();
/// let house = scene.create_node("House", scene.root(), DVec3::ZERO);
/// assert_eq!(scene.find_child(scene.root(), "House"), Some(house));
///
/// scene.destroy_node(house, DestroyMode::Immediate);
/// assert!(!scene.contains(house));
/// ```
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: HashMap<NodeId, SceneNode>,
    root: NodeId,
    next_id: u64,
    simulating: bool,
    deferred: Vec<NodeId>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Creates a scene holding only its root node.
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            SceneNode {
                name: "Scene".to_string(),
                parent: None,
                local_position: DVec3::ZERO,
                children: Vec::new(),
                pending_destroy: false,
            },
        );
        Self {
            nodes,
            root,
            next_id: 1,
            simulating: false,
            deferred: Vec::new(),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns a node, including one pending destruction.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Returns true if the node has not been reclaimed.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if only the root remains.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns the children of a node in creation order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Sets whether the scene is advancing its update loop.
    pub fn set_simulating(&mut self, simulating: bool) {
        self.simulating = simulating;
    }

    /// Returns the number of nodes waiting for a flush.
    pub fn pending_count(&self) -> usize {
        self.nodes.values().filter(|node| node.pending_destroy).count()
    }

    /// Reclaims every node scheduled by a deferred destroy.
    ///
    /// Returns the number of nodes removed.
    pub fn flush_deferred(&mut self) -> usize {
        let before = self.nodes.len();
        for id in std::mem::take(&mut self.deferred) {
            self.remove_subtree(id);
        }
        before - self.nodes.len()
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| *child != id);
        }
        for child in node.children {
            self.remove_subtree(child);
        }
    }

    fn mark_subtree(&mut self, id: NodeId) {
        let children = match self.nodes.get_mut(&id) {
            Some(node) => {
                node.pending_destroy = true;
                node.children.clone()
            }
            None => return,
        };
        for child in children {
            self.mark_subtree(child);
        }
    }
}

impl SceneHost for SceneGraph {
    fn create_node(&mut self, name: &str, parent: NodeId, local_position: DVec3) -> NodeId {
        let parent = if self.nodes.contains_key(&parent) {
            parent
        } else {
            warn!("Parent {parent:?} does not exist, attaching `{name}` to the scene root");
            self.root
        };

        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            SceneNode {
                name: name.to_string(),
                parent: Some(parent),
                local_position,
                children: Vec::new(),
                pending_destroy: false,
            },
        );
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.push(id);
        }
        id
    }

    fn destroy_node(&mut self, node: NodeId, mode: DestroyMode) {
        if node == self.root {
            warn!("Refusing to destroy the scene root");
            return;
        }
        match mode {
            DestroyMode::Immediate => self.remove_subtree(node),
            DestroyMode::Deferred => {
                self.mark_subtree(node);
                self.deferred.push(node);
            }
        }
    }

    fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent).iter().copied().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|node| node.name == name && !node.pending_destroy)
        })
    }

    fn is_simulating(&self) -> bool {
        self.simulating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_has_root_only() {
        let scene = SceneGraph::new();
        assert!(scene.is_empty());
        assert_eq!(scene.len(), 1);
        assert!(scene.children(scene.root()).is_empty());
    }

    #[test]
    fn test_create_and_find() {
        let mut scene = SceneGraph::new();
        let a = scene.create_node("A", scene.root(), DVec3::X);
        let b = scene.create_node("B", a, DVec3::Y);
        assert_eq!(scene.find_child(scene.root(), "A"), Some(a));
        assert_eq!(scene.find_child(a, "B"), Some(b));
        assert_eq!(scene.find_child(scene.root(), "B"), None);
        assert_eq!(scene.node(b).unwrap().local_position, DVec3::Y);
    }

    #[test]
    fn test_immediate_destroy_removes_subtree() {
        let mut scene = SceneGraph::new();
        let a = scene.create_node("A", scene.root(), DVec3::ZERO);
        let b = scene.create_node("B", a, DVec3::ZERO);
        scene.destroy_node(a, DestroyMode::Immediate);
        assert!(!scene.contains(a));
        assert!(!scene.contains(b));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_deferred_destroy_waits_for_flush() {
        let mut scene = SceneGraph::new();
        let a = scene.create_node("A", scene.root(), DVec3::ZERO);
        scene.create_node("B", a, DVec3::ZERO);
        scene.destroy_node(a, DestroyMode::Deferred);

        assert!(scene.contains(a));
        assert_eq!(scene.pending_count(), 2);
        assert_eq!(scene.find_child(scene.root(), "A"), None);

        assert_eq!(scene.flush_deferred(), 2);
        assert!(scene.is_empty());
        assert_eq!(scene.flush_deferred(), 0);
    }

    #[test]
    fn test_root_cannot_be_destroyed() {
        let mut scene = SceneGraph::new();
        scene.destroy_node(scene.root(), DestroyMode::Immediate);
        assert!(scene.contains(scene.root()));
    }

    #[test]
    fn test_missing_parent_attaches_to_root() {
        let mut scene = SceneGraph::new();
        let orphan = scene.create_node("Orphan", NodeId(99), DVec3::ZERO);
        assert_eq!(scene.node(orphan).unwrap().parent, Some(scene.root()));
    }
}
