use std::collections::{HashMap, HashSet};

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::Node;

/// Arena-backed mapping from identifier to [`Node`].
///
/// Nodes are never removed, so arena iteration yields them in creation order.
/// Root selection relies on that order.
#[derive(Debug)]
pub struct Tree {
    /// Arena storage for all nodes
    arena: Arena<Node>,
    /// Identifier lookup into the arena
    index: HashMap<String, Index>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).and_then(|&idx| self.arena.get(idx))
    }

    /// Child identifiers of `id`, empty if the node does not exist.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Returns the index of `id`, inserting an empty node if it is new.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn ensure_node(&mut self, id: &str) -> Index {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.arena.insert(Node::new(id));
        self.index.insert(id.to_string(), idx);
        idx
    }

    pub(crate) fn get_node_mut(&mut self, idx: Index) -> Option<&mut Node> {
        self.arena.get_mut(idx)
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.arena.iter_mut().map(|(_, node)| node)
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.arena.iter().map(|(_, node)| node)
    }

    /// Every identifier that appears in some node's child list.
    pub fn referenced(&self) -> HashSet<&str> {
        self.nodes()
            .flat_map(|n| n.children.iter().map(String::as_str))
            .collect()
    }

    /// Nodes that are nobody's child, in creation order.
    #[instrument(level = "debug", skip(self))]
    pub fn roots(&self) -> Vec<&Node> {
        let referenced = self.referenced();
        self.nodes()
            .filter(|n| !referenced.contains(n.id.as_str()))
            .collect()
    }

    /// Identifiers of nodes without children, in creation order.
    pub fn leaf_nodes(&self) -> Vec<&str> {
        self.nodes()
            .filter(|n| n.is_leaf())
            .map(|n| n.id.as_str())
            .collect()
    }
}
