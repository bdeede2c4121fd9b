//! Tree builder folding parsed associations into a validated [`Tree`].

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::arena::Tree;
use crate::domain::entities::Association;
use crate::domain::error::{DomainError, TreeResult};

/// Constructs a [`Tree`] from associations.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: Tree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds all associations, deduplicates child lists and validates.
    ///
    /// Only direct self-parenting is rejected here. Longer cycles are left to
    /// the renderer.
    #[instrument(level = "debug", skip_all, fields(associations = associations.len()))]
    pub fn build(mut self, associations: &[Association]) -> TreeResult<Tree> {
        for association in associations {
            self.fold(association);
        }
        self.dedup_children();
        self.validate()?;
        debug!("built tree with {} nodes", self.tree.len());
        Ok(self.tree)
    }

    fn fold(&mut self, association: &Association) {
        let parent_idx = self.tree.ensure_node(&association.parent);
        if let Some(parent) = self.tree.get_node_mut(parent_idx) {
            parent.children.extend(association.children.iter().cloned());
        }
        for child in &association.children {
            self.tree.ensure_node(child);
        }
    }

    fn dedup_children(&mut self) {
        for node in self.tree.nodes_mut() {
            node.children = std::mem::take(&mut node.children)
                .into_iter()
                .unique()
                .collect();
        }
    }

    fn validate(&self) -> TreeResult<()> {
        match self.tree.nodes().find(|n| n.has_child(&n.id)) {
            Some(node) => Err(DomainError::SelfParent(node.id.clone())),
            None => Ok(()),
        }
    }
}
