//! Domain entities: core data structures

use std::fmt;

/// One parsed `(parent, children)` pair.
///
/// Produced once per adjacent pair of levels within a chain. The parent is the
/// literal trimmed level text, the children are the next level split on `,`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub parent: String,
    pub children: Vec<String>,
}

impl Association {
    pub fn new(parent: impl Into<String>, children: Vec<String>) -> Self {
        Self {
            parent: parent.into(),
            children,
        }
    }
}

/// A vertex of the tree, identified by its label.
///
/// Children are referenced by identifier; the owning [`Tree`](super::Tree)
/// holds every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Trimmed label, may be empty for degenerate input
    pub id: String,
    /// Child identifiers in first-insertion order
    pub children: Vec<String>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn has_child(&self, id: &str) -> bool {
        self.children.iter().any(|c| c == id)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.children.join(", "))
    }
}

/// A depth-tagged label from the pre-order linearization; the root is at depth 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub depth: usize,
    pub label: String,
}

impl DisplayLine {
    pub fn new(depth: usize, label: impl Into<String>) -> Self {
        Self {
            depth,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_node_with_children_when_displayed_then_lists_children() {
        let node = Node {
            id: "A".to_string(),
            children: vec!["B".to_string(), "C".to_string()],
        };
        assert_eq!(node.to_string(), "A: B, C");
        assert!(node.has_child("C"));
        assert!(!node.is_leaf());
    }

    #[test]
    fn given_leaf_when_displayed_then_has_empty_child_list() {
        assert_eq!(Node::new("B").to_string(), "B: ");
        assert!(Node::new("B").is_leaf());
    }
}
