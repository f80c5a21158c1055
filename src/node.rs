// SPDX-FileCopyrightText: The seq-prefixtree authors
// SPDX-License-Identifier: MPL-2.0

use crate::NodeId;

/// A single position in the tree.
///
/// Holds one value, the id of its parent and the ids of its children
/// in insertion order. Nodes only ever gain children, their value and
/// parent never change.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    id: NodeId,

    /// Link to the parent node.
    ///
    /// Must be `None` for the root node and `Some` for all other nodes.
    parent: Option<NodeId>,

    /// Must be `None` for the root node and `Some` for all other nodes.
    value: Option<T>,

    children: Vec<NodeId>,

    /// Set if an appended sequence ended at this node.
    terminal: bool,
}

impl<T> TreeNode<T> {
    pub(crate) const fn new_root() -> Self {
        Self {
            id: NodeId::ROOT,
            parent: None,
            value: None,
            children: Vec::new(),
            terminal: false,
        }
    }

    pub(crate) fn new_child(id: NodeId, parent: NodeId, value: T) -> Self {
        debug_assert!(!id.is_root());
        Self {
            id,
            parent: Some(parent),
            value: Some(value),
            children: Vec::new(),
            terminal: false,
        }
    }

    pub(crate) fn push_child(&mut self, child_id: NodeId) {
        debug_assert!(!self.children.contains(&child_id));
        self.children.push(child_id);
    }

    pub(crate) fn mark_terminal(&mut self) {
        self.terminal = true;
    }

    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The value of this node.
    ///
    /// Only the synthetic root node has no value.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ids of the direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if this node has no children.
    ///
    /// This is what [`PrefixTree::find()`](crate::PrefixTree::find) considers
    /// a complete match when partial matches are not allowed.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if an appended sequence ended exactly at this node.
    ///
    /// Unlike [`Self::is_leaf()`] this does not change when longer sequences
    /// sharing the same prefix are appended later.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }
}
