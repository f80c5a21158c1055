// SPDX-FileCopyrightText: The seq-prefixtree authors
// SPDX-License-Identifier: MPL-2.0

/// Index of a node in the arena of a [`PrefixTree`](crate::PrefixTree).
///
/// Identifiers stay valid while the tree grows, because nodes are never
/// moved or removed. They are only meaningful for the tree that issued
/// them and must not be stored permanently!
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct NodeId(usize);

impl NodeId {
    /// The synthetic root node that exists in every tree.
    pub const ROOT: Self = Self(0);

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }

    /// Check if this is the id of the root node.
    ///
    /// ```
    /// # use seq_prefixtree::{NodeId, PrefixTree};
    /// let tree = PrefixTree::<String>::new();
    /// assert!(tree.root_node_id().is_root());
    /// assert_eq!(NodeId::ROOT, tree.root_node_id());
    /// ```
    #[must_use]
    pub const fn is_root(self) -> bool {
        self.0 == Self::ROOT.0
    }
}
