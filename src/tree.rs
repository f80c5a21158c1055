// SPDX-FileCopyrightText: The seq-prefixtree authors
// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

use crate::{NodeId, Outline, TreeNode, Vector};

/// The given node id has not been issued by this tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown node {0}")]
pub struct UnknownNodeError(pub NodeId);

/// Prefix tree over sequences of values.
///
/// Sequences that share a common prefix share the nodes of this prefix.
/// Children are kept in insertion order and compared by equality only.
///
/// All nodes are stored in a single arena and reference each other by
/// [`NodeId`]. With the `im` feature enabled the arena is a persistent
/// vector and cloning the tree is cheap.
///
/// Could be shared safely between multiple threads for reading. Mutation
/// requires exclusive access.
///
/// ```
/// # use seq_prefixtree::PrefixTree;
/// let mut tree = PrefixTree::<String>::new();
/// tree.append("usr/local/bin".split('/'));
/// tree.append("usr/lib".split('/'));
///
/// assert!(tree.find(["usr", "lib"], false).is_some());
/// // "usr/local" is only a prefix of "usr/local/bin"
/// assert!(tree.find(["usr", "local"], false).is_none());
/// assert!(tree.find(["usr", "local"], true).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTree<T>
where
    T: Clone,
{
    nodes: Vector<TreeNode<T>>,
}

impl<T> Default for PrefixTree<T>
where
    T: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PrefixTree<T>
where
    T: Clone,
{
    /// Create an empty tree that only contains the root node.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Vector::new();
        nodes.push_back(TreeNode::new_root());
        Self { nodes }
    }

    #[must_use]
    pub const fn root_node_id(&self) -> NodeId {
        NodeId::ROOT
    }

    #[must_use]
    pub fn root_node(&self) -> &TreeNode<T> {
        self.resolve_node(NodeId::ROOT)
    }

    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    #[must_use]
    pub fn lookup_node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id.index())
    }

    /// Resolve an existing node by its id.
    ///
    /// Only used internally for node ids that must exist. If the node does not exist
    /// the tree is probably in an inconsistent state!
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist.
    #[must_use]
    pub(crate) fn resolve_node(&self, id: NodeId) -> &TreeNode<T> {
        self.lookup_node(id).expect("node exists")
    }

    fn resolve_node_mut(&mut self, id: NodeId) -> &mut TreeNode<T> {
        self.nodes.get_mut(id.index()).expect("node exists")
    }

    /// Total number of nodes in the tree, including the root node.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let node_count = self.nodes.len();
        debug_assert!(node_count > 0);
        node_count
    }

    /// Check if nothing but the root node exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root_node().is_leaf()
    }

    fn find_child<Q>(&self, parent_id: NodeId, value: &Q) -> Option<&TreeNode<T>>
    where
        Q: PartialEq<T>,
    {
        // Linear scan in insertion order
        self.resolve_node(parent_id)
            .children()
            .iter()
            .map(|&child_id| self.resolve_node(child_id))
            .find(|child| child.value().is_some_and(|child_value| value == child_value))
    }

    fn push_child_node(&mut self, parent_id: NodeId, value: T) -> NodeId {
        let child_id = NodeId::from_index(self.nodes.len());
        log::debug!("Adding new child node {child_id} to parent node {parent_id}");
        self.nodes.push_back(TreeNode::new_child(child_id, parent_id, value));
        self.resolve_node_mut(parent_id).push_child(child_id);
        child_id
    }

    /// Add a new child node with the given value.
    ///
    /// The child is always added, even if a sibling with an equal value exists.
    /// Use [`Self::append_at()`] for merging.
    ///
    /// Returns the id of the new child node.
    pub fn add_child(
        &mut self,
        parent_id: NodeId,
        value: impl Into<T>,
    ) -> Result<NodeId, UnknownNodeError> {
        if !self.contains_node(parent_id) {
            return Err(UnknownNodeError(parent_id));
        }
        Ok(self.push_child_node(parent_id, value.into()))
    }

    fn append_from<I>(&mut self, start_id: NodeId, sequence: I) -> NodeId
    where
        I: IntoIterator,
        I::Item: Into<T>,
        T: PartialEq,
    {
        debug_assert!(self.contains_node(start_id));
        let mut node_id = start_id;
        for value in sequence {
            let value = value.into();
            let child_id = self.find_child(node_id, &value).map(TreeNode::id);
            node_id = match child_id {
                Some(child_id) => child_id,
                None => self.push_child_node(node_id, value),
            };
        }
        if !self.resolve_node(node_id).is_terminal() {
            self.resolve_node_mut(node_id).mark_terminal();
        }
        node_id
    }

    /// Append a sequence of values.
    ///
    /// Walks down from the root and reuses existing nodes for the longest
    /// matching prefix. A new node is created for every remaining value.
    /// Appending an empty sequence never creates any nodes.
    ///
    /// Returns the id of the node at which the sequence ended.
    pub fn append<I>(&mut self, sequence: I) -> NodeId
    where
        I: IntoIterator,
        I::Item: Into<T>,
        T: PartialEq,
    {
        self.append_from(NodeId::ROOT, sequence)
    }

    /// Append a sequence of values below an existing node.
    ///
    /// Same as [`Self::append()`], but starts the walk at the given node
    /// instead of the root node.
    pub fn append_at<I>(
        &mut self,
        start_id: NodeId,
        sequence: I,
    ) -> Result<NodeId, UnknownNodeError>
    where
        I: IntoIterator,
        I::Item: Into<T>,
        T: PartialEq,
    {
        if !self.contains_node(start_id) {
            return Err(UnknownNodeError(start_id));
        }
        Ok(self.append_from(start_id, sequence))
    }

    fn walk<I>(&self, sequence: I) -> Option<&TreeNode<T>>
    where
        I: IntoIterator,
        I::Item: PartialEq<T>,
    {
        let mut node = self.root_node();
        for value in sequence {
            let Some(child_node) = self.find_child(node.id(), &value) else {
                log::trace!("No matching child of node {node_id}", node_id = node.id());
                return None;
            };
            node = child_node;
        }
        Some(node)
    }

    /// Find the node at the end of a sequence of values.
    ///
    /// Fails if any of the values is not matched. Unless `partial_allowed` is set,
    /// the matched node must not have any children. Otherwise the sequence is only
    /// a prefix of longer sequences and not considered as a match.
    ///
    /// The empty sequence matches the root node.
    #[must_use]
    pub fn find<I>(&self, sequence: I, partial_allowed: bool) -> Option<&TreeNode<T>>
    where
        I: IntoIterator,
        I::Item: PartialEq<T>,
    {
        let node = self.walk(sequence)?;
        if partial_allowed || node.is_leaf() {
            return Some(node);
        }
        log::trace!(
            "Node {node_id} is not a leaf node and partial matches are not allowed",
            node_id = node.id()
        );
        None
    }

    #[must_use]
    pub fn find_node_id<I>(&self, sequence: I, partial_allowed: bool) -> Option<NodeId>
    where
        I: IntoIterator,
        I::Item: PartialEq<T>,
    {
        self.find(sequence, partial_allowed).map(TreeNode::id)
    }

    /// Check if exactly this sequence has been appended before.
    ///
    /// In contrast to [`Self::find()`] the result does not depend on whether
    /// longer sequences with the same prefix have been appended.
    #[must_use]
    pub fn contains<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator,
        I::Item: PartialEq<T>,
    {
        self.walk(sequence).is_some_and(TreeNode::is_terminal)
    }

    /// All parent nodes of the given node up to the root node.
    ///
    /// Returns `None` if the given node is not found.
    #[must_use]
    pub fn ancestors(&self, node_id: NodeId) -> Option<impl Iterator<Item = &TreeNode<T>> + '_> {
        let mut next_node = self.lookup_node(node_id)?;
        Some(std::iter::from_fn(move || {
            let parent_node = next_node
                .parent()
                .map(|parent_id| self.resolve_node(parent_id))?;
            next_node = parent_node;
            Some(parent_node)
        }))
    }

    /// The number of parent nodes of the given node up to the root node.
    ///
    /// Direct children of the root node have depth 1, i.e. one more than
    /// their [`OutlineEntry::level`](crate::OutlineEntry::level).
    ///
    /// Returns `None` if the given node is not found.
    #[must_use]
    pub fn depth(&self, node_id: NodeId) -> Option<usize> {
        self.ancestors(node_id).map(Iterator::count)
    }

    /// The sequence of values that leads from the root to the given node.
    ///
    /// Returns `None` if the given node is not found.
    #[must_use]
    pub fn path(&self, node_id: NodeId) -> Option<Vec<&T>> {
        let node = self.lookup_node(node_id)?;
        let mut path = std::iter::once(node)
            .chain(self.ancestors(node_id)?)
            .filter_map(TreeNode::value)
            .collect::<Vec<_>>();
        path.reverse();
        Some(path)
    }

    /// All descendants of the given node in depth-first pre-order.
    ///
    /// Levels of the returned entries are relative to the given node,
    /// i.e. its direct children are at level 0.
    ///
    /// Returns `None` if the given node is not found.
    #[must_use]
    pub fn descendants(&self, node_id: NodeId) -> Option<Outline<'_, T>> {
        self.contains_node(node_id).then(|| Outline::new(self, node_id))
    }

    /// Number of descendants of the given node (recursively).
    ///
    /// Returns `None` if the given node is not found.
    #[must_use]
    pub fn count_descendants(&self, node_id: NodeId) -> Option<usize> {
        self.descendants(node_id).map(Iterator::count)
    }
}

impl<T, S> Extend<S> for PrefixTree<T>
where
    T: Clone + PartialEq,
    S: IntoIterator,
    S::Item: Into<T>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, sequences: I) {
        for sequence in sequences {
            self.append(sequence);
        }
    }
}

impl<T, S> FromIterator<S> for PrefixTree<T>
where
    T: Clone + PartialEq,
    S: IntoIterator,
    S::Item: Into<T>,
{
    fn from_iter<I: IntoIterator<Item = S>>(sequences: I) -> Self {
        let mut tree = Self::new();
        tree.extend(sequences);
        tree
    }
}
