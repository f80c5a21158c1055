// SPDX-FileCopyrightText: The seq-prefixtree authors
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, io};

use crate::{NodeId, PrefixTree, TreeNode};

/// Number of spaces per level in the textual dump.
pub const INDENT_WIDTH: usize = 3;

const SPACES: &str = "                                ";

fn write_indent(f: &mut fmt::Formatter<'_>, mut width: usize) -> fmt::Result {
    // Format widths are limited to `u16::MAX`
    while width > 0 {
        let chunk = width.min(SPACES.len());
        f.write_str(&SPACES[..chunk])?;
        width -= chunk;
    }
    Ok(())
}

/// A visited node and its level.
#[derive(Debug, Clone)]
pub struct OutlineEntry<'a, T> {
    /// Level relative to the node at which the walk started.
    ///
    /// Direct children of the start node are at level 0. This is one
    /// less than [`PrefixTree::depth()`] for a walk that starts at the
    /// root node.
    pub level: usize,

    pub node: &'a TreeNode<T>,
}

impl<T> fmt::Display for OutlineEntry<'_, T>
where
    T: fmt::Display,
{
    /// Indented value without a trailing line break.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.node.value() else {
            // The root node is never visited
            return Ok(());
        };
        write_indent(f, self.level * INDENT_WIDTH)?;
        write!(f, "{value}")
    }
}

/// Depth-first, pre-order walk over all descendants of a node.
///
/// Parents are visited before their children and siblings are visited
/// in insertion order. The walk uses an explicit stack and does not
/// recurse, regardless of the depth of the tree.
#[derive(Debug)]
pub struct Outline<'a, T>
where
    T: Clone,
{
    tree: &'a PrefixTree<T>,
    pending: Vec<(usize, NodeId)>,
}

impl<'a, T> Outline<'a, T>
where
    T: Clone,
{
    pub(crate) fn new(tree: &'a PrefixTree<T>, start_id: NodeId) -> Self {
        let mut outline = Self {
            tree,
            pending: Vec::new(),
        };
        outline.push_children(start_id, 0);
        outline
    }

    fn push_children(&mut self, parent_id: NodeId, level: usize) {
        let tree = self.tree;
        let children = tree.resolve_node(parent_id).children();
        // Reversed, so that the first child is popped first
        self.pending
            .extend(children.iter().rev().map(|&child_id| (level, child_id)));
    }
}

impl<'a, T> Iterator for Outline<'a, T>
where
    T: Clone,
{
    type Item = OutlineEntry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node_id) = self.pending.pop()?;
        let tree = self.tree;
        let node = tree.resolve_node(node_id);
        self.push_children(node_id, level + 1);
        Some(OutlineEntry { level, node })
    }
}

impl<T> PrefixTree<T>
where
    T: Clone,
{
    /// All nodes except the root node in depth-first pre-order.
    ///
    /// The direct children of the root node are at level 0.
    #[must_use]
    pub fn outline(&self) -> Outline<'_, T> {
        Outline::new(self, NodeId::ROOT)
    }

    /// Lines of the textual dump without line breaks.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_
    where
        T: fmt::Display,
    {
        self.outline().map(|entry| entry.to_string())
    }

    /// Write the textual dump into the given sink.
    ///
    /// # Errors
    ///
    /// Fails if writing into the sink fails.
    pub fn write_outline<W>(&self, mut writer: W) -> io::Result<()>
    where
        W: io::Write,
        T: fmt::Display,
    {
        write!(writer, "{self}")
    }

    /// Print the textual dump on stdout.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        print!("{self}");
    }
}

/// Indented outline with one line per node.
///
/// ```
/// # use seq_prefixtree::PrefixTree;
/// let tree = [vec!["a", "b"], vec!["a", "c"], vec!["x"]]
///     .into_iter()
///     .collect::<PrefixTree<String>>();
/// assert_eq!("a\n   b\n   c\nx\n", tree.to_string());
/// ```
impl<T> fmt::Display for PrefixTree<T>
where
    T: Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.outline() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
