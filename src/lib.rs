// SPDX-FileCopyrightText: The seq-prefixtree authors
// SPDX-License-Identifier: MPL-2.0

//! Prefix tree over sequences of comparable values.
//!
//! Sequences like tokenized paths or dotted identifiers are appended one at a
//! time. Shared prefixes are merged into a single branch.

mod node;
pub use self::node::TreeNode;

mod node_id;
pub use self::node_id::NodeId;

mod outline;
pub use self::outline::{Outline, OutlineEntry, INDENT_WIDTH};

mod tree;
pub use self::tree::{PrefixTree, UnknownNodeError};

#[cfg(feature = "im")]
type Vector<T> = im::Vector<T>;

// Provides the subset of the `im::Vector` API that is needed.
#[cfg(not(feature = "im"))]
type Vector<T> = std::collections::VecDeque<T>;
