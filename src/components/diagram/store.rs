//! Parent/child edges between diagram boxes.

use std::collections::HashMap;
use std::fmt;

/// Identity of a diagram box, assigned at creation and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Parent -> children edges, both levels kept in insertion order.
///
/// Registering the same pair twice records two edges.
#[derive(Clone, Debug, Default)]
pub struct RelationshipStore {
	entries: Vec<(NodeId, Vec<NodeId>)>,
	index: HashMap<NodeId, usize>,
}

impl RelationshipStore {
	/// Store without edges.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `parent -> child`, after any earlier children of `parent`.
	pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
		let slot = *self.index.entry(parent).or_insert_with(|| {
			self.entries.push((parent, Vec::new()));
			self.entries.len() - 1
		});
		self.entries[slot].1.push(child);
	}

	/// Children of `parent`, empty if it has none.
	pub fn children(&self, parent: NodeId) -> &[NodeId] {
		self.index
			.get(&parent)
			.map(|&slot| self.entries[slot].1.as_slice())
			.unwrap_or(&[])
	}

	/// Parents in order of first registration, each with its children.
	pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
		self.entries
			.iter()
			.map(|(parent, children)| (*parent, children.as_slice()))
	}

	/// Number of nodes with at least one child.
	pub fn parent_count(&self) -> usize {
		self.entries.len()
	}

	/// Number of recorded edges, duplicates included.
	pub fn edge_count(&self) -> usize {
		self.entries.iter().map(|(_, children)| children.len()).sum()
	}

	/// True until the first edge is recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
