pub mod check;

use std::{borrow::Borrow, cmp::Ordering, mem::replace};

/// An owning edge of the tree: the root slot or one of a node's child slots.
pub type Link<K, V> = Option<Box<Node<K, V>>>;

pub struct Node<K, V> {
	key: K,
	value: V,
	left: Link<K, V>,
	right: Link<K, V>,
}

#[must_use]
#[derive(Debug, PartialEq)]
pub enum NodeInsertResult<V> {
	Existed(V),
	Ok,
}

#[must_use]
#[derive(Debug, PartialEq)]
pub enum NodeRemoveResult<V> {
	NotThere,
	// Target had no children
	Leaf(V),
	// Target had exactly one child, which took its place
	Spliced(V),
	// Target had two children and now holds its in-order successor
	Promoted(V),
}

impl<V> NodeRemoveResult<V> {
	pub fn into_value(self) -> Option<V> {
		match self {
			NodeRemoveResult::NotThere => None,
			NodeRemoveResult::Leaf(v)
			| NodeRemoveResult::Spliced(v)
			| NodeRemoveResult::Promoted(v) => Some(v),
		}
	}
}

impl<K, V> Node<K, V> {
	pub fn leaf(key: K, value: V) -> Self {
		Self {
			key,
			value,
			left: None,
			right: None,
		}
	}

	pub fn key(&self) -> &K { &self.key }

	pub fn value(&self) -> &V { &self.value }

	pub fn value_mut(&mut self) -> &mut V { &mut self.value }

	#[cfg(test)]
	pub fn left(&self) -> Option<&Node<K, V>> { self.left.as_deref() }

	#[cfg(test)]
	pub fn right(&self) -> Option<&Node<K, V>> { self.right.as_deref() }
}

/// Read-only descent. Returns the node holding `key`, if any.
pub fn search<'a, K, V, Q>(mut link: &'a Link<K, V>, key: &Q) -> Option<&'a Node<K, V>>
where
	K: Borrow<Q>,
	Q: Ord + ?Sized,
{
	while let Some(node) = link.as_deref() {
		link = match key.cmp(node.key.borrow()) {
			Ordering::Less => &node.left,
			Ordering::Greater => &node.right,
			Ordering::Equal => return Some(node),
		};
	}
	None
}

/// Follows the search path for `key` and returns the link that holds it, or the
/// empty link where a node for `key` would have to be attached.
pub fn search_slot<'a, K, V, Q>(mut link: &'a mut Link<K, V>, key: &Q) -> &'a mut Link<K, V>
where
	K: Borrow<Q>,
	Q: Ord + ?Sized,
{
	loop {
		let ordering = link.as_deref().map(|node| key.cmp(node.key.borrow()));
		link = match (ordering, link) {
			(Some(Ordering::Less), Some(node)) => &mut node.left,
			(Some(Ordering::Greater), Some(node)) => &mut node.right,
			(_, link) => return link,
		};
	}
}

pub fn insert<K, V>(root: &mut Link<K, V>, key: K, value: V) -> NodeInsertResult<V>
where
	K: Ord,
{
	let slot = search_slot(root, &key);

	if let Some(node) = slot.as_deref_mut() {
		// Key exists already - swap value and return, the stored key is kept
		return NodeInsertResult::Existed(replace(&mut node.value, value));
	}

	*slot = Some(Box::new(Node::leaf(key, value)));
	NodeInsertResult::Ok
}

pub fn remove<K, V, Q>(root: &mut Link<K, V>, key: &Q) -> NodeRemoveResult<V>
where
	K: Borrow<Q>,
	Q: Ord + ?Sized,
{
	let slot = search_slot(root, key);

	if let Some(node) = slot.as_deref_mut() {
		if node.left.is_some() {
			// Both children present: pull the successor out of the right subtree and
			// move its contents into this node, keeping both child links
			if let Some(successor) = remove_min(&mut node.right) {
				let Node {
					key: successor_key,
					value: successor_value,
					..
				} = *successor;
				node.key = successor_key;
				return NodeRemoveResult::Promoted(replace(&mut node.value, successor_value));
			}
		}
	}

	let node = match slot.take() {
		Some(node) => node,
		None => return NodeRemoveResult::NotThere,
	};
	let Node {
		value, left, right, ..
	} = *node;

	// At most one child is left at this point
	debug_assert!(left.is_none() || right.is_none());

	if left.is_none() && right.is_none() {
		NodeRemoveResult::Leaf(value)
	}
	else {
		*slot = left.or(right);
		NodeRemoveResult::Spliced(value)
	}
}

/// The minimum node of a non-empty subtree.
pub fn find_min<K, V>(mut node: &Node<K, V>) -> &Node<K, V> {
	while let Some(left) = node.left.as_deref() {
		node = left;
	}
	node
}

/// Detaches the node `find_min` would locate, splicing its right child into the
/// vacated slot. Returns `None` only for an empty subtree.
pub fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
	let slot = min_slot(link);
	let mut min = slot.take()?;
	*slot = min.right.take();
	Some(min)
}

fn min_slot<K, V>(mut link: &mut Link<K, V>) -> &mut Link<K, V> {
	loop {
		let descend = link.as_deref().map_or(false, |node| node.left.is_some());
		link = match (descend, link) {
			(true, Some(node)) => &mut node.left,
			(_, link) => return link,
		};
	}
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<K, V>(root: &Link<K, V>) -> usize {
	let mut level: Vec<&Node<K, V>> = root.as_deref().into_iter().collect();
	let mut height = 0;

	while !level.is_empty() {
		height += 1;
		level = level
			.into_iter()
			.flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
			.collect();
	}

	height
}

/// Tears down a subtree without recursing per level. Returns the number of nodes
/// released.
pub fn release<K, V>(root: Link<K, V>) -> usize {
	let mut stack: Vec<Box<Node<K, V>>> = root.into_iter().collect();
	let mut released = 0;

	while let Some(mut node) = stack.pop() {
		stack.extend(node.left.take());
		stack.extend(node.right.take());
		released += 1;
	}

	released
}

enum Visit<'a, K, V> {
	Enter(&'a Node<K, V>),
	Build(&'a Node<K, V>),
}

/// Copies a subtree node for node, keeping its shape. Children are copied before
/// their parent and parked on `built` until the parent picks them up.
pub fn duplicate<K, V>(root: &Link<K, V>) -> Link<K, V>
where
	K: Clone,
	V: Clone,
{
	let mut work: Vec<Visit<'_, K, V>> =
		root.as_deref().map(Visit::Enter).into_iter().collect();
	let mut built: Vec<Box<Node<K, V>>> = Vec::new();

	while let Some(step) = work.pop() {
		match step {
			Visit::Enter(node) => {
				work.push(Visit::Build(node));
				// Left is pushed last so its copy lands on `built` before the right one
				work.extend(node.right.as_deref().map(Visit::Enter));
				work.extend(node.left.as_deref().map(Visit::Enter));
			}
			Visit::Build(node) => {
				let right = if node.right.is_some() { built.pop() } else { None };
				let left = if node.left.is_some() { built.pop() } else { None };
				built.push(Box::new(Node {
					key: node.key.clone(),
					value: node.value.clone(),
					left,
					right,
				}));
			}
		}
	}

	built.pop()
}

/// Walks a subtree in ascending key order.
pub struct InOrder<'a, K, V> {
	stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> InOrder<'a, K, V> {
	pub fn new(root: &'a Link<K, V>) -> Self {
		let mut walk = Self { stack: Vec::new() };
		walk.push_left_spine(root.as_deref());
		walk
	}

	fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
		while let Some(n) = node {
			self.stack.push(n);
			node = n.left.as_deref();
		}
	}
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
	type Item = &'a Node<K, V>;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		self.push_left_spine(node.right.as_deref());
		Some(node)
	}
}

/// Walks a subtree parents-first.
#[cfg(test)]
pub struct PreOrder<'a, K, V> {
	stack: Vec<&'a Node<K, V>>,
}

#[cfg(test)]
impl<'a, K, V> PreOrder<'a, K, V> {
	pub fn new(root: &'a Link<K, V>) -> Self {
		Self {
			stack: root.as_deref().into_iter().collect(),
		}
	}
}

#[cfg(test)]
impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
	type Item = &'a Node<K, V>;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		self.stack.extend(node.right.as_deref());
		self.stack.extend(node.left.as_deref());
		Some(node)
	}
}
