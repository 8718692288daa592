use crate::node::{InOrder, Link};

/// Whether an in-order walk of the subtree yields strictly increasing keys, which
/// holds exactly when every node's left keys are smaller and right keys larger.
pub fn is_ordered<K, V>(root: &Link<K, V>) -> bool
where
	K: Ord,
{
	let mut walk = InOrder::new(root);
	let mut prev = match walk.next() {
		Some(node) => node,
		None => return true,
	};

	for node in walk {
		if prev.key() >= node.key() {
			return false;
		}
		prev = node;
	}

	true
}

#[cfg(test)]
pub fn count<K, V>(root: &Link<K, V>) -> usize { InOrder::new(root).count() }
