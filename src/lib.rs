//! An ordered map backed by a plain binary search tree.
//!
//! Every node owns at most two children. Keys in a node's left subtree compare
//! less than the node's key and keys in its right subtree compare greater. The
//! tree is never rebalanced, so its shape follows insertion order: inserting keys
//! in ascending order produces a list-shaped tree whose depth equals its length.
//!
//! ```
//! use bst_map::{BstMap, MapError};
//!
//! let mut map = BstMap::new();
//! map.insert(5, "a");
//! map.insert(3, "b");
//! assert_eq!(map.insert(3, "z"), Some("b"));
//!
//! assert_eq!(map.get(&3), Some(&"z"));
//! assert_eq!(map.remove(&5), Some("a"));
//! assert_eq!(map.try_get(&5), Err(MapError::KeyNotFound));
//! ```

mod error;
mod node;
#[cfg(feature = "sync")]
mod sync;

pub use error::MapError;
#[cfg(feature = "sync")]
pub use sync::SharedMap;

use node::{check, InOrder, Link, NodeInsertResult, NodeRemoveResult};
use std::{borrow::Borrow, fmt::Debug};
use tracing::{debug, trace};

pub struct BstMap<K, V> {
	root: Link<K, V>,
	len: usize,
}

impl<K, V> BstMap<K, V> {
	/// Creates an empty map.
	pub const fn new() -> Self { Self { root: None, len: 0 } }

	pub fn len(&self) -> usize { self.len }

	pub fn is_empty(&self) -> bool { self.len == 0 }

	/// Number of nodes on the longest path from the root to a leaf, `0` when
	/// empty. Ranges from about `log2(len)` up to `len` depending on insertion
	/// order.
	pub fn height(&self) -> usize { node::height(&self.root) }

	/// Removes every entry.
	pub fn clear(&mut self) {
		let released = node::release(self.root.take());
		self.len = 0;
		debug!(released, "cleared map");
	}
}

impl<K, V> BstMap<K, V>
where
	K: Ord,
{
	/// Returns the value stored under `key`.
	pub fn get<Q>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		node::search(&self.root, key).map(|node| node.value())
	}

	/// Same lookup as [`get`](Self::get), reporting a missing key as
	/// [`MapError::KeyNotFound`].
	pub fn try_get<Q>(&self, key: &Q) -> Result<&V, MapError>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.get(key).ok_or(MapError::KeyNotFound)
	}

	pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		node::search(&self.root, key).map(|node| (node.key(), node.value()))
	}

	pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		node::search_slot(&mut self.root, key)
			.as_deref_mut()
			.map(|node| node.value_mut())
	}

	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		node::search(&self.root, key).is_some()
	}

	/// The entry with the smallest key.
	pub fn first_key_value(&self) -> Option<(&K, &V)> {
		let min = node::find_min(self.root.as_deref()?);
		Some((min.key(), min.value()))
	}

	/// Inserts `value` under `key`. If the key was already present its value is
	/// replaced and the old one returned; the stored key and the tree shape stay
	/// as they were.
	pub fn insert(&mut self, key: K, value: V) -> Option<V> {
		match node::insert(&mut self.root, key, value) {
			NodeInsertResult::Existed(old) => {
				trace!(len = self.len, "replaced value of existing key");
				Some(old)
			}
			NodeInsertResult::Ok => {
				self.len += 1;
				trace!(len = self.len, "inserted leaf");
				None
			}
		}
	}

	/// Removes `key` and returns the value that was stored under it. Removing a
	/// key that is not present leaves the map untouched.
	pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		let result = node::remove(&mut self.root, key);

		match &result {
			NodeRemoveResult::NotThere => return None,
			NodeRemoveResult::Leaf(_) => trace!("removed leaf"),
			NodeRemoveResult::Spliced(_) => trace!("removed node, spliced its only child"),
			NodeRemoveResult::Promoted(_) => trace!("removed node, promoted in-order successor"),
		}

		self.len -= 1;
		result.into_value()
	}

	/// Whether every node's left subtree holds only smaller keys and its right
	/// subtree only larger ones.
	pub fn is_ordered(&self) -> bool { check::is_ordered(&self.root) }
}

impl<K, V> Default for BstMap<K, V> {
	fn default() -> Self { Self::new() }
}

impl<K, V> Drop for BstMap<K, V> {
	fn drop(&mut self) { node::release(self.root.take()); }
}

impl<K, V> Clone for BstMap<K, V>
where
	K: Clone,
	V: Clone,
{
	fn clone(&self) -> Self {
		Self {
			root: node::duplicate(&self.root),
			len: self.len,
		}
	}
}

impl<K, V> Debug for BstMap<K, V>
where
	K: Debug,
	V: Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map()
			.entries(InOrder::new(&self.root).map(|node| (node.key(), node.value())))
			.finish()
	}
}
