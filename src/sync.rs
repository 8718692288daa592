use crate::{BstMap, MapError};
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{borrow::Borrow, fmt::Debug};

/// A [`BstMap`] behind a single reader-writer lock.
///
/// Lookups share the lock, mutations hold it exclusively. Every call takes the
/// lock once; use [`read`](Self::read) or [`write`](Self::write) to run several
/// operations under one acquisition.
pub struct SharedMap<K, V> {
	inner: RwLock<BstMap<K, V>>,
}

impl<K, V> SharedMap<K, V> {
	pub fn new() -> Self { Self::from(BstMap::new()) }

	pub fn read(&self) -> RwLockReadGuard<'_, BstMap<K, V>> { self.inner.read() }

	pub fn write(&self) -> RwLockWriteGuard<'_, BstMap<K, V>> { self.inner.write() }

	pub fn into_inner(self) -> BstMap<K, V> { self.inner.into_inner() }

	pub fn len(&self) -> usize { self.inner.read().len() }

	pub fn is_empty(&self) -> bool { self.inner.read().is_empty() }

	pub fn clear(&self) { self.inner.write().clear() }
}

impl<K, V> SharedMap<K, V>
where
	K: Ord,
{
	/// Returns a guard borrowing the value under `key`. The read lock is held until
	/// the guard is dropped.
	pub fn get<Q>(&self, key: &Q) -> Option<MappedRwLockReadGuard<'_, V>>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		RwLockReadGuard::try_map(self.inner.read(), |map| map.get(key)).ok()
	}

	pub fn try_get<Q>(&self, key: &Q) -> Result<MappedRwLockReadGuard<'_, V>, MapError>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.get(key).ok_or(MapError::KeyNotFound)
	}

	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.inner.read().contains_key(key)
	}

	pub fn insert(&self, key: K, value: V) -> Option<V> { self.inner.write().insert(key, value) }

	pub fn remove<Q>(&self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Ord + ?Sized,
	{
		self.inner.write().remove(key)
	}
}

impl<K, V> Default for SharedMap<K, V> {
	fn default() -> Self { Self::new() }
}

impl<K, V> From<BstMap<K, V>> for SharedMap<K, V> {
	fn from(map: BstMap<K, V>) -> Self {
		Self {
			inner: RwLock::new(map),
		}
	}
}

impl<K, V> Debug for SharedMap<K, V>
where
	K: Debug,
	V: Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SharedMap").field("inner", &self.inner).finish()
	}
}
