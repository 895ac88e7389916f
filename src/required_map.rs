//! Narrowing `IndexMap<K, Option<V>>` to a view in which no value is missing.

use crate::{
	indexed::{Indexed, IndexedExt},
	pick::{self, Selector},
	Error,
};
use core::{
	fmt::{self, Debug, Formatter},
	hash::{BuildHasher, Hash},
	iter::FusedIterator,
};
use hashbrown::DefaultHashBuilder;
use indexmap::{map, Equivalent, IndexMap};
use tap::Pipe;
use tracing::{debug, trace};

/// Retrieves a [`RequiredMap`] over `map` iff none of its values are [`None`].
///
/// The scan stops at the first missing value.
/// On success, the returned view borrows `map` itself, so writes through it are visible there afterwards.
pub fn required<K, V, S>(map: &mut IndexMap<K, Option<V>, S>) -> Option<RequiredMap<'_, K, V, S>> {
	let missing = map.values().position(Option::is_none);
	match missing {
		Some(position) => {
			trace!(position, "presence check failed on a missing value");
			None
		}
		None => RequiredMap { backing: map }.pipe(Some),
	}
}

/// An exclusive view of an `IndexMap<K, Option<V>, S>` in which every value is present.
///
/// [`RequiredMap`] doesn't copy its entries.
/// It borrows the map it was checked against for `'a` and reads and writes straight through to it.
///
/// # Invariant
///
/// Every value in the backing map is [`Some`] for as long as the view exists.
/// This is established by [`required`] (the only way to construct a [`RequiredMap`]),
/// and kept up by the write API:
///
/// - [`insert`](`RequiredMap::insert`) only accepts present values,
/// - [`get_mut`](`RequiredMap::get_mut`) hands out `&mut V` rather than `&mut Option<V>`,
/// - [`try_insert`](`RequiredMap::try_insert`) checks its [`Option`] argument and rejects [`None`].
///
/// Removal takes the whole entry out, so it can't leave a hole behind either.
pub struct RequiredMap<'a, K, V, S = DefaultHashBuilder> {
	backing: &'a mut IndexMap<K, Option<V>, S>,
}

impl<K, V, S> RequiredMap<'_, K, V, S> {
	/// The number of entries.
	#[must_use]
	pub fn len(&self) -> usize {
		self.backing.len()
	}

	/// Whether there are no entries.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.backing.is_empty()
	}

	/// Removes all entries from the backing map.
	pub fn clear(&mut self) {
		self.backing.clear()
	}

	/// Iterates over the keys in order.
	pub fn keys(&self) -> impl '_ + DoubleEndedIterator<Item = &K> + ExactSizeIterator {
		self.backing.keys()
	}

	/// Iterates over the values in order.
	pub fn values(&self) -> impl '_ + DoubleEndedIterator<Item = &V> + ExactSizeIterator {
		self.iter().map(|(_, v)| v)
	}

	/// Iterates over the entries in order.
	pub fn iter(&self) -> Iter<'_, K, V> {
		Iter {
			inner: self.backing.iter(),
		}
	}

	/// Iterates over the entries in order, together with their positions.
	pub fn indexed(&self) -> Indexed<Iter<'_, K, V>> {
		self.iter().indexed()
	}
}

impl<K, V, S> RequiredMap<'_, K, V, S>
where
	K: Hash + Eq,
	S: BuildHasher,
{
	/// Retrieves a reference to the value associated with `key`, iff available.
	pub fn get<Q>(&self, key: &Q) -> Option<&V>
	where
		Q: ?Sized + Hash + Equivalent<K>,
	{
		self.backing.get(key).and_then(Option::as_ref)
	}

	/// Retrieves a mutable reference to the value associated with `key`, iff available.
	pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
	where
		Q: ?Sized + Hash + Equivalent<K>,
	{
		self.backing.get_mut(key).and_then(Option::as_mut)
	}

	/// Whether `key` has an entry.
	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		Q: ?Sized + Hash + Equivalent<K>,
	{
		self.backing.contains_key(key)
	}

	/// Associates `value` with `key`, returning the previous value iff there was one.
	///
	/// A new key is appended. An existing key keeps its position.
	pub fn insert(&mut self, key: K, value: V) -> Option<V> {
		self.backing.insert(key, Some(value)).flatten()
	}

	/// Like [`insert`](`RequiredMap::insert`), but for values that may be missing.
	///
	/// # Errors
	///
	/// Iff `value` is [`None`], in which case the map is left unchanged.
	pub fn try_insert(&mut self, key: K, value: Option<V>) -> Result<Option<V>, Error> {
		match value {
			Some(value) => Ok(self.insert(key, value)),
			None => {
				debug!("rejected a missing value written into a `RequiredMap`");
				Err(Error::MissingValue)
			}
		}
	}

	/// Removes the entry for `key`, returning its value iff there was one.
	///
	/// The remaining entries keep their relative order.
	pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
	where
		Q: ?Sized + Hash + Equivalent<K>,
	{
		self.backing.shift_remove(key).flatten()
	}
}

impl<K, V, S> RequiredMap<'_, K, V, S>
where
	K: Clone + Hash + Eq,
	V: Clone,
	S: BuildHasher + Default,
{
	/// Copies the entries into a new map without [`Option`] wrappers.
	#[must_use]
	pub fn to_mapping(&self) -> IndexMap<K, V, S> {
		self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}

	/// Copies out those of `keys` that have an entry, skipping the rest.
	///
	/// See [`pick_lenient`](`crate::pick_lenient`).
	pub fn pick_lenient<'q, Q, I>(&self, keys: I) -> IndexMap<K, V, S>
	where
		Q: 'q + ?Sized + Hash + Equivalent<K>,
		I: IntoIterator<Item = &'q Q>,
	{
		pick::pick_lenient(&*self.backing, keys)
	}

	/// Copies out the `selector`'s keys iff all of them have an entry.
	///
	/// See [`pick_strict`](`crate::pick_strict`).
	pub fn pick_strict<Q>(&self, selector: Selector<&Q>) -> Option<IndexMap<K, V, S>>
	where
		Q: ?Sized + Hash + Equivalent<K>,
	{
		pick::pick_strict(&*self.backing, selector)
	}

	/// See [`pick_strict_one`](`crate::pick_strict_one`).
	pub fn pick_strict_one<Q>(&self, key: &Q) -> Option<IndexMap<K, V, S>>
	where
		Q: ?Sized + Hash + Equivalent<K>,
	{
		pick::pick_strict_one(&*self.backing, key)
	}

	/// See [`pick_strict_many`](`crate::pick_strict_many`).
	pub fn pick_strict_many<'q, Q, I>(&self, keys: I) -> Option<IndexMap<K, V, S>>
	where
		Q: 'q + ?Sized + Hash + Equivalent<K>,
		I: IntoIterator<Item = &'q Q>,
	{
		pick::pick_strict_many(&*self.backing, keys)
	}
}

impl<K: Debug, V: Debug, S> Debug for RequiredMap<'_, K, V, S> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<'b, K, V, S> IntoIterator for &'b RequiredMap<'_, K, V, S> {
	type Item = (&'b K, &'b V);
	type IntoIter = Iter<'b, K, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the entries of a [`RequiredMap`], with values unwrapped.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'b, K, V> {
	inner: map::Iter<'b, K, Option<V>>,
}

fn present<'b, K, V>((k, v): (&'b K, &'b Option<V>)) -> Option<(&'b K, &'b V)> {
	v.as_ref().map(|v| (k, v))
}

impl<'b, K, V> Iterator for Iter<'b, K, V> {
	type Item = (&'b K, &'b V);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.by_ref().find_map(present)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		// Every value is present, so no entry is ever skipped.
		self.inner.size_hint()
	}
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.by_ref().rev().find_map(present)
	}
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
