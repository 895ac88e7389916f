//! Index-aware `map`/`filter`/`find` over [`IndexMap`]s.
//!
//! All functions here take the source map by reference and allocate a fresh result.
//! Callbacks receive each [`Entry`] together with its zero-based position and run in iteration order.

use crate::{
	indexed::{indexed_entries, Entry, Indexed, IndexedEntry, IndexedExt},
	sealed::Sealed,
};
use core::hash::{BuildHasher, Hash};
use indexmap::{map, IndexMap};

/// Projects every value of `source` through `f`, keeping keys and their order.
///
/// `f` runs exactly once per entry.
pub fn map<K, V, S, R, F>(source: &IndexMap<K, V, S>, mut f: F) -> IndexMap<K, R, S>
where
	K: Clone + Hash + Eq,
	S: BuildHasher + Default,
	F: FnMut(Entry<'_, K, V>, usize) -> R,
{
	indexed_entries(source)
		.map(|(index, entry)| (entry.0.clone(), f(entry, index)))
		.collect()
}

/// Copies the entries of `source` for which `predicate` holds, in their original relative order.
pub fn filter<K, V, S, P>(source: &IndexMap<K, V, S>, mut predicate: P) -> IndexMap<K, V, S>
where
	K: Clone + Hash + Eq,
	V: Clone,
	S: BuildHasher + Default,
	P: FnMut(Entry<'_, K, V>, usize) -> bool,
{
	indexed_entries(source)
		.filter(|&(index, entry)| predicate(entry, index))
		.map(|(_, (k, v))| (k.clone(), v.clone()))
		.collect()
}

/// Retrieves the first entry for which `predicate` holds, iff any.
///
/// `predicate` isn't called again after it first returns `true`.
pub fn find<K, V, S, P>(source: &IndexMap<K, V, S>, predicate: P) -> Option<Entry<'_, K, V>>
where
	P: FnMut(Entry<'_, K, V>, usize) -> bool,
{
	find_index(source, predicate).map(|(_, entry)| entry)
}

/// Like [`find`], but also reports the position of the match.
pub fn find_index<K, V, S, P>(
	source: &IndexMap<K, V, S>,
	mut predicate: P,
) -> Option<IndexedEntry<'_, K, V>>
where
	P: FnMut(Entry<'_, K, V>, usize) -> bool,
{
	indexed_entries(source).find(|&(index, entry)| predicate(entry, index))
}

/// Method-call syntax for this module's functions, plus consuming variants that don't need [`Clone`].
///
/// This trait is sealed and implemented only for [`IndexMap`].
pub trait Transform: Sealed + Sized {
	/// The type of keys.
	type K;
	/// The type of values.
	type V;
	/// The hasher builder.
	type S;

	/// See [`indexed_entries`](`crate::indexed_entries`).
	fn indexed(&self) -> Indexed<map::Iter<'_, Self::K, Self::V>>;

	/// See [`map`].
	fn map_indexed<R, F>(&self, f: F) -> IndexMap<Self::K, R, Self::S>
	where
		Self::K: Clone + Hash + Eq,
		Self::S: BuildHasher + Default,
		F: FnMut(Entry<'_, Self::K, Self::V>, usize) -> R;

	/// See [`filter`].
	fn filter_indexed<P>(&self, predicate: P) -> Self
	where
		Self::K: Clone + Hash + Eq,
		Self::V: Clone,
		Self::S: BuildHasher + Default,
		P: FnMut(Entry<'_, Self::K, Self::V>, usize) -> bool;

	/// See [`find`].
	fn find_indexed<P>(&self, predicate: P) -> Option<Entry<'_, Self::K, Self::V>>
	where
		P: FnMut(Entry<'_, Self::K, Self::V>, usize) -> bool;

	/// Like [`map_indexed`](`Transform::map_indexed`), but moves keys and values out of `self`.
	fn into_mapped<R, F>(self, f: F) -> IndexMap<Self::K, R, Self::S>
	where
		Self::K: Hash + Eq,
		Self::S: BuildHasher + Default,
		F: FnMut((&Self::K, Self::V), usize) -> R;

	/// Like [`filter_indexed`](`Transform::filter_indexed`), but drops rejected entries from `self` in place.
	fn into_filtered<P>(self, predicate: P) -> Self
	where
		P: FnMut(Entry<'_, Self::K, Self::V>, usize) -> bool;
}

impl<K, V, S> Transform for IndexMap<K, V, S> {
	type K = K;
	type V = V;
	type S = S;

	fn indexed(&self) -> Indexed<map::Iter<'_, K, V>> {
		indexed_entries(self)
	}

	fn map_indexed<R, F>(&self, f: F) -> IndexMap<K, R, S>
	where
		K: Clone + Hash + Eq,
		S: BuildHasher + Default,
		F: FnMut(Entry<'_, K, V>, usize) -> R,
	{
		map(self, f)
	}

	fn filter_indexed<P>(&self, predicate: P) -> Self
	where
		K: Clone + Hash + Eq,
		V: Clone,
		S: BuildHasher + Default,
		P: FnMut(Entry<'_, K, V>, usize) -> bool,
	{
		filter(self, predicate)
	}

	fn find_indexed<P>(&self, predicate: P) -> Option<Entry<'_, K, V>>
	where
		P: FnMut(Entry<'_, K, V>, usize) -> bool,
	{
		find(self, predicate)
	}

	fn into_mapped<R, F>(self, mut f: F) -> IndexMap<K, R, S>
	where
		K: Hash + Eq,
		S: BuildHasher + Default,
		F: FnMut((&K, V), usize) -> R,
	{
		self.into_iter()
			.indexed()
			.map(|(index, (k, v))| {
				let r = f((&k, v), index);
				(k, r)
			})
			.collect()
	}

	fn into_filtered<P>(mut self, mut predicate: P) -> Self
	where
		P: FnMut(Entry<'_, K, V>, usize) -> bool,
	{
		let mut index = 0;
		self.retain(|k, v| {
			let keep = predicate((k, &*v), index);
			index += 1;
			keep
		});
		self
	}
}
