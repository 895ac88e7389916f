//! Narrowing maps down to chosen keys.
//!
//! There are two flavours that intentionally stay apart:
//!
//! - **strict** selection is all-or-nothing: one missing value and the whole result is [`None`].
//! - **lenient** selection is best-effort: missing values and unknown keys are skipped.
//!
//! The free functions here work on maps with [`Option`]al values, where a [`None`] value counts as missing
//! just like an absent key does. Their results are free of [`Option`]s.
//! For maps whose values can't be missing, use the [`PickKeys`] extension trait instead.

use crate::{
	indexed::{Entry, IndexedExt},
	sealed::Sealed,
};
use alloc::vec::Vec;
use core::{
	hash::{BuildHasher, Hash},
	iter,
};
use indexmap::{Equivalent, IndexMap};
use tap::TapOptional;
use tracing::trace;

/// Which keys a strict selection should retrieve.
///
/// Both shapes are explicit, so there is no "neither a key nor a list of keys" case to reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<Q> {
	/// A single key.
	One(Q),
	/// Several keys, in the order the result should have.
	Many(Vec<Q>),
}

impl<Q> Selector<Q> {
	/// Selects a single key.
	#[must_use]
	pub fn one(key: Q) -> Self {
		Self::One(key)
	}

	/// Selects several keys, in order.
	#[must_use]
	pub fn many(keys: impl IntoIterator<Item = Q>) -> Self {
		Self::Many(keys.into_iter().collect())
	}
}

impl<Q> FromIterator<Q> for Selector<Q> {
	fn from_iter<I: IntoIterator<Item = Q>>(keys: I) -> Self {
		Self::many(keys)
	}
}

/// Retrieves the `selector`'s keys from `map` iff all of their values are present.
pub fn pick_strict<K, V, S, Q>(
	map: &IndexMap<K, Option<V>, S>,
	selector: Selector<&Q>,
) -> Option<IndexMap<K, V, S>>
where
	K: Clone + Hash + Eq,
	V: Clone,
	S: BuildHasher + Default,
	Q: ?Sized + Hash + Equivalent<K>,
{
	match selector {
		Selector::One(key) => pick_strict_one(map, key),
		Selector::Many(keys) => pick_strict_many(map, keys),
	}
}

/// Retrieves `{key: map[key]}` iff that value is present.
pub fn pick_strict_one<K, V, S, Q>(
	map: &IndexMap<K, Option<V>, S>,
	key: &Q,
) -> Option<IndexMap<K, V, S>>
where
	K: Clone + Hash + Eq,
	V: Clone,
	S: BuildHasher + Default,
	Q: ?Sized + Hash + Equivalent<K>,
{
	pick_strict_many(map, iter::once(key))
}

/// Retrieves each of `keys` from `map`, in the given order, iff **all** of their values are present.
///
/// Keys that aren't in `map` at all count as missing.
/// Lookups stop at the first miss.
pub fn pick_strict_many<'q, K, V, S, Q, I>(
	map: &IndexMap<K, Option<V>, S>,
	keys: I,
) -> Option<IndexMap<K, V, S>>
where
	K: Clone + Hash + Eq,
	V: Clone,
	S: BuildHasher + Default,
	Q: 'q + ?Sized + Hash + Equivalent<K>,
	I: IntoIterator<Item = &'q Q>,
{
	select_all(|key| present(map, key), keys)
}

/// Retrieves those of `keys` whose values are present in `map`, skipping the rest.
///
/// This never fails, but the result may be empty.
pub fn pick_lenient<'q, K, V, S, Q, I>(
	map: &IndexMap<K, Option<V>, S>,
	keys: I,
) -> IndexMap<K, V, S>
where
	K: Clone + Hash + Eq,
	V: Clone,
	S: BuildHasher + Default,
	Q: 'q + ?Sized + Hash + Equivalent<K>,
	I: IntoIterator<Item = &'q Q>,
{
	select_present(|key| present(map, key), keys)
}

fn present<'a, K, V, S, Q>(map: &'a IndexMap<K, Option<V>, S>, key: &Q) -> Option<Entry<'a, K, V>>
where
	K: Hash + Eq,
	S: BuildHasher,
	Q: ?Sized + Hash + Equivalent<K>,
{
	map.get_key_value(key)
		.and_then(|(k, v)| v.as_ref().map(|v| (k, v)))
}

fn select_all<'a, 'q, K, V, S, Q, I, L>(lookup: L, keys: I) -> Option<IndexMap<K, V, S>>
where
	K: 'a + Clone + Hash + Eq,
	V: 'a + Clone,
	S: BuildHasher + Default,
	Q: 'q + ?Sized,
	I: IntoIterator<Item = &'q Q>,
	L: Fn(&Q) -> Option<Entry<'a, K, V>>,
{
	let keys = keys.into_iter();
	let mut picked = IndexMap::with_capacity_and_hasher(keys.size_hint().0, S::default());
	for (position, key) in keys.indexed() {
		let (k, v) = lookup(key)
			.tap_none(|| trace!(position, "strict selection aborted on a missing value"))?;
		picked.insert(k.clone(), v.clone());
	}
	Some(picked)
}

fn select_present<'a, 'q, K, V, S, Q, I, L>(lookup: L, keys: I) -> IndexMap<K, V, S>
where
	K: 'a + Clone + Hash + Eq,
	V: 'a + Clone,
	S: BuildHasher + Default,
	Q: 'q + ?Sized,
	I: IntoIterator<Item = &'q Q>,
	L: Fn(&Q) -> Option<Entry<'a, K, V>>,
{
	keys.into_iter()
		.filter_map(lookup)
		.map(|(k, v)| (k.clone(), v.clone()))
		.collect()
}

/// Strict and lenient selection by key, on maps whose values can't be missing.
///
/// Here, a value is present iff its key is.
/// The methods are named apart from this module's free functions and from [`RequiredMap`](`crate::RequiredMap`)'s,
/// which treat [`None`] values as missing, so that call syntax never decides which of the two behaviours applies:
///
/// ```compile_fail
/// use entrywise::{Mapping, PickKeys as _};
///
/// let sparse: Mapping<&str, Option<u8>> = [("a", Some(1)), ("c", None)].into_iter().collect();
/// let _ = sparse.pick_strict_many(["a", "c"]);
/// ```
///
/// On an `IndexMap<K, Option<V>>`, reach for [`pick_strict_many`] or [`required`](`crate::required`) instead.
///
/// This trait is sealed and implemented only for [`IndexMap`].
pub trait PickKeys: Sealed + Sized {
	/// The type of keys.
	type K;
	/// The type of values.
	type V;

	/// Like [`pick_strict`], with absent keys as the only misses.
	fn pick_keys_strict<Q>(&self, selector: Selector<&Q>) -> Option<Self>
	where
		Self::K: Clone + Hash + Eq,
		Self::V: Clone,
		Q: ?Sized + Hash + Equivalent<Self::K>;

	/// Like [`pick_strict_one`], with absent keys as the only misses.
	fn pick_keys_strict_one<Q>(&self, key: &Q) -> Option<Self>
	where
		Self::K: Clone + Hash + Eq,
		Self::V: Clone,
		Q: ?Sized + Hash + Equivalent<Self::K>;

	/// Like [`pick_strict_many`], with absent keys as the only misses.
	fn pick_keys_strict_many<'q, Q, I>(&self, keys: I) -> Option<Self>
	where
		Self::K: Clone + Hash + Eq,
		Self::V: Clone,
		Q: 'q + ?Sized + Hash + Equivalent<Self::K>,
		I: IntoIterator<Item = &'q Q>;

	/// Like [`pick_lenient`], skipping only absent keys.
	fn pick_keys_lenient<'q, Q, I>(&self, keys: I) -> Self
	where
		Self::K: Clone + Hash + Eq,
		Self::V: Clone,
		Q: 'q + ?Sized + Hash + Equivalent<Self::K>,
		I: IntoIterator<Item = &'q Q>;
}

impl<K, V, S> PickKeys for IndexMap<K, V, S>
where
	S: BuildHasher + Default,
{
	type K = K;
	type V = V;

	fn pick_keys_strict<Q>(&self, selector: Selector<&Q>) -> Option<Self>
	where
		K: Clone + Hash + Eq,
		V: Clone,
		Q: ?Sized + Hash + Equivalent<K>,
	{
		match selector {
			Selector::One(key) => self.pick_keys_strict_one(key),
			Selector::Many(keys) => self.pick_keys_strict_many(keys),
		}
	}

	fn pick_keys_strict_one<Q>(&self, key: &Q) -> Option<Self>
	where
		K: Clone + Hash + Eq,
		V: Clone,
		Q: ?Sized + Hash + Equivalent<K>,
	{
		self.pick_keys_strict_many(iter::once(key))
	}

	fn pick_keys_strict_many<'q, Q, I>(&self, keys: I) -> Option<Self>
	where
		K: Clone + Hash + Eq,
		V: Clone,
		Q: 'q + ?Sized + Hash + Equivalent<K>,
		I: IntoIterator<Item = &'q Q>,
	{
		select_all(|key| self.get_key_value(key), keys)
	}

	fn pick_keys_lenient<'q, Q, I>(&self, keys: I) -> Self
	where
		K: Clone + Hash + Eq,
		V: Clone,
		Q: 'q + ?Sized + Hash + Equivalent<K>,
		I: IntoIterator<Item = &'q Q>,
	{
		select_present(|key| self.get_key_value(key), keys)
	}
}
