//! Index-aware `map`/`filter`/`find` over insertion-ordered maps, and a view that guarantees every value is present.
//!
//! All operations work on [`IndexMap`], which keeps keys unique and remembers the order they were first inserted in.
//! Callbacks see each entry together with its zero-based position in that order.
//!
//! ```
//! use entrywise::{filter, find, required, Mapping};
//!
//! let person: Mapping<&str, &str> = [("name", "John"), ("city", "Tokyo"), ("country", "Japan")]
//! 	.into_iter()
//! 	.collect();
//!
//! let long = filter(&person, |(_, v), _| v.len() > 4);
//! assert_eq!(long.keys().copied().collect::<Vec<_>>(), ["city", "country"]);
//! assert_eq!(find(&person, |_, index| index == 1), Some((&"city", &"Tokyo")));
//!
//! let mut draft: Mapping<&str, Option<u32>> = [("a", Some(1)), ("b", Some(2)), ("c", None)]
//! 	.into_iter()
//! 	.collect();
//! assert!(required(&mut draft).is_none());
//!
//! draft["c"] = Some(3);
//! let checked = required(&mut draft).unwrap();
//! assert_eq!(checked.pick_lenient(["a", "b", "z"]).len(), 2);
//! ```
//!
//! # Missing values
//!
//! Keys are never optional. Values that may be missing are modelled as [`Option`]s.
//! The presence guard [`required`] turns an `IndexMap<K, Option<V>>` without [`None`]s into a [`RequiredMap`],
//! and [`pick_strict`] and [`pick_lenient`] narrow such maps down to chosen keys, all-or-nothing or best-effort respectively.
//!
//! Absence is always reported as [`None`]. [`Error`] is reserved for writes that would break a [`RequiredMap`]'s guarantee.
#![no_std]
#![doc(html_root_url = "https://docs.rs/entrywise/0.0.1")]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::semicolon_if_nothing_returned)]

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;

use core::hash::{BuildHasher, Hash};
use indexmap::map::{Iter, Keys, Values};

pub use hashbrown::DefaultHashBuilder;
pub use indexmap::IndexMap;

mod error;
pub mod indexed;
pub mod pick;
pub mod required_map;
pub mod transform;

pub use error::Error;
pub use indexed::{indexed_entries, Entry, IndexedEntry};
pub use pick::{pick_lenient, pick_strict, pick_strict_many, pick_strict_one, PickKeys, Selector};
pub use required_map::{required, RequiredMap};
pub use transform::{filter, find, find_index, map, Transform};

/// A key-unique, insertion-ordered map.
///
/// The default hasher works without `std`.
pub type Mapping<K, V, S = DefaultHashBuilder> = IndexMap<K, V, S>;

mod sealed {
	use indexmap::IndexMap;

	pub trait Sealed {}
	impl<K, V, S> Sealed for IndexMap<K, V, S> {}
}

/// Iterates over the keys of `map`, in order.
pub fn keys<K, V, S>(map: &IndexMap<K, V, S>) -> Keys<'_, K, V> {
	map.keys()
}

/// Iterates over the values of `map`, in order.
pub fn values<K, V, S>(map: &IndexMap<K, V, S>) -> Values<'_, K, V> {
	map.values()
}

/// Iterates over the entries of `map`, in order.
pub fn entries<K, V, S>(map: &IndexMap<K, V, S>) -> Iter<'_, K, V> {
	map.iter()
}

/// Collects `entries` into a new map.
///
/// If a key repeats, its last value wins. The key keeps the position of its first occurrence.
pub fn from_entries<K, V, S, I>(entries: I) -> IndexMap<K, V, S>
where
	K: Hash + Eq,
	S: BuildHasher + Default,
	I: IntoIterator<Item = (K, V)>,
{
	entries.into_iter().collect()
}
