//! Position-aware traversal of insertion-ordered maps.

use core::iter::FusedIterator;
use indexmap::{map, IndexMap};

/// A borrowed key-value pair, as yielded by [`IndexMap::iter`].
pub type Entry<'a, K, V> = (&'a K, &'a V);

/// An [`Entry`] tagged with its zero-based position in the map's iteration order.
pub type IndexedEntry<'a, K, V> = (usize, Entry<'a, K, V>);

/// An [`Enumerate`](`core::iter::Enumerate`) re-implementation that also counts correctly from the back.
///
/// Items taken through [`DoubleEndedIterator::next_back`] are paired with their actual position in the
/// underlying sequence rather than with the next free front counter, which is why that direction requires
/// an [`ExactSizeIterator`].
///
/// [`Indexed`] never buffers. Positions are assigned as items are pulled.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Indexed<I> {
	iter: I,
	front: usize,
}

/// Adds [`.indexed()`](`IndexedExt::indexed`) to all iterators.
#[allow(clippy::module_name_repetitions)]
pub trait IndexedExt: Sized + Iterator {
	/// Pairs each item with its position, starting at `0`.
	fn indexed(self) -> Indexed<Self> {
		Indexed {
			iter: self,
			front: 0,
		}
	}
}
impl<I: Iterator> IndexedExt for I {}

/// Lazily traverses `map` in insertion order, yielding each entry together with its position.
///
/// Calling this again restarts the traversal. The map itself is never modified.
pub fn indexed_entries<K, V, S>(map: &IndexMap<K, V, S>) -> Indexed<map::Iter<'_, K, V>> {
	map.iter().indexed()
}

impl<I: Iterator> Iterator for Indexed<I> {
	type Item = (usize, I::Item);

	fn next(&mut self) -> Option<Self::Item> {
		let item = self.iter.next()?;
		let index = self.front;
		self.front += 1;
		Some((index, item))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<I: DoubleEndedIterator + ExactSizeIterator> DoubleEndedIterator for Indexed<I> {
	fn next_back(&mut self) -> Option<Self::Item> {
		let item = self.iter.next_back()?;
		Some((self.front + self.iter.len(), item))
	}
}

impl<I: ExactSizeIterator> ExactSizeIterator for Indexed<I> {}

impl<I: FusedIterator> FusedIterator for Indexed<I> {}
