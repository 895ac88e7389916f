//! The crate's error type.
//!
//! Absence is reported through [`Option`] everywhere else. [`Error`] only covers writes that would break a guarantee.

use thiserror::Error;

/// A rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
	/// A missing value was written into a [`RequiredMap`](`crate::RequiredMap`).
	///
	/// The map is left unchanged.
	#[error("a value written into a `RequiredMap` was missing")]
	MissingValue,
}
