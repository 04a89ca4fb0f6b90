// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Bound, RangeBounds};

use super::EncodedKey;

/// A range of encoded keys with arbitrary bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyRange {
	pub start: Bound<EncodedKey>,
	pub end: Bound<EncodedKey>,
}

impl EncodedKeyRange {
	pub fn new(start: Bound<EncodedKey>, end: Bound<EncodedKey>) -> Self {
		Self {
			start,
			end,
		}
	}

	/// Half-open range `[start, end)`; `None` leaves that side unbounded.
	pub fn start_end(start: Option<EncodedKey>, end: Option<EncodedKey>) -> Self {
		Self {
			start: start.map_or(Bound::Unbounded, Bound::Included),
			end: end.map_or(Bound::Unbounded, Bound::Excluded),
		}
	}

	/// Range covering every key that starts with `prefix`.
	///
	/// The end bound is the prefix with its last non-0xff byte incremented and everything after it
	/// dropped. A prefix made only of 0xff bytes has no upper bound.
	pub fn prefix(prefix: &[u8]) -> Self {
		let start = Bound::Included(EncodedKey::new(prefix));
		let end = match prefix.iter().rposition(|b| *b != 0xff) {
			Some(i) => Bound::Excluded(EncodedKey::new(
				prefix.iter().take(i).copied().chain(std::iter::once(prefix[i] + 1)).collect::<Vec<_>>(),
			)),
			None => Bound::Unbounded,
		};
		Self {
			start,
			end,
		}
	}

	pub fn all() -> Self {
		Self {
			start: Bound::Unbounded,
			end: Bound::Unbounded,
		}
	}

	/// Whether the bounds describe a non-empty interval. Ordered maps panic on inverted bounds, so
	/// scans check this before ranging.
	pub fn is_valid(&self) -> bool {
		match (&self.start, &self.end) {
			(Bound::Unbounded, _) | (_, Bound::Unbounded) => true,
			(Bound::Included(start), Bound::Included(end)) => start <= end,
			(Bound::Included(start), Bound::Excluded(end))
			| (Bound::Excluded(start), Bound::Included(end))
			| (Bound::Excluded(start), Bound::Excluded(end)) => start < end,
		}
	}
}

impl RangeBounds<EncodedKey> for EncodedKeyRange {
	fn start_bound(&self) -> Bound<&EncodedKey> {
		self.start.as_ref()
	}

	fn end_bound(&self) -> Bound<&EncodedKey> {
		self.end.as_ref()
	}
}
