// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::{BTreeMap, BTreeSet};

use tabula_core::{CommitVersion, EncodedKey, EncodedKeyRange};

use super::{State, Versions};

/// Read set of an optimistic transaction.
#[derive(Debug, Default)]
pub(crate) struct ConflictManager {
	reads: BTreeSet<EncodedKey>,
	ranges: Vec<EncodedKeyRange>,
}

impl ConflictManager {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn mark_read(&mut self, key: &EncodedKey) {
		self.reads.insert(key.clone());
	}

	pub(crate) fn mark_range(&mut self, range: EncodedKeyRange) {
		self.ranges.push(range);
	}

	/// Whether anything read since `base` was overwritten by a later commit.
	pub(crate) fn has_conflict(&self, data: &BTreeMap<EncodedKey, Versions>, base: CommitVersion) -> bool {
		let read_conflict = self
			.reads
			.iter()
			.any(|key| data.get(key).is_some_and(|versions| State::modified_after(versions, base)));
		if read_conflict {
			return true;
		}

		self.ranges.iter().filter(|range| range.is_valid()).any(|range| {
			data.range((range.start.as_ref(), range.end.as_ref()))
				.any(|(_, versions)| State::modified_after(versions, base))
		})
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use tabula_core::{CommitVersion, EncodedKey, EncodedKeyRange, EncodedValues};

	use super::ConflictManager;

	fn data(entries: Vec<(Vec<u8>, u64)>) -> BTreeMap<EncodedKey, super::Versions> {
		entries.into_iter()
			.map(|(key, version)| {
				(EncodedKey::new(key), vec![(CommitVersion(version), Some(EncodedValues::new(vec![1])))])
			})
			.collect()
	}

	#[test]
	fn test_point_read() {
		let mut conflicts = ConflictManager::new();
		conflicts.mark_read(&EncodedKey::new([0x01]));

		assert!(!conflicts.has_conflict(&data(vec![(vec![0x01], 1)]), CommitVersion(1)));
		assert!(conflicts.has_conflict(&data(vec![(vec![0x01], 2)]), CommitVersion(1)));
		assert!(!conflicts.has_conflict(&data(vec![(vec![0x02], 2)]), CommitVersion(1)));
	}

	#[test]
	fn test_range_read() {
		let mut conflicts = ConflictManager::new();
		conflicts.mark_range(EncodedKeyRange::prefix(&[0x01]));

		assert!(conflicts.has_conflict(&data(vec![(vec![0x01, 0x09], 3)]), CommitVersion(2)));
		assert!(!conflicts.has_conflict(&data(vec![(vec![0x02], 3)]), CommitVersion(2)));
	}

	#[test]
	fn test_empty_read_set() {
		let conflicts = ConflictManager::new();
		assert!(!conflicts.has_conflict(&data(vec![(vec![0x01], 9)]), CommitVersion(1)));
	}
}
