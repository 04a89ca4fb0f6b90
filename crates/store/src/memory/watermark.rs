// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::{BTreeMap, btree_map::Entry};

use tabula_core::CommitVersion;

/// Snapshot versions of the transactions still open. A version counts as done once `done` was
/// called as many times as `begin`.
#[derive(Debug, Default)]
pub(crate) struct Watermark {
	active: BTreeMap<CommitVersion, usize>,
}

impl Watermark {
	pub(crate) fn begin(&mut self, version: CommitVersion) {
		*self.active.entry(version).or_default() += 1;
	}

	pub(crate) fn done(&mut self, version: CommitVersion) {
		if let Entry::Occupied(mut entry) = self.active.entry(version) {
			*entry.get_mut() -= 1;
			if *entry.get() == 0 {
				entry.remove();
			}
		}
	}

	/// Oldest snapshot any open transaction can still read at.
	pub(crate) fn oldest(&self) -> Option<CommitVersion> {
		self.active.keys().next().copied()
	}
}
