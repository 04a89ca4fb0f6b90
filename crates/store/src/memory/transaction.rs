// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeMap, mem, sync::Arc};

use tabula_core::{CommitVersion, EncodedKey, EncodedKeyRange, EncodedValues, util::hex};
use tracing::{debug, instrument, trace};

use super::{MemoryStoreInner, State, conflict::ConflictManager};
use crate::{Result, StoreEntry, StoreError, StoreTransaction};

pub struct MemoryTransaction {
	inner: Arc<MemoryStoreInner>,
	version: CommitVersion,
	pending: BTreeMap<EncodedKey, Option<EncodedValues>>,
	conflicts: ConflictManager,
	done: bool,
}

impl MemoryTransaction {
	pub(crate) fn new(inner: Arc<MemoryStoreInner>, version: CommitVersion) -> Self {
		Self {
			inner,
			version,
			pending: BTreeMap::new(),
			conflicts: ConflictManager::new(),
			done: false,
		}
	}

	/// Number of buffered writes, removals included.
	pub fn pending_len(&self) -> usize {
		self.pending.len()
	}

	/// Releases this transaction's snapshot. Safe to call more than once.
	fn finish(&mut self) {
		if !self.done {
			self.done = true;
			self.inner.watermark.lock().done(self.version);
		}
	}
}

impl Drop for MemoryTransaction {
	fn drop(&mut self) {
		self.finish();
	}
}

impl StoreTransaction for MemoryTransaction {
	fn version(&self) -> CommitVersion {
		self.version
	}

	#[instrument(name = "store::memory::get", level = "trace", skip(self, key), fields(key_hex = %hex::encode(key)))]
	fn get(&mut self, key: &EncodedKey) -> Result<Option<EncodedValues>> {
		if let Some(pending) = self.pending.get(key) {
			return Ok(pending.clone());
		}

		self.conflicts.mark_read(key);
		let state = self.inner.state.read();
		Ok(state.data.get(key).and_then(|versions| State::visible(versions, self.version)).cloned())
	}

	#[instrument(name = "store::memory::set", level = "trace", skip(self, key, values), fields(key_hex = %hex::encode(key)))]
	fn set(&mut self, key: &EncodedKey, values: EncodedValues) -> Result<()> {
		self.pending.insert(key.clone(), Some(values));
		Ok(())
	}

	#[instrument(name = "store::memory::remove", level = "trace", skip(self, key), fields(key_hex = %hex::encode(key)))]
	fn remove(&mut self, key: &EncodedKey) -> Result<()> {
		self.pending.insert(key.clone(), None);
		Ok(())
	}

	#[instrument(name = "store::memory::range", level = "trace", skip(self, range))]
	fn range(&mut self, range: EncodedKeyRange) -> Result<Vec<StoreEntry>> {
		if !range.is_valid() {
			return Ok(Vec::new());
		}

		let bounds = (range.start.as_ref(), range.end.as_ref());
		let mut merged: BTreeMap<EncodedKey, EncodedValues> = {
			let state = self.inner.state.read();
			state.data
				.range(bounds)
				.filter_map(|(key, versions)| {
					State::visible(versions, self.version).map(|values| (key.clone(), values.clone()))
				})
				.collect()
		};

		for (key, pending) in self.pending.range(bounds) {
			match pending {
				Some(values) => {
					merged.insert(key.clone(), values.clone());
				}
				None => {
					merged.remove(key);
				}
			}
		}

		self.conflicts.mark_range(range);
		Ok(merged
			.into_iter()
			.map(|(key, values)| StoreEntry {
				key,
				values,
			})
			.collect())
	}

	#[instrument(name = "store::memory::commit", level = "debug", skip(self), fields(base = %self.version, writes = self.pending.len()))]
	fn commit(mut self) -> Result<CommitVersion> {
		// reads all came from one snapshot, nothing to validate
		if self.pending.is_empty() {
			return Ok(self.version);
		}

		let inner = self.inner.clone();
		let mut state = inner.state.write();
		if self.conflicts.has_conflict(&state.data, self.version) {
			debug!("commit rejected, read set modified after version {}", self.version);
			return Err(StoreError::Conflict);
		}

		let version = state.version.next();
		self.finish();
		let watermark = inner.watermark.lock().oldest().unwrap_or(version);

		let mut emptied = Vec::new();
		for (key, values) in mem::take(&mut self.pending) {
			let versions = state.data.entry(key.clone()).or_default();
			versions.push((version, values));
			State::prune(versions, watermark);
			if versions.is_empty() {
				emptied.push(key);
			}
		}
		for key in &emptied {
			state.data.remove(key);
		}
		state.version = version;

		trace!(%version, %watermark, pruned = emptied.len(), "committed");
		Ok(version)
	}

	#[instrument(name = "store::memory::rollback", level = "trace", skip(self), fields(writes = self.pending.len()))]
	fn rollback(self) {}
}

#[cfg(test)]
mod tests {
	use tabula_core::{EncodedKey, EncodedKeyRange, EncodedValues};

	use crate::{MemoryStore, NamespaceStore, StoreError, StoreTransaction};

	fn key(bytes: &[u8]) -> EncodedKey {
		EncodedKey::new(bytes)
	}

	fn value(byte: u8) -> EncodedValues {
		EncodedValues::new(vec![byte])
	}

	#[test]
	fn test_read_own_writes() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		txn.set(&key(b"a"), value(1)).unwrap();
		assert_eq!(txn.get(&key(b"a")).unwrap(), Some(value(1)));

		txn.remove(&key(b"a")).unwrap();
		assert_eq!(txn.get(&key(b"a")).unwrap(), None);
		assert!(!txn.contains_key(&key(b"a")).unwrap());
	}

	#[test]
	fn test_uncommitted_writes_are_invisible() {
		let store = MemoryStore::new();
		let mut writer = store.begin().unwrap();
		writer.set(&key(b"a"), value(1)).unwrap();

		let mut reader = store.begin().unwrap();
		assert_eq!(reader.get(&key(b"a")).unwrap(), None);

		writer.commit().unwrap();
		assert_eq!(store.begin().unwrap().get(&key(b"a")).unwrap(), Some(value(1)));
	}

	#[test]
	fn test_snapshot_reads() {
		let store = MemoryStore::new();
		let mut reader = store.begin().unwrap();

		let mut writer = store.begin().unwrap();
		writer.set(&key(b"a"), value(1)).unwrap();
		writer.commit().unwrap();

		assert_eq!(reader.get(&key(b"a")).unwrap(), None);
		assert!(reader.range(EncodedKeyRange::all()).unwrap().is_empty());
		reader.commit().unwrap();
	}

	#[test]
	fn test_range_merges_pending() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		txn.set(&key(b"a"), value(1)).unwrap();
		txn.set(&key(b"b"), value(2)).unwrap();
		txn.commit().unwrap();

		let mut txn = store.begin().unwrap();
		txn.remove(&key(b"a")).unwrap();
		txn.set(&key(b"c"), value(3)).unwrap();

		let keys: Vec<_> = txn.range(EncodedKeyRange::all()).unwrap().into_iter().map(|e| e.key).collect();
		assert_eq!(keys, vec![key(b"b"), key(b"c")]);
	}

	#[test]
	fn test_remove_range() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		txn.set(&key(b"pa"), value(1)).unwrap();
		txn.set(&key(b"pb"), value(2)).unwrap();
		txn.set(&key(b"q"), value(3)).unwrap();
		txn.commit().unwrap();

		let mut txn = store.begin().unwrap();
		txn.remove_range(EncodedKeyRange::prefix(b"p")).unwrap();
		txn.commit().unwrap();

		let entries = store.begin().unwrap().range(EncodedKeyRange::all()).unwrap();
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].key, key(b"q"));
	}

	#[test]
	fn test_rollback_discards_writes() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		txn.set(&key(b"a"), value(1)).unwrap();
		txn.rollback();

		assert_eq!(store.begin().unwrap().get(&key(b"a")).unwrap(), None);
		assert_eq!(store.version().0, 0);
	}

	#[test]
	fn test_write_after_read_conflicts() {
		let store = MemoryStore::new();
		let mut first = store.begin().unwrap();
		let mut second = store.begin().unwrap();

		assert_eq!(first.get(&key(b"a")).unwrap(), None);
		first.set(&key(b"a"), value(1)).unwrap();
		assert_eq!(second.get(&key(b"a")).unwrap(), None);
		second.set(&key(b"a"), value(2)).unwrap();

		first.commit().unwrap();
		assert!(matches!(second.commit(), Err(StoreError::Conflict)));
		assert_eq!(store.begin().unwrap().get(&key(b"a")).unwrap(), Some(value(1)));
	}

	#[test]
	fn test_range_phantom_conflicts() {
		let store = MemoryStore::new();
		let mut scanner = store.begin().unwrap();
		let mut inserter = store.begin().unwrap();

		assert!(scanner.range(EncodedKeyRange::prefix(b"t")).unwrap().is_empty());
		scanner.set(&key(b"summary"), value(0)).unwrap();

		inserter.set(&key(b"t1"), value(1)).unwrap();
		inserter.commit().unwrap();

		assert!(matches!(scanner.commit(), Err(StoreError::Conflict)));
	}

	#[test]
	fn test_superseded_versions_are_pruned() {
		let store = MemoryStore::new();
		for byte in 1..=3 {
			let mut txn = store.begin().unwrap();
			txn.set(&key(b"a"), value(byte)).unwrap();
			txn.commit().unwrap();
		}

		let state = store.inner.state.read();
		assert_eq!(state.data[&key(b"a")].len(), 1);
	}

	#[test]
	fn test_removed_keys_are_pruned() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		txn.set(&key(b"a"), value(1)).unwrap();
		txn.commit().unwrap();

		let mut txn = store.begin().unwrap();
		txn.remove(&key(b"a")).unwrap();
		txn.commit().unwrap();

		assert!(store.inner.state.read().data.is_empty());
	}

	#[test]
	fn test_open_snapshot_keeps_history() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		txn.set(&key(b"a"), value(1)).unwrap();
		txn.commit().unwrap();

		let mut reader = store.begin().unwrap();
		for byte in 2..=3 {
			let mut txn = store.begin().unwrap();
			txn.set(&key(b"a"), value(byte)).unwrap();
			txn.commit().unwrap();
		}
		assert_eq!(store.inner.state.read().data[&key(b"a")].len(), 3);
		assert_eq!(reader.get(&key(b"a")).unwrap(), Some(value(1)));
		drop(reader);

		let mut txn = store.begin().unwrap();
		txn.set(&key(b"a"), value(4)).unwrap();
		txn.commit().unwrap();
		assert_eq!(store.inner.state.read().data[&key(b"a")].len(), 1);
		assert_eq!(store.begin().unwrap().get(&key(b"a")).unwrap(), Some(value(4)));
	}

	#[test]
	fn test_disjoint_writers_commit() {
		let store = MemoryStore::new();
		let mut first = store.begin().unwrap();
		let mut second = store.begin().unwrap();

		first.get(&key(b"a")).unwrap();
		first.set(&key(b"a"), value(1)).unwrap();
		second.get(&key(b"b")).unwrap();
		second.set(&key(b"b"), value(2)).unwrap();

		assert_eq!(first.commit().unwrap().0, 1);
		assert_eq!(second.commit().unwrap().0, 2);
	}
}
