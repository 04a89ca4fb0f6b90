// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_core::{CommitVersion, EncodedKey, EncodedKeyRange, EncodedValues};

use crate::{Result, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
	pub key: EncodedKey,
	pub values: EncodedValues,
}

/// A store that hands out optimistic transactions over one ordered key space.
pub trait NamespaceStore: Send + Sync + 'static {
	type Transaction: StoreTransaction;

	fn begin(&self) -> Result<Self::Transaction>;

	/// Runs `f` in a fresh transaction. The transaction commits when `f` returns `Ok` and is
	/// rolled back otherwise; a failed commit surfaces as the error.
	fn run<T, E, F>(&self, f: F) -> std::result::Result<T, E>
	where
		E: From<StoreError>,
		F: FnOnce(&mut Self::Transaction) -> std::result::Result<T, E>,
	{
		let mut txn = self.begin()?;
		match f(&mut txn) {
			Ok(value) => {
				txn.commit()?;
				Ok(value)
			}
			Err(err) => {
				txn.rollback();
				Err(err)
			}
		}
	}
}

/// Reads observe a snapshot taken at `begin` plus this transaction's own writes. Nothing becomes
/// visible to others before `commit`.
pub trait StoreTransaction {
	/// Snapshot version the transaction reads at.
	fn version(&self) -> CommitVersion;

	fn get(&mut self, key: &EncodedKey) -> Result<Option<EncodedValues>>;

	fn contains_key(&mut self, key: &EncodedKey) -> Result<bool> {
		Ok(self.get(key)?.is_some())
	}

	fn set(&mut self, key: &EncodedKey, values: EncodedValues) -> Result<()>;

	fn remove(&mut self, key: &EncodedKey) -> Result<()>;

	/// Entries in `range`, in key order.
	fn range(&mut self, range: EncodedKeyRange) -> Result<Vec<StoreEntry>>;

	fn remove_range(&mut self, range: EncodedKeyRange) -> Result<()> {
		for entry in self.range(range)? {
			self.remove(&entry.key)?;
		}
		Ok(())
	}

	fn commit(self) -> Result<CommitVersion>;

	fn rollback(self);
}
