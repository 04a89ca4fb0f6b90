// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use once_cell::sync::Lazy;
use tabula_core::{
	EncodedKey, NamespaceId,
	encoding::keycode::{KeyDeserializer, KeySerializer},
};

use crate::{
	Result, StoreError, StoreTransaction,
	key::{EncodableKey, SequenceKey},
};

static KEY: Lazy<EncodedKey> = Lazy::new(|| SequenceKey.encode());

/// Allocates namespace ids. The sequence holds the last id handed out; a fresh store starts at 1
/// since 0 belongs to the root.
pub(crate) struct NamespaceSequence {}

impl NamespaceSequence {
	pub(crate) fn next(txn: &mut impl StoreTransaction) -> Result<NamespaceId> {
		let next = match txn.get(&KEY)? {
			Some(values) => {
				let mut de = KeyDeserializer::from_bytes(values.as_slice());
				let current = de.read_u64()?;
				de.finish()?;
				current.checked_add(1).ok_or(StoreError::SequenceExhausted)?
			}
			None => 1,
		};

		let mut serializer = KeySerializer::with_capacity(8);
		serializer.extend_u64(next);
		txn.set(&KEY, serializer.to_encoded_values())?;
		Ok(NamespaceId(next))
	}
}

#[cfg(test)]
mod tests {
	use super::NamespaceSequence;
	use crate::{MemoryStore, NamespaceStore, StoreTransaction};

	#[test]
	fn test_starts_at_one() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		assert_eq!(NamespaceSequence::next(&mut txn).unwrap().0, 1);
		assert_eq!(NamespaceSequence::next(&mut txn).unwrap().0, 2);
		txn.commit().unwrap();

		let mut txn = store.begin().unwrap();
		assert_eq!(NamespaceSequence::next(&mut txn).unwrap().0, 3);
	}

	#[test]
	fn test_rolled_back_ids_are_reissued() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		assert_eq!(NamespaceSequence::next(&mut txn).unwrap().0, 1);
		txn.rollback();

		let mut txn = store.begin().unwrap();
		assert_eq!(NamespaceSequence::next(&mut txn).unwrap().0, 1);
	}
}
