// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Storage layout of an attribute inside its table namespace:
//! `keycode(name) => keycode(type_tag, is_primary_key)`.

use tabula_core::{
	EncodedKey, EncodedValues,
	encoding::keycode::{KeyDeserializer, KeySerializer},
};
use tabula_store::{Namespace, StoreEntry};

use super::{Attribute, AttributeType};
use crate::CatalogError;

pub(crate) fn key(table: &Namespace, attribute: &str) -> EncodedKey {
	let mut serializer = KeySerializer::with_capacity(attribute.len() + 2);
	serializer.extend_str(attribute);
	table.pack(serializer.finish())
}

pub(crate) fn values(ty: AttributeType, primary_key: bool) -> EncodedValues {
	let mut serializer = KeySerializer::with_capacity(ty.tag().len() + 3);
	serializer.extend_str(ty.tag()).extend_bool(primary_key);
	serializer.to_encoded_values()
}

pub(crate) fn decode(table: &Namespace, entry: &StoreEntry) -> crate::Result<Attribute> {
	let corrupted = |reason: String| CatalogError::Corrupted {
		table: table.name().to_string(),
		reason,
	};

	let raw = table
		.unpack(&entry.key)
		.ok_or_else(|| corrupted(format!("key {:?} outside the table namespace", entry.key)))?;
	let mut de = KeyDeserializer::from_bytes(raw);
	let name = de.read_str().map_err(|err| corrupted(format!("attribute key: {err}")))?;
	de.finish().map_err(|err| corrupted(format!("attribute key: {err}")))?;

	let mut de = KeyDeserializer::from_bytes(entry.values.as_slice());
	let tag = de.read_str().map_err(|err| corrupted(format!("attribute '{name}': {err}")))?;
	let ty = AttributeType::from_tag(&tag)
		.ok_or_else(|| corrupted(format!("attribute '{name}' has unknown type tag '{tag}'")))?;
	let primary_key = de.read_bool().map_err(|err| corrupted(format!("attribute '{name}': {err}")))?;
	de.finish().map_err(|err| corrupted(format!("attribute '{name}': {err}")))?;

	Ok(Attribute {
		name,
		ty,
		primary_key,
	})
}

#[cfg(test)]
mod tests {
	use tabula_core::EncodedValues;
	use tabula_store::{DirectoryLayer, MemoryStore, NamespacePath, NamespaceStore, StoreEntry};

	use super::{decode, key, values};
	use crate::{AttributeType, CatalogError};

	#[test]
	fn test_decode_written_entry() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		let table = DirectoryLayer::create(&mut txn, &NamespacePath::from("Manager/Users")).unwrap();

		let entry = StoreEntry {
			key: key(&table, "id"),
			values: values(AttributeType::Int, true),
		};
		let attribute = decode(&table, &entry).unwrap();
		assert_eq!(attribute.name, "id");
		assert_eq!(attribute.ty, AttributeType::Int);
		assert!(attribute.primary_key);
	}

	#[test]
	fn test_decode_unknown_tag() {
		let store = MemoryStore::new();
		let mut txn = store.begin().unwrap();
		let table = DirectoryLayer::create(&mut txn, &NamespacePath::from("Manager/Users")).unwrap();

		let entry = StoreEntry {
			key: key(&table, "id"),
			values: EncodedValues::new(b"FLOAT\0\0\x01".to_vec()),
		};
		let err = decode(&table, &entry).unwrap_err();
		assert!(matches!(err, CatalogError::Corrupted { table, .. } if table == "Users"));
	}
}
