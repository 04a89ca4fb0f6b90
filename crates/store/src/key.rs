// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Physical key layout. Every key starts with a format version byte and a kind byte, so each kind
//! occupies its own contiguous slice of the key space.

use tabula_core::{
	EncodedKey, EncodedKeyRange, NamespaceId,
	encoding::keycode::{KeyDeserializer, KeySerializer},
};

use crate::Result;

pub const VERSION: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum KeyKind {
	Sequence = 0x01,
	Directory = 0x02,
	Entry = 0x03,
}

pub trait EncodableKey {
	const KIND: KeyKind;

	fn encode(&self) -> EncodedKey;

	fn decode(key: &EncodedKey) -> Result<Self>
	where
		Self: Sized;
}

fn serializer(kind: KeyKind, capacity: usize) -> KeySerializer {
	let mut serializer = KeySerializer::with_capacity(capacity + 2);
	serializer.extend_u8(VERSION).extend_u8(kind as u8);
	serializer
}

fn deserializer(key: &EncodedKey) -> Result<KeyDeserializer<'_>> {
	let mut de = KeyDeserializer::from_bytes(key.as_slice());
	de.read_u8()?;
	de.read_u8()?;
	Ok(de)
}

/// Holds the last namespace id handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceKey;

impl EncodableKey for SequenceKey {
	const KIND: KeyKind = KeyKind::Sequence;

	fn encode(&self) -> EncodedKey {
		serializer(Self::KIND, 0).to_encoded_key()
	}

	fn decode(key: &EncodedKey) -> Result<Self> {
		deserializer(key)?.finish()?;
		Ok(Self)
	}
}

/// Links a child name under `parent` to the child's namespace id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryKey {
	pub parent: NamespaceId,
	pub name: String,
}

impl DirectoryKey {
	pub fn encoded(parent: impl Into<NamespaceId>, name: impl Into<String>) -> EncodedKey {
		Self {
			parent: parent.into(),
			name: name.into(),
		}
		.encode()
	}

	/// All child links of `parent`, ordered by name.
	pub fn full_scan(parent: NamespaceId) -> EncodedKeyRange {
		let mut serializer = serializer(KeyKind::Directory, 8);
		serializer.extend_u64(parent);
		EncodedKeyRange::prefix(&serializer.finish())
	}
}

impl EncodableKey for DirectoryKey {
	const KIND: KeyKind = KeyKind::Directory;

	fn encode(&self) -> EncodedKey {
		let mut serializer = serializer(Self::KIND, 8 + self.name.len() + 2);
		serializer.extend_u64(self.parent).extend_str(&self.name);
		serializer.to_encoded_key()
	}

	fn decode(key: &EncodedKey) -> Result<Self> {
		let mut de = deserializer(key)?;
		let parent = NamespaceId(de.read_u64()?);
		let name = de.read_str()?;
		de.finish()?;
		Ok(Self {
			parent,
			name,
		})
	}
}

/// A user key stored inside a namespace. The user key is appended unescaped, so it must stay the
/// last component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryKey {
	pub namespace: NamespaceId,
	pub key: Vec<u8>,
}

impl EntryKey {
	pub fn prefix(namespace: NamespaceId) -> Vec<u8> {
		let mut serializer = serializer(KeyKind::Entry, 8);
		serializer.extend_u64(namespace);
		serializer.finish()
	}

	/// Every entry of `namespace`.
	pub fn full_scan(namespace: NamespaceId) -> EncodedKeyRange {
		EncodedKeyRange::prefix(&Self::prefix(namespace))
	}
}

impl EncodableKey for EntryKey {
	const KIND: KeyKind = KeyKind::Entry;

	fn encode(&self) -> EncodedKey {
		let mut serializer = serializer(Self::KIND, 8 + self.key.len());
		serializer.extend_u64(self.namespace).extend_raw(&self.key);
		serializer.to_encoded_key()
	}

	fn decode(key: &EncodedKey) -> Result<Self> {
		let mut de = deserializer(key)?;
		let namespace = NamespaceId(de.read_u64()?);
		Ok(Self {
			namespace,
			key: de.remaining().to_vec(),
		})
	}
}
