// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_core::{EncodedKey, EncodedKeyRange, NamespaceId};

use super::NamespacePath;
use crate::key::{EncodableKey, EntryKey};

/// An opened namespace: the id that prefixes its keys plus the path it was opened by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
	id: NamespaceId,
	path: NamespacePath,
}

impl Namespace {
	pub(crate) fn new(id: NamespaceId, path: NamespacePath) -> Self {
		Self {
			id,
			path,
		}
	}

	pub fn id(&self) -> NamespaceId {
		self.id
	}

	pub fn path(&self) -> &NamespacePath {
		&self.path
	}

	/// Last path component, empty for the root.
	pub fn name(&self) -> &str {
		self.path.components().last().map(String::as_str).unwrap_or("")
	}

	/// Physical key of `key` inside this namespace.
	pub fn pack(&self, key: impl AsRef<[u8]>) -> EncodedKey {
		EntryKey {
			namespace: self.id,
			key: key.as_ref().to_vec(),
		}
		.encode()
	}

	/// Inverse of [`Namespace::pack`]; `None` when `key` belongs elsewhere.
	pub fn unpack<'a>(&self, key: &'a EncodedKey) -> Option<&'a [u8]> {
		key.as_slice().strip_prefix(EntryKey::prefix(self.id).as_slice())
	}

	/// Every key stored directly in this namespace. Child namespaces are not part of it.
	pub fn range(&self) -> EncodedKeyRange {
		EntryKey::full_scan(self.id)
	}
}
