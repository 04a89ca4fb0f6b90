// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use super::{DirectoryLayer, Namespace, NamespacePath};
use crate::{Result, StoreError, StoreTransaction, key::DirectoryKey};

impl DirectoryLayer {
	pub fn find_child(txn: &mut impl StoreTransaction, parent: &Namespace, name: &str) -> Result<Option<Namespace>> {
		let key = DirectoryKey::encoded(parent.id(), name);
		let Some(values) = txn.get(&key)? else {
			return Ok(None);
		};

		let id = Self::decode_link(&values)?;
		Ok(Some(Namespace::new(id, parent.path().child(name))))
	}

	pub fn open_child(txn: &mut impl StoreTransaction, parent: &Namespace, name: &str) -> Result<Namespace> {
		Self::find_child(txn, parent, name)?.ok_or_else(|| StoreError::NamespaceNotFound {
			path: parent.path().child(name),
		})
	}

	#[instrument(name = "store::directory::find", level = "trace", skip(txn, path), fields(path = %path))]
	pub fn find(txn: &mut impl StoreTransaction, path: &NamespacePath) -> Result<Option<Namespace>> {
		let mut current = Self::root();
		for component in path.components() {
			match Self::find_child(txn, &current, component)? {
				Some(child) => current = child,
				None => return Ok(None),
			}
		}
		Ok(Some(current))
	}

	pub fn open(txn: &mut impl StoreTransaction, path: &NamespacePath) -> Result<Namespace> {
		Self::find(txn, path)?.ok_or_else(|| StoreError::NamespaceNotFound {
			path: path.clone(),
		})
	}

	pub fn exists(txn: &mut impl StoreTransaction, path: &NamespacePath) -> Result<bool> {
		Ok(Self::find(txn, path)?.is_some())
	}
}
