// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::{debug, instrument};

use super::{DirectoryLayer, Namespace, NamespacePath};
use crate::{Result, StoreError, StoreTransaction, key::DirectoryKey};

impl DirectoryLayer {
	/// Removes the namespace at `path` together with its contents and every descendant.
	#[instrument(name = "store::directory::remove", level = "debug", skip(txn, path), fields(path = %path))]
	pub fn remove(txn: &mut impl StoreTransaction, path: &NamespacePath) -> Result<()> {
		let Some((parent_path, name)) = path.split_last() else {
			return Err(StoreError::InvalidPath {
				path: path.clone(),
				reason: "the root namespace cannot be removed",
			});
		};

		let parent = Self::open(txn, &parent_path)?;
		Self::remove_child(txn, &parent, name)
	}

	pub fn remove_child(txn: &mut impl StoreTransaction, parent: &Namespace, name: &str) -> Result<()> {
		let child = Self::open_child(txn, parent, name)?;
		Self::remove_contents(txn, &child)?;
		txn.remove(&DirectoryKey::encoded(parent.id(), name))?;
		debug!(id = %child.id(), path = %child.path(), "removed namespace");
		Ok(())
	}

	/// Removes only the directory link from `parent` to `name`. The child's entries and
	/// subspaces stay behind, so callers clear them first.
	pub fn unlink_child(txn: &mut impl StoreTransaction, parent: &Namespace, name: &str) -> Result<()> {
		let key = DirectoryKey::encoded(parent.id(), name);
		if txn.get(&key)?.is_none() {
			return Err(StoreError::NamespaceNotFound {
				path: parent.path().child(name),
			});
		}
		txn.remove(&key)
	}

	fn remove_contents(txn: &mut impl StoreTransaction, namespace: &Namespace) -> Result<()> {
		for name in Self::list(txn, namespace)? {
			Self::remove_child(txn, namespace, &name)?;
		}
		txn.remove_range(namespace.range())
	}
}
