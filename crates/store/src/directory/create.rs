// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_core::encoding::keycode::KeySerializer;
use tracing::{debug, instrument};

use super::{DirectoryLayer, Namespace, NamespacePath};
use crate::{Result, StoreError, StoreTransaction, key::DirectoryKey, sequence::NamespaceSequence};

impl DirectoryLayer {
	/// Creates the namespace at `path`, creating missing parents on the way. Fails when the
	/// namespace itself already exists.
	#[instrument(name = "store::directory::create", level = "debug", skip(txn, path), fields(path = %path))]
	pub fn create(txn: &mut impl StoreTransaction, path: &NamespacePath) -> Result<Namespace> {
		let Some((parent_path, name)) = path.split_last() else {
			return Err(StoreError::NamespaceAlreadyExists {
				path: path.clone(),
			});
		};

		let parent = Self::create_or_open(txn, &parent_path)?;
		Self::create_child(txn, &parent, name)
	}

	/// Creates `name` directly below an already resolved `parent`. Fails when the child already
	/// exists.
	pub fn create_child(txn: &mut impl StoreTransaction, parent: &Namespace, name: &str) -> Result<Namespace> {
		if Self::find_child(txn, parent, name)?.is_some() {
			return Err(StoreError::NamespaceAlreadyExists {
				path: parent.path().child(name),
			});
		}
		Self::allocate_child(txn, parent, name)
	}

	#[instrument(name = "store::directory::create_or_open", level = "debug", skip(txn, path), fields(path = %path))]
	pub fn create_or_open(txn: &mut impl StoreTransaction, path: &NamespacePath) -> Result<Namespace> {
		let mut current = Self::root();
		for component in path.components() {
			current = match Self::find_child(txn, &current, component)? {
				Some(child) => child,
				None => Self::allocate_child(txn, &current, component)?,
			};
		}
		Ok(current)
	}

	fn allocate_child(txn: &mut impl StoreTransaction, parent: &Namespace, name: &str) -> Result<Namespace> {
		let id = NamespaceSequence::next(txn)?;

		let mut link = KeySerializer::with_capacity(8);
		link.extend_u64(id);
		txn.set(&DirectoryKey::encoded(parent.id(), name), link.to_encoded_values())?;

		let namespace = Namespace::new(id, parent.path().child(name));
		debug!(id = %id, path = %namespace.path(), "created namespace");
		Ok(namespace)
	}
}
