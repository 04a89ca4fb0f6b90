// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::{DirectoryLayer, Namespace, NamespacePath, NamespaceStore, StoreError};
use tracing::{debug, instrument};

use crate::{CatalogConfig, CatalogError};

/// Table metadata catalog over a [`NamespaceStore`].
///
/// Every table is a namespace directly below the catalog root, and every attribute one entry inside
/// its table's namespace. The catalog keeps no state besides the store handle and the opened root,
/// so every read goes to the store.
pub struct Catalog<S: NamespaceStore> {
	pub(crate) store: S,
	pub(crate) root: Namespace,
	config: CatalogConfig,
}

impl<S: NamespaceStore> Catalog<S> {
	/// Opens the catalog under the default root, creating the root namespace if missing.
	pub fn open(store: S) -> crate::Result<Self> {
		Self::new(store, CatalogConfig::default())
	}

	#[instrument(name = "catalog::open", level = "debug", skip(store, config), fields(root = %config.root))]
	pub fn new(store: S, config: CatalogConfig) -> crate::Result<Self> {
		let path = NamespacePath::parse(&config.root);
		let root = store.run(|txn| -> crate::Result<Namespace> {
			Ok(DirectoryLayer::create_or_open(txn, &path)?)
		})?;
		debug!(id = %root.id(), path = %root.path(), "opened catalog root");

		Ok(Self {
			store,
			root,
			config,
		})
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	/// The namespace holding all tables.
	pub fn root(&self) -> &Namespace {
		&self.root
	}

	pub fn config(&self) -> &CatalogConfig {
		&self.config
	}

	pub(crate) fn open_table(&self, txn: &mut S::Transaction, name: &str) -> crate::Result<Namespace> {
		DirectoryLayer::find_child(txn, &self.root, name)?.ok_or_else(|| CatalogError::TableNotFound {
			name: name.to_string(),
		})
	}
}

pub(crate) fn table_not_found(name: &str) -> impl FnOnce(StoreError) -> CatalogError + '_ {
	move |err| match err {
		StoreError::NamespaceNotFound {
			..
		} => CatalogError::TableNotFound {
			name: name.to_string(),
		},
		err => err.into(),
	}
}
