// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use tabula_store::{DirectoryLayer, Namespace, NamespaceStore, StoreTransaction};
use tracing::{debug, instrument};

use crate::{Catalog, TableMetadata, attribute::layout};

impl<S: NamespaceStore> Catalog<S> {
	/// All tables by name. Enumeration and every per-table scan share one transaction.
	#[instrument(name = "catalog::table::list", level = "debug", skip(self))]
	pub fn list_tables(&self) -> crate::Result<BTreeMap<String, TableMetadata>> {
		self.store.run(|txn| -> crate::Result<BTreeMap<String, TableMetadata>> {
			let mut tables = BTreeMap::new();
			for name in DirectoryLayer::list(txn, &self.root)? {
				let table = DirectoryLayer::open_child(txn, &self.root, &name)?;
				tables.insert(name, read_table(txn, &table)?);
			}
			debug!(tables = tables.len(), "listed tables");
			Ok(tables)
		})
	}

	#[instrument(name = "catalog::table::get", level = "trace", skip(self))]
	pub fn get_table(&self, name: &str) -> crate::Result<Option<TableMetadata>> {
		self.store.run(|txn| -> crate::Result<Option<TableMetadata>> {
			match DirectoryLayer::find_child(txn, &self.root, name)? {
				Some(table) => Ok(Some(read_table(txn, &table)?)),
				None => Ok(None),
			}
		})
	}

	#[instrument(name = "catalog::table::exists", level = "trace", skip(self))]
	pub fn table_exists(&self, name: &str) -> crate::Result<bool> {
		self.store.run(|txn| -> crate::Result<bool> {
			Ok(DirectoryLayer::find_child(txn, &self.root, name)?.is_some())
		})
	}
}

pub(crate) fn read_table(txn: &mut impl StoreTransaction, table: &Namespace) -> crate::Result<TableMetadata> {
	let mut metadata = TableMetadata::default();
	for entry in txn.range(table.range())? {
		metadata.push(layout::decode(table, &entry)?);
	}
	Ok(metadata)
}
