// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::{DirectoryLayer, NamespaceStore};
use tracing::{debug, instrument};

use crate::{Catalog, StatusCode, catalog::table_not_found};

impl<S: NamespaceStore> Catalog<S> {
	/// Removes a table and all of its attributes atomically.
	#[instrument(name = "catalog::table::delete", level = "debug", skip(self))]
	pub fn delete_table(&self, name: &str) -> StatusCode {
		StatusCode::from_result(self.store.run(|txn| -> crate::Result<()> {
			DirectoryLayer::remove_child(txn, &self.root, name).map_err(table_not_found(name))?;
			debug!("deleted table");
			Ok(())
		}))
	}
}
