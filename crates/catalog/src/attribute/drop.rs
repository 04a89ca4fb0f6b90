// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::{NamespaceStore, StoreTransaction};
use tracing::{debug, instrument};

use super::layout;
use crate::{Catalog, CatalogError, StatusCode};

impl<S: NamespaceStore> Catalog<S> {
	/// Removes an attribute. Primary-key attributes may be dropped too, including the last one.
	#[instrument(name = "catalog::attribute::drop", level = "debug", skip(self))]
	pub fn drop_attribute(&self, table: &str, attribute: &str) -> StatusCode {
		StatusCode::from_result(self.store.run(|txn| -> crate::Result<()> {
			let namespace = self.open_table(txn, table)?;
			let key = layout::key(&namespace, attribute);
			if !txn.contains_key(&key)? {
				return Err(CatalogError::AttributeNotFound {
					table: table.to_string(),
					attribute: attribute.to_string(),
				});
			}

			txn.remove(&key)?;
			debug!("dropped attribute");
			Ok(())
		}))
	}
}
