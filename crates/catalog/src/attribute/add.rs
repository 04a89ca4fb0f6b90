// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::{NamespaceStore, StoreTransaction};
use tracing::{debug, instrument};

use super::{AttributeType, layout};
use crate::{Catalog, CatalogError, StatusCode};

impl<S: NamespaceStore> Catalog<S> {
	/// Adds a non primary-key attribute. The existence check and the write share a transaction.
	#[instrument(name = "catalog::attribute::add", level = "debug", skip(self))]
	pub fn add_attribute(&self, table: &str, attribute: &str, ty: AttributeType) -> StatusCode {
		StatusCode::from_result(self.store.run(|txn| -> crate::Result<()> {
			let namespace = self.open_table(txn, table)?;
			let key = layout::key(&namespace, attribute);
			if txn.contains_key(&key)? {
				return Err(CatalogError::AttributeAlreadyExists {
					table: table.to_string(),
					attribute: attribute.to_string(),
				});
			}

			txn.set(&key, layout::values(ty, false))?;
			debug!("added attribute");
			Ok(())
		}))
	}
}
