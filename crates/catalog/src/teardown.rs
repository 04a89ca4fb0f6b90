// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::{DirectoryLayer, Namespace, NamespaceShape, NamespaceStore, StoreTransaction};
use tracing::{debug, instrument, trace};

use crate::{Catalog, StatusCode};

impl<S: NamespaceStore> Catalog<S> {
	/// Removes every table, and anything else nested below the catalog root, in one transaction.
	/// The root namespace itself stays.
	#[instrument(name = "catalog::table::drop_all", level = "debug", skip(self))]
	pub fn drop_all_tables(&self) -> StatusCode {
		StatusCode::from_result(self.store.run(|txn| -> crate::Result<()> {
			let removed = remove_subspaces(txn, &self.root)?;
			debug!(removed, "dropped all tables");
			Ok(())
		}))
	}
}

/// Post-order teardown of everything below `namespace`: each child is emptied recursively before it
/// is unlinked from its parent, then the namespace's own entries are cleared. Returns how many
/// namespaces were unlinked.
pub(crate) fn remove_subspaces(
	txn: &mut impl StoreTransaction,
	namespace: &Namespace,
) -> tabula_store::Result<usize> {
	let mut removed = 0;
	if let NamespaceShape::Branch(children) = DirectoryLayer::shape(txn, namespace)? {
		for name in children {
			let child = DirectoryLayer::open_child(txn, namespace, &name)?;
			removed += remove_subspaces(txn, &child)?;
			DirectoryLayer::unlink_child(txn, namespace, &name)?;
			trace!(path = %child.path(), "removed subspace");
			removed += 1;
		}
	}
	txn.remove_range(namespace.range())?;
	Ok(removed)
}
