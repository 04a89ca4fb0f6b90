// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use super::{DirectoryLayer, Namespace, NamespaceShape};
use crate::{
	Result, StoreTransaction,
	key::{DirectoryKey, EncodableKey},
};

impl DirectoryLayer {
	/// Names of the direct children of `namespace`, in key order.
	#[instrument(name = "store::directory::list", level = "trace", skip(txn, namespace), fields(path = %namespace.path()))]
	pub fn list(txn: &mut impl StoreTransaction, namespace: &Namespace) -> Result<Vec<String>> {
		txn.range(DirectoryKey::full_scan(namespace.id()))?
			.iter()
			.map(|entry| Ok(DirectoryKey::decode(&entry.key)?.name))
			.collect()
	}

	pub fn shape(txn: &mut impl StoreTransaction, namespace: &Namespace) -> Result<NamespaceShape> {
		let children = Self::list(txn, namespace)?;
		Ok(if children.is_empty() {
			NamespaceShape::Leaf
		} else {
			NamespaceShape::Branch(children)
		})
	}
}
