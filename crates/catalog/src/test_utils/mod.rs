// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::{MemoryStore, NamespaceStore};

use crate::{AttributeType, Catalog, StatusCode, TableToCreate};

pub fn create_test_catalog() -> Catalog<MemoryStore> {
	Catalog::open(MemoryStore::new()).unwrap()
}

/// `Users(id INT primary key, name VARCHAR)`.
pub fn create_users_table<S: NamespaceStore>(catalog: &Catalog<S>) -> StatusCode {
	catalog.create_table(TableToCreate::new(
		"Users",
		[("id", AttributeType::Int), ("name", AttributeType::Varchar)],
		["id"],
	))
}
