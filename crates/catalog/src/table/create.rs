// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use tabula_store::{DirectoryLayer, Namespace, NamespaceStore, StoreError, StoreTransaction};
use tracing::{debug, instrument};

use crate::{Catalog, CatalogError, StatusCode, TableToCreate, attribute::layout};

impl<S: NamespaceStore> Catalog<S> {
	/// Creates a table with its attributes in a single transaction. Input is validated before the
	/// store is touched, and a failed create leaves nothing behind.
	///
	/// Problems with the attribute lists (absent, unequal lengths, duplicate names) are reported
	/// as `ATTRIBUTE_INVALID` before the primary key is looked at, so `NO_PRIMARY_KEY` and
	/// `PRIMARY_KEY_NOT_FOUND` only describe otherwise well-formed input.
	#[instrument(name = "catalog::table::create", level = "debug", skip(self, to_create), fields(table = %to_create.name))]
	pub fn create_table(&self, to_create: TableToCreate) -> StatusCode {
		StatusCode::from_result(self.create(to_create))
	}

	fn create(&self, to_create: TableToCreate) -> crate::Result<()> {
		validate(&to_create)?;

		let TableToCreate {
			name,
			attributes,
			types,
			primary_key,
		} = to_create;
		let attributes = attributes.unwrap_or_default();
		let types = types.unwrap_or_default();
		let primary_key: HashSet<String> = primary_key.unwrap_or_default().into_iter().collect();

		self.store.run(|txn| -> crate::Result<()> {
			let table: Namespace = DirectoryLayer::create_child(txn, &self.root, &name).map_err(|err| match err {
				StoreError::NamespaceAlreadyExists {
					..
				} => CatalogError::TableAlreadyExists {
					name: name.clone(),
				},
				err => err.into(),
			})?;

			for (attribute, ty) in attributes.iter().zip(&types) {
				let is_primary_key = primary_key.contains(attribute);
				txn.set(&layout::key(&table, attribute), layout::values(*ty, is_primary_key))?;
			}

			debug!(id = %table.id(), attributes = attributes.len(), "created table");
			Ok(())
		})
	}
}

fn validate(to_create: &TableToCreate) -> crate::Result<()> {
	let invalid = |reason: &str| CatalogError::AttributeInvalid {
		reason: reason.to_string(),
	};

	let (Some(attributes), Some(types)) = (&to_create.attributes, &to_create.types) else {
		return Err(invalid("attribute names and types are required"));
	};
	if attributes.len() != types.len() {
		return Err(CatalogError::AttributeInvalid {
			reason: format!("{} attribute names but {} types", attributes.len(), types.len()),
		});
	}

	let mut seen = HashSet::with_capacity(attributes.len());
	for attribute in attributes {
		if !seen.insert(attribute.as_str()) {
			return Err(CatalogError::AttributeInvalid {
				reason: format!("attribute '{attribute}' is declared twice"),
			});
		}
	}

	let primary_key = match &to_create.primary_key {
		Some(primary_key) if !primary_key.is_empty() => primary_key,
		_ => {
			return Err(CatalogError::NoPrimaryKey {
				table: to_create.name.clone(),
			});
		}
	};

	if let Some(missing) = primary_key.iter().find(|name| !seen.contains(name.as_str())) {
		return Err(CatalogError::PrimaryKeyNotFound {
			table: to_create.name.clone(),
			attribute: missing.clone(),
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::{
		AttributeType, StatusCode, TableToCreate,
		test_utils::{create_test_catalog, create_users_table},
	};

	fn users() -> TableToCreate {
		TableToCreate::new("Users", [("id", AttributeType::Int), ("name", AttributeType::Varchar)], ["id"])
	}

	#[test]
	fn test_create_table() {
		let catalog = create_test_catalog();
		assert_eq!(catalog.create_table(users()), StatusCode::Success);

		let metadata = catalog.get_table("Users").unwrap().unwrap();
		assert_eq!(metadata.attribute_names, vec!["id", "name"]);
		assert_eq!(metadata.attribute_types, vec![AttributeType::Int, AttributeType::Varchar]);
		assert_eq!(metadata.primary_key, vec!["id"]);
	}

	#[test]
	fn test_composite_primary_key() {
		let catalog = create_test_catalog();
		let to_create = TableToCreate::new(
			"Orders",
			[("customer", AttributeType::Int), ("line", AttributeType::Int), ("total", AttributeType::Double)],
			["line", "customer"],
		);
		assert_eq!(catalog.create_table(to_create), StatusCode::Success);

		let metadata = catalog.get_table("Orders").unwrap().unwrap();
		assert_eq!(metadata.primary_key, vec!["customer", "line"]);
		assert!(!metadata.is_primary_key("total"));
	}

	#[test]
	fn test_missing_attributes() {
		let catalog = create_test_catalog();

		let mut to_create = users();
		to_create.attributes = None;
		assert_eq!(catalog.create_table(to_create), StatusCode::AttributeInvalid);

		let mut to_create = users();
		to_create.types = None;
		to_create.primary_key = None;
		assert_eq!(catalog.create_table(to_create), StatusCode::AttributeInvalid);

		assert!(!catalog.table_exists("Users").unwrap());
	}

	#[test]
	fn test_mismatched_or_duplicate_attributes() {
		let catalog = create_test_catalog();

		let mut to_create = users();
		to_create.types = Some(vec![AttributeType::Int]);
		assert_eq!(catalog.create_table(to_create), StatusCode::AttributeInvalid);

		let to_create = TableToCreate::new("Users", [("id", AttributeType::Int), ("id", AttributeType::Double)], ["id"]);
		assert_eq!(catalog.create_table(to_create), StatusCode::AttributeInvalid);
	}

	#[test]
	fn test_attribute_checks_precede_primary_key() {
		let catalog = create_test_catalog();

		let mut to_create = TableToCreate::new("Users", [("id", AttributeType::Int), ("id", AttributeType::Int)], ["id"]);
		to_create.primary_key = None;
		assert_eq!(catalog.create_table(to_create), StatusCode::AttributeInvalid);

		let mut to_create = users();
		to_create.types = Some(vec![AttributeType::Int]);
		to_create.primary_key = Some(vec!["email".to_string()]);
		assert_eq!(catalog.create_table(to_create), StatusCode::AttributeInvalid);
	}

	#[test]
	fn test_no_primary_key() {
		let catalog = create_test_catalog();

		let mut to_create = users();
		to_create.primary_key = None;
		assert_eq!(catalog.create_table(to_create), StatusCode::NoPrimaryKey);

		let mut to_create = users();
		to_create.primary_key = Some(vec![]);
		assert_eq!(catalog.create_table(to_create), StatusCode::NoPrimaryKey);

		assert!(catalog.list_tables().unwrap().is_empty());
	}

	#[test]
	fn test_primary_key_not_found() {
		let catalog = create_test_catalog();

		let mut to_create = users();
		to_create.primary_key = Some(vec!["id".to_string(), "email".to_string()]);
		assert_eq!(catalog.create_table(to_create), StatusCode::PrimaryKeyNotFound);
		assert!(catalog.list_tables().unwrap().is_empty());
	}

	#[test]
	fn test_table_already_exists() {
		let catalog = create_test_catalog();
		assert_eq!(create_users_table(&catalog), StatusCode::Success);

		let to_create = TableToCreate::new("Users", [("other", AttributeType::Boolean)], ["other"]);
		assert_eq!(catalog.create_table(to_create), StatusCode::TableAlreadyExists);

		let metadata = catalog.get_table("Users").unwrap().unwrap();
		assert_eq!(metadata.attribute_names, vec!["id", "name"]);
	}

	#[test]
	fn test_names_are_case_sensitive() {
		let catalog = create_test_catalog();
		assert_eq!(create_users_table(&catalog), StatusCode::Success);

		let to_create = TableToCreate::new("users", [("id", AttributeType::Int)], ["id"]);
		assert_eq!(catalog.create_table(to_create), StatusCode::Success);
		assert_eq!(catalog.list_tables().unwrap().len(), 2);
	}
}
