// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_store::StoreError;
use thiserror::Error;

use crate::StatusCode;

#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("table '{name}' already exists")]
	TableAlreadyExists {
		name: String,
	},

	#[error("table '{name}' not found")]
	TableNotFound {
		name: String,
	},

	#[error("invalid attribute list: {reason}")]
	AttributeInvalid {
		reason: String,
	},

	#[error("table '{table}' declares no primary key")]
	NoPrimaryKey {
		table: String,
	},

	#[error("primary key '{attribute}' is not an attribute of table '{table}'")]
	PrimaryKeyNotFound {
		table: String,
		attribute: String,
	},

	#[error("attribute '{attribute}' already exists in table '{table}'")]
	AttributeAlreadyExists {
		table: String,
		attribute: String,
	},

	#[error("attribute '{attribute}' not found in table '{table}'")]
	AttributeNotFound {
		table: String,
		attribute: String,
	},

	#[error("corrupted metadata in table '{table}': {reason}")]
	Corrupted {
		table: String,
		reason: String,
	},

	#[error(transparent)]
	Store(#[from] StoreError),
}

impl CatalogError {
	pub fn status(&self) -> StatusCode {
		match self {
			CatalogError::TableAlreadyExists {
				..
			} => StatusCode::TableAlreadyExists,
			CatalogError::TableNotFound {
				..
			} => StatusCode::TableNotFound,
			CatalogError::AttributeInvalid {
				..
			} => StatusCode::AttributeInvalid,
			CatalogError::NoPrimaryKey {
				..
			} => StatusCode::NoPrimaryKey,
			CatalogError::PrimaryKeyNotFound {
				..
			} => StatusCode::PrimaryKeyNotFound,
			CatalogError::AttributeAlreadyExists {
				..
			} => StatusCode::AttributeAlreadyExists,
			CatalogError::AttributeNotFound {
				..
			} => StatusCode::AttributeNotFound,
			CatalogError::Store(StoreError::Conflict) => StatusCode::Conflict,
			CatalogError::Store(_)
			| CatalogError::Corrupted {
				..
			} => StatusCode::StoreFailure,
		}
	}
}
