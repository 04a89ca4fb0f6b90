// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use attribute::{Attribute, AttributeType, ParseAttributeTypeError};
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use status::StatusCode;
pub use table::{TableMetadata, TableToCreate};

mod attribute;
mod catalog;
mod config;
mod error;
mod status;
mod table;
mod teardown;
pub mod test_utils;

pub type Result<T> = std::result::Result<T, CatalogError>;
