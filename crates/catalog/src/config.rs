// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Configuration for a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
	/// Slash separated path of the namespace holding all tables. Created on open if missing.
	pub root: String,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			root: "Manager".to_string(),
		}
	}
}
