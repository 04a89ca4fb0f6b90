// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of a catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
	Success,
	TableAlreadyExists,
	TableNotFound,
	AttributeInvalid,
	NoPrimaryKey,
	PrimaryKeyNotFound,
	AttributeAlreadyExists,
	AttributeNotFound,
	/// A concurrent transaction committed first; retrying may succeed.
	Conflict,
	/// The store failed or returned data the catalog cannot decode.
	StoreFailure,
}

impl StatusCode {
	pub fn as_str(&self) -> &'static str {
		match self {
			StatusCode::Success => "SUCCESS",
			StatusCode::TableAlreadyExists => "TABLE_ALREADY_EXISTS",
			StatusCode::TableNotFound => "TABLE_NOT_FOUND",
			StatusCode::AttributeInvalid => "ATTRIBUTE_INVALID",
			StatusCode::NoPrimaryKey => "NO_PRIMARY_KEY",
			StatusCode::PrimaryKeyNotFound => "PRIMARY_KEY_NOT_FOUND",
			StatusCode::AttributeAlreadyExists => "ATTRIBUTE_ALREADY_EXISTS",
			StatusCode::AttributeNotFound => "ATTRIBUTE_NOT_FOUND",
			StatusCode::Conflict => "CONFLICT",
			StatusCode::StoreFailure => "STORE_FAILURE",
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, StatusCode::Success)
	}

	pub(crate) fn from_result(result: crate::Result<()>) -> Self {
		let err = match result {
			Ok(()) => return StatusCode::Success,
			Err(err) => err,
		};

		let status = err.status();
		match status {
			StatusCode::Conflict | StatusCode::StoreFailure => warn!(status = %status, "{err}"),
			_ => debug!(status = %status, "{err}"),
		}
		status
	}
}

impl Display for StatusCode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
