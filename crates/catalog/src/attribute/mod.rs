// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod add;
mod drop;
pub(crate) mod layout;

/// Type of a table attribute. The tag is what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeType {
	Int,
	Varchar,
	Double,
	Boolean,
}

impl AttributeType {
	pub fn tag(&self) -> &'static str {
		match self {
			AttributeType::Int => "INT",
			AttributeType::Varchar => "VARCHAR",
			AttributeType::Double => "DOUBLE",
			AttributeType::Boolean => "BOOLEAN",
		}
	}

	/// Exact inverse of [`AttributeType::tag`]; aliases are not accepted here.
	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"INT" => Some(AttributeType::Int),
			"VARCHAR" => Some(AttributeType::Varchar),
			"DOUBLE" => Some(AttributeType::Double),
			"BOOLEAN" => Some(AttributeType::Boolean),
			_ => None,
		}
	}
}

impl Display for AttributeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.tag())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attribute type '{0}'")]
pub struct ParseAttributeTypeError(pub String);

impl FromStr for AttributeType {
	type Err = ParseAttributeTypeError;

	/// Case-insensitive; `STRING` and `BOOL` are accepted as aliases.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"INT" => Ok(AttributeType::Int),
			"VARCHAR" | "STRING" => Ok(AttributeType::Varchar),
			"DOUBLE" => Ok(AttributeType::Double),
			"BOOLEAN" | "BOOL" => Ok(AttributeType::Boolean),
			_ => Err(ParseAttributeTypeError(s.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: AttributeType,
	pub primary_key: bool,
}
