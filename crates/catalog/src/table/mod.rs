// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Attribute, AttributeType};

mod create;
mod delete;
mod list;

/// Definition passed to [`Catalog::create_table`](crate::Catalog::create_table). `None` stands for
/// an argument the caller left out, which is reported differently from an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableToCreate {
	pub name: String,
	pub attributes: Option<Vec<String>>,
	pub types: Option<Vec<AttributeType>>,
	pub primary_key: Option<Vec<String>>,
}

impl TableToCreate {
	pub fn new<A, N, P>(name: impl Into<String>, attributes: A, primary_key: P) -> Self
	where
		A: IntoIterator<Item = (N, AttributeType)>,
		N: Into<String>,
		P: IntoIterator,
		P::Item: Into<String>,
	{
		let (attributes, types): (Vec<String>, Vec<AttributeType>) = attributes.into_iter().map(|(name, ty)| (name.into(), ty)).unzip();
		Self {
			name: name.into(),
			attributes: Some(attributes),
			types: Some(types),
			primary_key: Some(primary_key.into_iter().map(Into::into).collect()),
		}
	}
}

/// Schema of one table, rebuilt from the store on every read.
///
/// The lists are parallel: `attribute_types[i]` is the type of `attribute_names[i]`. Attributes come
/// in key order, which is ascending by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
	pub attribute_names: Vec<String>,
	pub attribute_types: Vec<AttributeType>,
	pub primary_key: Vec<String>,
}

impl TableMetadata {
	pub fn attribute_type(&self, name: &str) -> Option<AttributeType> {
		let index = self.attribute_names.iter().position(|n| n == name)?;
		self.attribute_types.get(index).copied()
	}

	pub fn is_primary_key(&self, name: &str) -> bool {
		self.primary_key.iter().any(|n| n == name)
	}

	pub fn len(&self) -> usize {
		self.attribute_names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.attribute_names.is_empty()
	}

	pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
		self.attribute_names.iter().zip(&self.attribute_types).map(|(name, ty)| Attribute {
			name: name.clone(),
			ty: *ty,
			primary_key: self.is_primary_key(name),
		})
	}

	pub(crate) fn push(&mut self, attribute: Attribute) {
		if attribute.primary_key {
			self.primary_key.push(attribute.name.clone());
		}
		self.attribute_names.push(attribute.name);
		self.attribute_types.push(attribute.ty);
	}
}
