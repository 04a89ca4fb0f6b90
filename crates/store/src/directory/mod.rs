// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Hierarchical namespaces on top of the flat key space.
//!
//! Each namespace gets a numeric id from a sequence. A directory entry keyed by `(parent id, name)`
//! links a name to the child's id, and the namespace's own keys live under its id. Renaming or
//! moving a namespace never rewrites its data, and removing one only touches its own id range plus
//! the ranges of its descendants.

mod create;
mod find;
mod list;
mod namespace;
mod path;
mod remove;

pub use namespace::Namespace;
pub use path::NamespacePath;
use tabula_core::{EncodedValues, NamespaceId, encoding::keycode::KeyDeserializer};

use crate::Result;

/// Whether a namespace has child namespaces, and which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceShape {
	Leaf,
	/// Child names in key order.
	Branch(Vec<String>),
}

pub struct DirectoryLayer {}

impl DirectoryLayer {
	pub fn root() -> Namespace {
		Namespace::new(NamespaceId::ROOT, NamespacePath::root())
	}

	fn decode_link(values: &EncodedValues) -> Result<NamespaceId> {
		let mut de = KeyDeserializer::from_bytes(values.as_slice());
		let id = de.read_u64()?;
		de.finish()?;
		Ok(NamespaceId(id))
	}
}
