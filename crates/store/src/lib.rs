// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use directory::{DirectoryLayer, Namespace, NamespacePath, NamespaceShape};
pub use error::StoreError;
pub use interface::{NamespaceStore, StoreEntry, StoreTransaction};
pub use memory::{MemoryStore, MemoryTransaction};

pub mod directory;
mod error;
mod interface;
pub mod key;
pub mod memory;
mod sequence;

pub type Result<T> = std::result::Result<T, StoreError>;
