// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tabula_core::EncodingError;
use thiserror::Error;

use crate::NamespacePath;

#[derive(Debug, Error)]
pub enum StoreError {
	/// Another transaction committed a write to something this one read.
	#[error("transaction conflict: a concurrent commit modified data read by this transaction")]
	Conflict,

	#[error("namespace {path} already exists")]
	NamespaceAlreadyExists {
		path: NamespacePath,
	},

	#[error("namespace {path} does not exist")]
	NamespaceNotFound {
		path: NamespacePath,
	},

	#[error("invalid namespace path {path}: {reason}")]
	InvalidPath {
		path: NamespacePath,
		reason: &'static str,
	},

	#[error("namespace id sequence exhausted")]
	SequenceExhausted,

	#[error("failed to decode stored data: {0}")]
	Encoding(#[from] EncodingError),
}
