// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory implementation of [`NamespaceStore`].
//!
//! Every key keeps its history of committed versions in a BTreeMap behind a RwLock. Transactions
//! read at the version current when they began and validate their reads when they commit.
//!
//! A commit prunes the history of the keys it writes: versions no open snapshot can read any more
//! are dropped, and a key whose only remaining version is such a removal disappears entirely.
//! Keys that are never written again keep the history they had at their last commit.

use std::{collections::BTreeMap, sync::Arc};

use parking_lot::{Mutex, RwLock};
use tabula_core::{CommitVersion, EncodedKey, EncodedValues};
use tracing::instrument;

pub use transaction::MemoryTransaction;

use watermark::Watermark;

use crate::{NamespaceStore, Result};

mod conflict;
mod transaction;
mod watermark;

/// Committed versions of one key, oldest first. `None` marks a removal.
pub(crate) type Versions = Vec<(CommitVersion, Option<EncodedValues>)>;

#[derive(Debug, Default)]
pub(crate) struct State {
	pub(crate) data: BTreeMap<EncodedKey, Versions>,
	pub(crate) version: CommitVersion,
}

impl State {
	pub(crate) fn visible(versions: &Versions, at: CommitVersion) -> Option<&EncodedValues> {
		versions.iter().rev().find(|(version, _)| *version <= at).and_then(|(_, values)| values.as_ref())
	}

	pub(crate) fn modified_after(versions: &Versions, at: CommitVersion) -> bool {
		versions.last().is_some_and(|(version, _)| *version > at)
	}

	/// Drops every version hidden behind a newer one at or below `watermark`, and the newest such
	/// version too when it is a removal.
	pub(crate) fn prune(versions: &mut Versions, watermark: CommitVersion) {
		let Some(base) = versions.iter().rposition(|(version, _)| *version <= watermark) else {
			return;
		};
		versions.drain(..base);
		if versions.first().is_some_and(|(_, values)| values.is_none()) {
			versions.remove(0);
		}
	}
}

#[derive(Clone, Default)]
pub struct MemoryStore {
	inner: Arc<MemoryStoreInner>,
}

#[derive(Default)]
pub(crate) struct MemoryStoreInner {
	pub(crate) state: RwLock<State>,
	pub(crate) watermark: Mutex<Watermark>,
}

impl MemoryStore {
	#[instrument(name = "store::memory::new", level = "debug")]
	pub fn new() -> Self {
		Self::default()
	}

	/// Version of the latest commit.
	pub fn version(&self) -> CommitVersion {
		self.inner.state.read().version
	}
}

impl NamespaceStore for MemoryStore {
	type Transaction = MemoryTransaction;

	#[instrument(name = "store::memory::begin", level = "trace", skip(self))]
	fn begin(&self) -> Result<MemoryTransaction> {
		// registered under the state lock so no commit prunes in between
		let state = self.inner.state.read();
		let version = state.version;
		self.inner.watermark.lock().begin(version);
		drop(state);
		Ok(MemoryTransaction::new(self.inner.clone(), version))
	}
}
