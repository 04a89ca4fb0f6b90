// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Debug, Formatter},
	ops::Deref,
};

pub use range::EncodedKeyRange;

use crate::util::hex;

mod range;

#[derive(Clone, PartialOrd, Ord, Hash, PartialEq, Eq, Default)]
pub struct EncodedKey(pub Vec<u8>);

impl EncodedKey {
	pub fn new(key: impl Into<Vec<u8>>) -> Self {
		Self(key.into())
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	pub fn starts_with(&self, prefix: &[u8]) -> bool {
		self.0.starts_with(prefix)
	}
}

impl Deref for EncodedKey {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl AsRef<[u8]> for EncodedKey {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for EncodedKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "EncodedKey(0x{})", hex::encode(&self.0))
	}
}
