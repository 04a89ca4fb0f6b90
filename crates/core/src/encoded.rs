// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Debug, Formatter},
	ops::Deref,
};

use crate::util::hex;

/// Opaque value bytes stored under an [`crate::EncodedKey`].
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct EncodedValues(pub Vec<u8>);

impl EncodedValues {
	pub fn new(values: impl Into<Vec<u8>>) -> Self {
		Self(values.into())
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}
}

impl Deref for EncodedValues {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl AsRef<[u8]> for EncodedValues {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for EncodedValues {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "EncodedValues(0x{})", hex::encode(&self.0))
	}
}
