// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{EncodedKey, EncodedValues};

/// Builds a keycode byte sequence field by field.
#[derive(Debug, Default)]
pub struct KeySerializer {
	buffer: Vec<u8>,
}

impl KeySerializer {
	pub fn new() -> Self {
		Self {
			buffer: Vec::new(),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buffer: Vec::with_capacity(capacity),
		}
	}

	pub fn extend_u8(&mut self, value: u8) -> &mut Self {
		self.buffer.push(value);
		self
	}

	pub fn extend_bool(&mut self, value: bool) -> &mut Self {
		self.buffer.push(if value {
			0x01
		} else {
			0x00
		});
		self
	}

	pub fn extend_u64(&mut self, value: impl Into<u64>) -> &mut Self {
		self.buffer.extend_from_slice(&value.into().to_be_bytes());
		self
	}

	pub fn extend_bytes(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
		for byte in bytes.as_ref() {
			if *byte == 0x00 {
				self.buffer.extend_from_slice(&[0x00, 0xff]);
			} else {
				self.buffer.push(*byte);
			}
		}
		self.buffer.extend_from_slice(&[0x00, 0x00]);
		self
	}

	pub fn extend_str(&mut self, value: &str) -> &mut Self {
		self.extend_bytes(value.as_bytes())
	}

	/// Appends bytes verbatim. Only valid as the last field, since nothing delimits it.
	pub fn extend_raw(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
		self.buffer.extend_from_slice(bytes.as_ref());
		self
	}

	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	pub fn finish(self) -> Vec<u8> {
		self.buffer
	}

	pub fn to_encoded_key(self) -> EncodedKey {
		EncodedKey(self.buffer)
	}

	pub fn to_encoded_values(self) -> EncodedValues {
		EncodedValues(self.buffer)
	}
}
