// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::EncodingError;

/// Reads keycode fields back in the order they were written.
#[derive(Debug)]
pub struct KeyDeserializer<'a> {
	input: &'a [u8],
}

impl<'a> KeyDeserializer<'a> {
	pub fn from_bytes(input: &'a [u8]) -> Self {
		Self {
			input,
		}
	}

	fn take(&mut self, len: usize, expected: &'static str) -> crate::Result<&'a [u8]> {
		if self.input.len() < len {
			return Err(EncodingError::UnexpectedEnd {
				expected,
			});
		}
		let (head, tail) = self.input.split_at(len);
		self.input = tail;
		Ok(head)
	}

	pub fn read_u8(&mut self) -> crate::Result<u8> {
		Ok(self.take(1, "u8")?[0])
	}

	pub fn read_bool(&mut self) -> crate::Result<bool> {
		match self.take(1, "bool")?[0] {
			0x00 => Ok(false),
			0x01 => Ok(true),
			byte => Err(EncodingError::InvalidBool(byte)),
		}
	}

	pub fn read_u64(&mut self) -> crate::Result<u64> {
		let bytes = self.take(8, "u64")?;
		let mut buf = [0u8; 8];
		buf.copy_from_slice(bytes);
		Ok(u64::from_be_bytes(buf))
	}

	pub fn read_bytes(&mut self) -> crate::Result<Vec<u8>> {
		let mut out = Vec::new();
		let mut iter = self.input.iter().enumerate();
		while let Some((_, byte)) = iter.next() {
			if *byte != 0x00 {
				out.push(*byte);
				continue;
			}
			match iter.next() {
				Some((_, 0xff)) => out.push(0x00),
				Some((i, 0x00)) => {
					self.input = &self.input[i + 1..];
					return Ok(out);
				}
				Some((_, byte)) => return Err(EncodingError::InvalidEscape(*byte)),
				None => break,
			}
		}
		Err(EncodingError::Unterminated)
	}

	pub fn read_str(&mut self) -> crate::Result<String> {
		Ok(String::from_utf8(self.read_bytes()?)?)
	}

	/// Everything not consumed yet.
	pub fn remaining(&self) -> &'a [u8] {
		self.input
	}

	pub fn is_empty(&self) -> bool {
		self.input.is_empty()
	}

	/// Fails when unread bytes are left over.
	pub fn finish(self) -> crate::Result<()> {
		if self.input.is_empty() {
			Ok(())
		} else {
			Err(EncodingError::TrailingBytes(self.input.len()))
		}
	}
}
