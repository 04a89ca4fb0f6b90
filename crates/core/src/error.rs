// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::string::FromUtf8Error;

/// Errors raised while decoding keycode input.
///
/// Encoding never fails: every value the serializer accepts has a representation. Decoding works on
/// bytes read back from a store and reports where the input stops matching the expected structure.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
	#[error("unexpected end of input while reading {expected}")]
	UnexpectedEnd {
		expected: &'static str,
	},

	#[error("invalid boolean byte {0:#04x}")]
	InvalidBool(u8),

	#[error("invalid escape sequence 0x00 {0:#04x}")]
	InvalidEscape(u8),

	#[error("byte sequence is not terminated")]
	Unterminated,

	#[error("invalid utf-8 in encoded string")]
	InvalidUtf8(#[from] FromUtf8Error),

	#[error("unexpected {0} trailing bytes")]
	TrailingBytes(usize),
}
