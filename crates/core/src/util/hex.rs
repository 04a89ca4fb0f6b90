// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex rendering, used for keys in log fields and debug output.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
	let bytes = bytes.as_ref();
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		out.push(DIGITS[(byte >> 4) as usize] as char);
		out.push(DIGITS[(byte & 0x0f) as usize] as char);
	}
	out
}
