// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// This file includes and modifies code from the toydb project (https://github.com/erikgrinaker/toydb),
// originally licensed under the Apache License, Version 2.0.
// Original copyright:
//   Copyright (c) 2024 Erik Grinaker
//
// The original Apache License can be found at:
//   http://www.apache.org/licenses/LICENSE-2.0

//! Keycode is a lexicographical order-preserving binary encoding for use with
//! keys in key/value stores. Ordering is what makes range scans over a single
//! namespace or a single key kind possible.
//!
//! The encoding is not self-describing: the reader must know the structure it
//! expects and read the fields back in the order they were written.
//!
//! * `u8`: the byte itself.
//! * `bool`: `0x00` for `false`, `0x01` for `true`.
//! * `u64`: big-endian binary representation.
//! * byte strings: `0x00` escaped as `0x00ff`, terminated with `0x0000`.
//! * `str`: like byte strings, over the UTF-8 bytes.
//! * tuples: concatenation of the contained elements, with no other structure.
//!
//! The terminator sorts below every escaped byte, so a string always sorts
//! before any longer string it is a prefix of, and tuples compare element by
//! element.

mod deserialize;
mod serialize;

pub use deserialize::KeyDeserializer;
pub use serialize::KeySerializer;
