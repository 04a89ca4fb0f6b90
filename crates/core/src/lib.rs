// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use common::{CommitVersion, NamespaceId};
pub use encoded::EncodedValues;
pub use error::EncodingError;
pub use key::{EncodedKey, EncodedKeyRange};

mod common;
mod encoded;
pub mod encoding;
mod error;
mod key;
pub mod util;

pub type Result<T> = std::result::Result<T, EncodingError>;
