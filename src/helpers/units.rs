// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Byte-size constants (base 1024)
//!
//! ```
//! use emu_helpers::helpers::units::{kb, mb};
//!
//! const FCRAM_SIZE: usize = mb(128);
//! const VRAM_SIZE: usize = kb(6 * 1024);
//! assert_eq!(FCRAM_SIZE, 128 * 1024 * 1024);
//! assert_eq!(VRAM_SIZE, mb(6));
//! ```
//!
//! An overflowing constant such as `gb(usize::MAX)` in a `const` item fails
//! the build.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::HelperError;

/// `x` kibibytes in bytes
#[inline(always)]
pub const fn kb(x: usize) -> usize {
    1024 * x
}

/// `x` mebibytes in bytes
#[inline(always)]
pub const fn mb(x: usize) -> usize {
    kb(1024) * x
}

/// `x` gibibytes in bytes
#[inline(always)]
pub const fn gb(x: usize) -> usize {
    mb(1024) * x
}

/// A byte count read from configuration, e.g. `"512KB"` or `"16 MB"`
///
/// Units are `B`, `KB`/`KiB`, `MB`/`MiB`, `GB`/`GiB` (case-insensitive, all
/// base 1024). A bare number is bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ByteSize(pub usize);

impl ByteSize {
    pub const fn bytes(self) -> usize {
        self.0
    }
}

impl FromStr for ByteSize {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HelperError::InvalidByteSize(s.to_string());

        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, unit) = trimmed.split_at(split);

        let count: usize = digits.parse().map_err(|_| invalid())?;
        let scale = match unit.trim().to_ascii_lowercase().as_str() {
            "" | "b" => 1,
            "k" | "kb" | "kib" => kb(1),
            "m" | "mb" | "mib" => mb(1),
            "g" | "gb" | "gib" => gb(1),
            _ => return Err(invalid()),
        };

        count.checked_mul(scale).map(ByteSize).ok_or_else(invalid)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n != 0 && n % gb(1) == 0 {
            write!(f, "{}GB", n / gb(1))
        } else if n != 0 && n % mb(1) == 0 {
            write!(f, "{}MB", n / mb(1))
        } else if n != 0 && n % kb(1) == 0 {
            write!(f, "{}KB", n / kb(1))
        } else {
            write!(f, "{n}B")
        }
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bytes(usize),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bytes(n) => Ok(ByteSize(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
