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

//! Bit-manipulation and table-generation primitives
//!
//! Stateless, allocation-free functions used on the per-instruction path of
//! decoders, timers and RTC logic:
//! - Mask synthesis and bitfield extraction ([`bits`])
//! - Sign extension to 16/32 bits ([`sign_extend`])
//! - Circular rotation ([`rotate`])
//! - Packed BCD arithmetic ([`bcd`])
//! - Compile-time unrolled iteration and table generation ([`static_for`])
//! - Bit-pattern reinterpretation ([`bit_cast`])
//! - Byte-size constants ([`units`]) and branch hints ([`hint`])
//!
//! Preconditions that are visible at compile time (mask width, cast size,
//! iteration range) fail the build. Preconditions on runtime data are the
//! caller's responsibility: a violation gives an unspecified value, never a
//! panic.

pub mod bcd;
pub mod bit_cast;
pub mod bits;
pub mod hint;
pub mod rotate;
pub mod sign_extend;
pub mod static_for;
pub mod units;
pub mod word;

// Re-export commonly used items
pub use bcd::inc_bcd_byte;
pub use bit_cast::{bit_cast, Pod};
pub use bits::{get_bit, get_bits, is_bit_set, ones};
pub use hint::{building_in_debug_mode, likely, unlikely};
pub use rotate::{rotl, rotr};
pub use sign_extend::{sign_extend16, sign_extend32};
pub use static_for::{generate_table, static_for, StaticFor, TableGen};
pub use units::{gb, kb, mb, ByteSize};
pub use word::Word;
