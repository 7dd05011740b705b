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

//! Emulator helper library
//!
//! Low-level utilities shared by the emulator's instruction decoders, timers
//! and table generators, plus the small host-side layer around them.
//!
//! - [`helpers`]: pure bit-manipulation primitives (masks, bitfields, sign
//!   extension, rotation, BCD, compile-time iteration, bit casts)
//! - [`diagnostics`]: `fatal!` / `warn!` / `debug_print!` over `log`
//! - [`loader`]: ROM image loading
//! - [`config`]: TOML + environment configuration
//!
//! # Example
//!
//! ```
//! use emu_helpers::helpers::{get_bits, rotr, sign_extend32};
//!
//! // ARM "B" instruction: 24-bit signed word offset
//! let instr: u32 = 0xEAFF_FFFE;
//! let offset = sign_extend32(get_bits::<0, 24, _>(instr), 24) << 2;
//! assert_eq!(offset as i32, -8);
//!
//! // ARM data-processing immediate: imm8 rotated right by 2 * rot
//! let imm = rotr(0x3Fu32, 2 * 0xE);
//! assert_eq!(imm, 0x3F0);
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod helpers;
pub mod loader;

pub use error::{HelperError, Result};
