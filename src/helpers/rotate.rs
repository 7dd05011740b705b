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

//! Circular bit rotation
//!
//! The rotation amount is reduced modulo the bit width first, so rotating by
//! `0`, by the full width, or by a multiple of it is the identity, and a
//! negative amount rotates the other way. The reduction keeps the composing
//! shift `BITS - bits` inside `1..=BITS`; the `BITS` case (amount `0`) wraps
//! to a zero shift, so both halves equal `value` and the OR is the identity.

use super::word::Word;

/// Rotate `value` right by `bits`
///
/// ```
/// use emu_helpers::helpers::rotate::rotr;
///
/// // ARM immediate operand: 0xFF rotated right by 2 * 4
/// assert_eq!(rotr(0xFFu32, 8), 0xFF00_0000);
/// ```
#[inline(always)]
pub fn rotr<T: Word>(value: T, bits: i32) -> T {
    let bits = (bits as u32) & (T::BITS - 1);
    value.lsr(bits) | value.lsl(T::BITS.wrapping_sub(bits))
}

/// Rotate `value` left by `bits`
#[inline(always)]
pub fn rotl<T: Word>(value: T, bits: i32) -> T {
    let bits = (bits as u32) & (T::BITS - 1);
    value.lsl(bits) | value.lsr(T::BITS.wrapping_sub(bits))
}
