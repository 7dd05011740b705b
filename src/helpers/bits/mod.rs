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

//! Mask synthesis and bitfield extraction
//!
//! Instruction decoders pull register indices, immediates and condition codes
//! out of fixed-width words. The field position is known when the decoder is
//! written, so `OFFSET` and `WIDTH` are const generics:
//!
//! ```text
//! ARM data-processing:  | cond (4) | 00 | I | opcode (4) | S | Rn (4) | Rd (4) | operand2 (12) |
//!                         31..28                24..21           19..16   15..12   11..0
//! ```
//!
//! ```
//! use emu_helpers::helpers::bits::{get_bit, get_bits, ones};
//!
//! let instr: u32 = 0xE0812003; // add r2, r1, r3
//! assert_eq!(get_bits::<28, 4, _>(instr), 0xE);
//! assert_eq!(get_bits::<21, 4, _>(instr), 0x4);
//! assert_eq!(get_bits::<12, 4, _>(instr), 2);
//! assert_eq!(get_bit::<20, _>(instr), 0);
//! assert_eq!(ones::<u8, 3>(), 0b111);
//! ```
//!
//! # Preconditions
//!
//! `COUNT > T::BITS` for [`ones`] is rejected when the crate using it is
//! compiled. Offsets are not checked: `OFFSET + WIDTH` must fit in `T`, and a
//! field that does not fit produces an unspecified value (never a panic).
//!
//! Signed words are treated as raw bits. Shifts are logical, so the vacated
//! high bits are zero-filled rather than copies of the sign bit, and extracted
//! fields are never negative: `ones::<i8, 4>()` is `0x0F` and
//! `get_bits::<4, 4, i8>(-1)` is `0x0F`. Use
//! [`sign_extend16`](super::sign_extend::sign_extend16) or
//! [`sign_extend32`](super::sign_extend::sign_extend32) for signed fields.

use super::word::Word;

/// Create a mask with the low `COUNT` bits set.
///
/// `ones::<T, 0>()` is zero and `ones::<T, { T::BITS }>()` is all ones.
/// A `COUNT` wider than `T` fails the build.
///
/// ```compile_fail
/// let _ = emu_helpers::helpers::bits::ones::<u8, 9>();
/// ```
#[inline(always)]
pub fn ones<T: Word, const COUNT: u32>() -> T {
    const {
        assert!(COUNT <= T::BITS, "count larger than bit width of T");
    }

    if COUNT == 0 {
        return T::ZERO;
    }
    T::ALL_ONES.lsr(T::BITS - COUNT)
}

/// Extract bit `OFFSET` of `value` as `0` or `1`
#[inline(always)]
pub fn get_bit<const OFFSET: u32, T: Word>(value: T) -> T {
    value.lsr(OFFSET) & T::ONE
}

/// Extract the right-aligned `WIDTH`-bit field starting at bit `OFFSET`
#[inline(always)]
pub fn get_bits<const OFFSET: u32, const WIDTH: u32, T: Word>(value: T) -> T {
    value.lsr(OFFSET) & ones::<T, WIDTH>()
}

/// Check if bit `bit` of `value` is set
#[inline(always)]
pub fn is_bit_set<T: Word>(value: T, bit: u32) -> bool {
    value.lsr(bit) & T::ONE != T::ZERO
}

/// Runtime-width variant of [`ones`].
///
/// For tooling that reads field widths from data rather than from the
/// decoder source. `count >= T::BITS` saturates to all ones.
#[inline]
pub fn mask<T: Word>(count: u32) -> T {
    match count {
        0 => T::ZERO,
        c if c >= T::BITS => T::ALL_ONES,
        c => T::ALL_ONES.lsr(T::BITS - c),
    }
}
