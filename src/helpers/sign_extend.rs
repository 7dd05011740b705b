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

//! Sign extension of narrow two's-complement fields
//!
//! Branch offsets and signed immediates are stored as N-bit fields. These
//! helpers widen the low `starting_width` bits of a value to 16 or 32 bits by
//! moving the field's sign bit into the top bit and shifting it back down
//! arithmetically.
//!
//! `starting_width` must be in `1..=16` (resp. `1..=32`). Other widths are
//! not checked and produce an unspecified value.

/// Sign extend the low `starting_width` bits of `value` to 16 bits
///
/// # Example
///
/// ```
/// use emu_helpers::helpers::sign_extend::sign_extend16;
///
/// assert_eq!(sign_extend16(0xFF, 8), 0xFFFF);
/// assert_eq!(sign_extend16(0x7F, 8), 0x007F);
/// ```
#[inline(always)]
pub const fn sign_extend16(value: u16, starting_width: u32) -> u16 {
    let shift = 16u32.wrapping_sub(starting_width);
    ((value as i16).wrapping_shl(shift).wrapping_shr(shift)) as u16
}

/// Sign extend the low `starting_width` bits of `value` to 32 bits
///
/// # Example
///
/// ```
/// use emu_helpers::helpers::sign_extend::sign_extend32;
///
/// // 24-bit ARM branch offset of -2 words
/// assert_eq!(sign_extend32(0x00FF_FFFE, 24), 0xFFFF_FFFE);
/// ```
#[inline(always)]
pub const fn sign_extend32(value: u32, starting_width: u32) -> u32 {
    let shift = 32u32.wrapping_sub(starting_width);
    ((value as i32).wrapping_shl(shift).wrapping_shr(shift)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_extend32_single_bit() {
        assert_eq!(sign_extend32(0b1, 1), 0xFFFF_FFFF);
        assert_eq!(sign_extend32(0b0, 1), 0);
    }

    #[test]
    fn test_sign_extend32_positive() {
        assert_eq!(sign_extend32(0b01, 2), 1);
        assert_eq!(sign_extend32(0x7FFF, 16), 0x7FFF);
    }

    #[test]
    fn test_sign_extend32_negative() {
        assert_eq!(sign_extend32(0x8000, 16), 0xFFFF_8000);
        assert_eq!(sign_extend32(0x0080_0000, 24), 0xFF80_0000);
        assert_eq!(sign_extend32(0xFFF, 12), 0xFFFF_FFFF);
    }

    #[test]
    fn test_sign_extend32_ignores_bits_above_field() {
        // Garbage above the field is shifted out before extending
        assert_eq!(sign_extend32(0xABCD_0001, 2), 1);
        assert_eq!(sign_extend32(0xABCD_0002, 2), 0xFFFF_FFFE);
    }

    #[test]
    fn test_sign_extend32_full_width_is_identity() {
        assert_eq!(sign_extend32(0x8765_4321, 32), 0x8765_4321);
    }

    #[test]
    fn test_sign_extend16() {
        assert_eq!(sign_extend16(0xFF, 8), 0xFFFF);
        assert_eq!(sign_extend16(0x7F, 8), 0x7F);
        assert_eq!(sign_extend16(0b10000, 5), 0xFFF0);
        assert_eq!(sign_extend16(0xBEEF, 16), 0xBEEF);
    }

    #[test]
    fn test_sign_extend_is_const() {
        const OFFSET: u32 = sign_extend32(0x3FF, 10);
        assert_eq!(OFFSET, u32::MAX);
    }

    #[test]
    fn test_out_of_range_width_does_not_panic() {
        let _ = sign_extend32(0x1234, 0);
        let _ = sign_extend32(0x1234, 40);
        let _ = sign_extend16(0x1234, 17);
    }
}
