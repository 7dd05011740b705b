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

//! Packed binary-coded-decimal helpers
//!
//! RTC registers hold two decimal digits per byte, one per nibble. Valid
//! bytes are `0x00..=0x99`; out-of-domain bytes are not rejected and give
//! an unspecified (but non-panicking) result.

/// Increment a packed BCD byte, carrying from the low digit into the high one
///
/// A low nibble of `9` becomes `0` with a carry, which is `+7` in binary
/// (skipping `0xA..=0xF`). `0x99` becomes `0xA0`; callers that need a
/// wrap to `0x00` compare against their own limit.
///
/// ```
/// use emu_helpers::helpers::bcd::inc_bcd_byte;
///
/// assert_eq!(inc_bcd_byte(0x09), 0x10);
/// assert_eq!(inc_bcd_byte(0x58), 0x59);
/// ```
#[inline(always)]
pub const fn inc_bcd_byte(value: u8) -> u8 {
    if (value & 0xF) == 0x9 {
        value.wrapping_add(7)
    } else {
        value.wrapping_add(1)
    }
}

/// Convert a packed BCD byte to binary (`0x59` -> `59`)
#[inline(always)]
pub const fn bcd_to_binary(value: u8) -> u8 {
    (value >> 4).wrapping_mul(10).wrapping_add(value & 0xF)
}

/// Convert a binary value in `0..=99` to a packed BCD byte (`59` -> `0x59`)
#[inline(always)]
pub const fn binary_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inc_bcd_no_carry() {
        assert_eq!(inc_bcd_byte(0x00), 0x01);
        assert_eq!(inc_bcd_byte(0x42), 0x43);
        assert_eq!(inc_bcd_byte(0x98), 0x99);
    }

    #[test]
    fn test_inc_bcd_carry() {
        assert_eq!(inc_bcd_byte(0x09), 0x10);
        assert_eq!(inc_bcd_byte(0x19), 0x20);
        assert_eq!(inc_bcd_byte(0x59), 0x60);
    }

    #[test]
    fn test_inc_bcd_top_of_domain() {
        // Records current behaviour: the high digit is not wrapped
        assert_eq!(inc_bcd_byte(0x99), 0xA0);
    }

    #[test]
    fn test_inc_bcd_out_of_domain_does_not_panic() {
        assert_eq!(inc_bcd_byte(0xFF), 0x00);
        assert_eq!(inc_bcd_byte(0xF9), 0x00);
        assert_eq!(inc_bcd_byte(0x0A), 0x0B);
    }

    #[test]
    fn test_inc_bcd_counts_like_decimal() {
        let mut bcd = 0x00u8;
        for n in 1..=99u8 {
            bcd = inc_bcd_byte(bcd);
            assert_eq!(bcd_to_binary(bcd), n);
        }
    }

    #[test]
    fn test_bcd_conversions() {
        assert_eq!(bcd_to_binary(0x00), 0);
        assert_eq!(bcd_to_binary(0x59), 59);
        assert_eq!(bcd_to_binary(0x99), 99);
        assert_eq!(binary_to_bcd(0), 0x00);
        assert_eq!(binary_to_bcd(23), 0x23);
        assert_eq!(binary_to_bcd(99), 0x99);
    }
}
