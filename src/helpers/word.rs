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

//! Fixed-width integer abstraction
//!
//! Every primitive in [`crate::helpers`] is generic over [`Word`], which is
//! implemented for the 8/16/32/64-bit (and pointer-sized) signed and unsigned
//! integers. Shifts go through the wrapping variants: the shift amount is
//! reduced modulo `BITS`, so an out-of-range amount yields an unspecified
//! value instead of a debug-build overflow panic.

use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// A fixed-width two's-complement integer
pub trait Word:
    Copy
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Width in bits
    const BITS: u32;

    /// All bits clear
    const ZERO: Self;

    /// Only bit 0 set
    const ONE: Self;

    /// All bits set (`!0`), regardless of signedness
    const ALL_ONES: Self;

    /// Logical right shift (zero fill), even for signed types
    fn lsr(self, amount: u32) -> Self;

    /// Arithmetic right shift (sign fill for signed types, zero fill otherwise)
    fn asr(self, amount: u32) -> Self;

    /// Left shift
    fn lsl(self, amount: u32) -> Self;

    /// Number of one bits
    fn count_ones(self) -> u32;
}

macro_rules! impl_word {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ALL_ONES: Self = !0;

            #[inline(always)]
            fn lsr(self, amount: u32) -> Self {
                (self as $u).wrapping_shr(amount) as $t
            }

            #[inline(always)]
            fn asr(self, amount: u32) -> Self {
                self.wrapping_shr(amount)
            }

            #[inline(always)]
            fn lsl(self, amount: u32) -> Self {
                self.wrapping_shl(amount)
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }
        }
    )*};
}

impl_word! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    isize => usize,
}
