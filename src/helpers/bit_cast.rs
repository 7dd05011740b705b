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

//! Bit-pattern reinterpretation
//!
//! [`bit_cast`] views the bits of one [`Pod`] value as another `Pod` type of
//! the same size (e.g. an `f32` register as `u32`). A size mismatch fails the
//! build.
//!
//! Two strategies exist and the build script picks one for the whole crate:
//!
//! - [`Strategy::Native`] (default): `core::mem::transmute_copy`
//! - [`Strategy::Portable`]: copy through the types' byte representations,
//!   with no `unsafe`. Selected by the `portable-bit-cast` feature or by
//!   building with `EMU_HELPERS_BIT_CAST=portable`.
//!
//! Both produce identical results; the choice never happens at runtime.

use std::fmt;
use std::mem::size_of;

/// Plain-old-data: `Copy`, no padding, and every bit pattern is a valid value.
///
/// # Safety
///
/// Implementors must have no padding bytes and no invalid bit patterns, and
/// `Bytes` must be exactly `size_of::<Self>()` bytes holding the in-memory
/// representation (`to_ne_bytes` order).
pub unsafe trait Pod: Copy + 'static {
    /// Byte array of the same size as `Self`
    type Bytes: AsRef<[u8]> + AsMut<[u8]>;

    fn to_bytes(self) -> Self::Bytes;

    fn from_bytes(bytes: Self::Bytes) -> Self;

    fn zeroed_bytes() -> Self::Bytes;
}

macro_rules! impl_pod {
    ($($t:ty),* $(,)?) => {$(
        // SAFETY: primitive numeric type without padding or invalid values
        unsafe impl Pod for $t {
            type Bytes = [u8; size_of::<$t>()];

            #[inline(always)]
            fn to_bytes(self) -> Self::Bytes {
                self.to_ne_bytes()
            }

            #[inline(always)]
            fn from_bytes(bytes: Self::Bytes) -> Self {
                <$t>::from_ne_bytes(bytes)
            }

            #[inline(always)]
            fn zeroed_bytes() -> Self::Bytes {
                [0; size_of::<$t>()]
            }
        }
    )*};
}

impl_pod!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// SAFETY: a byte array is its own representation
unsafe impl<const N: usize> Pod for [u8; N] {
    type Bytes = [u8; N];

    #[inline(always)]
    fn to_bytes(self) -> Self::Bytes {
        self
    }

    #[inline(always)]
    fn from_bytes(bytes: Self::Bytes) -> Self {
        bytes
    }

    #[inline(always)]
    fn zeroed_bytes() -> Self::Bytes {
        [0; N]
    }
}

/// Reinterpretation strategy compiled into this build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `transmute_copy`
    Native,
    /// Byte-array copy
    Portable,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Native => write!(f, "native"),
            Strategy::Portable => write!(f, "portable"),
        }
    }
}

/// Strategy selected by the build script
#[cfg(not(bit_cast_portable))]
pub const STRATEGY: Strategy = Strategy::Native;

/// Strategy selected by the build script
#[cfg(bit_cast_portable)]
pub const STRATEGY: Strategy = Strategy::Portable;

/// Reinterpret the bits of `from` as a `To`
///
/// ```
/// use emu_helpers::helpers::bit_cast::bit_cast;
///
/// assert_eq!(bit_cast::<u32, f32>(1.0), 0x3F80_0000);
/// assert_eq!(bit_cast::<f32, u32>(0xC000_0000), -2.0);
/// ```
///
/// Types of different sizes are rejected at compile time:
///
/// ```compile_fail
/// use emu_helpers::helpers::bit_cast::bit_cast;
///
/// let _ = bit_cast::<u64, f32>(1.0);
/// ```
#[inline(always)]
pub fn bit_cast<To: Pod, From: Pod>(from: From) -> To {
    const {
        assert!(
            size_of::<To>() == size_of::<From>(),
            "bit_cast between types of different sizes"
        );
    }

    #[cfg(not(bit_cast_portable))]
    {
        native(from)
    }

    #[cfg(bit_cast_portable)]
    {
        portable(from)
    }
}

#[cfg_attr(bit_cast_portable, allow(dead_code))]
#[inline(always)]
fn native<To: Pod, From: Pod>(from: From) -> To {
    // SAFETY: `bit_cast` has checked the sizes match, and `To: Pod` accepts
    // any bit pattern. transmute_copy handles differing alignment.
    unsafe { std::mem::transmute_copy::<From, To>(&from) }
}

#[cfg_attr(not(bit_cast_portable), allow(dead_code))]
#[inline(always)]
fn portable<To: Pod, From: Pod>(from: From) -> To {
    let mut bytes = To::zeroed_bytes();
    bytes.as_mut().copy_from_slice(from.to_bytes().as_ref());
    To::from_bytes(bytes)
}
