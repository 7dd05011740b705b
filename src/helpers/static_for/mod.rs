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

//! Compile-time unrolled iteration
//!
//! [`static_for`] calls a body once per index in `BEGIN..END`, in ascending
//! order, with the index available as a const generic. The body can then
//! specialise on the index (pick a handler, compute a decode constant) the
//! same way a hand-written table would, with no runtime index at all.
//!
//! Rust closures cannot take const generic parameters, so the body is a type
//! implementing [`StaticFor`]. The unrolled dispatcher is generated by the
//! build script: one literal `call::<N>()` per index up to
//! [`STATIC_FOR_LIMIT`], each guarded by a comparison between literals and the
//! const generic bounds. The guards are constants after monomorphization, so
//! only the calls inside the range survive and no loop is emitted.
//!
//! ```
//! use emu_helpers::helpers::static_for::{static_for, StaticFor};
//!
//! struct Squares(Vec<usize>);
//!
//! impl StaticFor for Squares {
//!     fn call<const I: usize>(&mut self) {
//!         self.0.push(I * I);
//!     }
//! }
//!
//! let mut squares = Squares(Vec::new());
//! static_for::<0, 5, _>(&mut squares);
//! assert_eq!(squares.0, [0, 1, 4, 9, 16]);
//! ```

use std::marker::PhantomData;

mod generated {
    use super::StaticFor;

    include!(concat!(env!("OUT_DIR"), "/static_for.rs"));
}

pub use generated::STATIC_FOR_LIMIT;

/// Loop body for [`static_for`]
pub trait StaticFor {
    /// Invoked once per index `I`
    fn call<const I: usize>(&mut self);
}

/// Invoke `body.call::<I>()` for every `I` in `BEGIN..END`, ascending.
///
/// `BEGIN == END` performs no calls. `BEGIN > END` and `END > STATIC_FOR_LIMIT`
/// fail the build.
#[inline(always)]
pub fn static_for<const BEGIN: usize, const END: usize, F: StaticFor>(body: &mut F) {
    const {
        assert!(BEGIN <= END, "static_for range is reversed");
        assert!(END <= STATIC_FOR_LIMIT, "static_for range exceeds STATIC_FOR_LIMIT");
    }

    generated::dispatch::<BEGIN, END, F>(body);
}

/// Per-index entry generator for [`generate_table`]
///
/// Implemented by decoders that build handler tables: `entry::<I>()` sees the
/// table index as a constant.
pub trait TableGen {
    type Entry: Copy;

    /// Value stored in slot `I`
    fn entry<const I: usize>() -> Self::Entry;
}

struct TableFiller<'a, G: TableGen, const N: usize> {
    table: &'a mut [G::Entry; N],
    _gen: PhantomData<fn() -> G>,
}

impl<G: TableGen, const N: usize> StaticFor for TableFiller<'_, G, N> {
    #[inline(always)]
    fn call<const I: usize>(&mut self) {
        self.table[I] = G::entry::<I>();
    }
}

/// Build an `N`-entry table with slot `I` holding `G::entry::<I>()`
///
/// `fill` is only used to initialise the array before every slot is
/// overwritten.
///
/// ```
/// use emu_helpers::helpers::bits::get_bits;
/// use emu_helpers::helpers::static_for::{generate_table, TableGen};
///
/// type Handler = fn(u8) -> u8;
///
/// fn low<const I: usize>(x: u8) -> u8 { x & 0xF }
/// fn high<const I: usize>(x: u8) -> u8 { x >> 4 }
///
/// struct Nibbles;
///
/// impl TableGen for Nibbles {
///     type Entry = Handler;
///
///     fn entry<const I: usize>() -> Handler {
///         if get_bits::<0, 1, _>(I) == 0 { low::<I> } else { high::<I> }
///     }
/// }
///
/// let table = generate_table::<Nibbles, 4>(low::<0>);
/// assert_eq!(table[2](0xAB), 0xB);
/// assert_eq!(table[3](0xAB), 0xA);
/// ```
#[inline]
pub fn generate_table<G: TableGen, const N: usize>(fill: G::Entry) -> [G::Entry; N] {
    let mut table = [fill; N];
    static_for::<0, N, _>(&mut TableFiller::<G, N> {
        table: &mut table,
        _gen: PhantomData,
    });
    table
}

#[cfg(test)]
mod tests;
