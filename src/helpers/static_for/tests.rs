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

//! Unit tests for compile-time iteration

use super::*;

/// Records every index it is called with
struct Collect(Vec<usize>);

impl StaticFor for Collect {
    fn call<const I: usize>(&mut self) {
        self.0.push(I);
    }
}

#[test]
fn test_static_for_ascending() {
    let mut collect = Collect(Vec::new());
    static_for::<0, 5, _>(&mut collect);
    assert_eq!(collect.0, [0, 1, 2, 3, 4]);
}

#[test]
fn test_static_for_empty_range() {
    let mut collect = Collect(Vec::new());
    static_for::<3, 3, _>(&mut collect);
    assert!(collect.0.is_empty());
}

#[test]
fn test_static_for_offset_range() {
    let mut collect = Collect(Vec::new());
    static_for::<10, 14, _>(&mut collect);
    assert_eq!(collect.0, [10, 11, 12, 13]);
}

#[test]
fn test_static_for_crosses_chunk_boundary() {
    let mut collect = Collect(Vec::new());
    static_for::<60, 70, _>(&mut collect);
    assert_eq!(collect.0, (60..70).collect::<Vec<_>>());
}

#[test]
fn test_static_for_full_opcode_space() {
    let mut collect = Collect(Vec::new());
    static_for::<0, 256, _>(&mut collect);
    assert_eq!(collect.0.len(), 256);
    assert!(collect.0.windows(2).all(|w| w[0] + 1 == w[1]));
}

#[test]
fn test_static_for_up_to_limit() {
    let mut collect = Collect(Vec::new());
    static_for::<{ STATIC_FOR_LIMIT - 2 }, STATIC_FOR_LIMIT, _>(&mut collect);
    assert_eq!(collect.0, [STATIC_FOR_LIMIT - 2, STATIC_FOR_LIMIT - 1]);
}

/// Body whose behaviour depends on the index at compile time
struct EvenSum(usize);

impl StaticFor for EvenSum {
    fn call<const I: usize>(&mut self) {
        if I % 2 == 0 {
            self.0 += I;
        }
    }
}

#[test]
fn test_static_for_specialises_on_index() {
    let mut sum = EvenSum(0);
    static_for::<0, 10, _>(&mut sum);
    assert_eq!(sum.0, 2 + 4 + 6 + 8);
}

struct Cube;

impl TableGen for Cube {
    type Entry = u32;

    fn entry<const I: usize>() -> u32 {
        (I * I * I) as u32
    }
}

#[test]
fn test_generate_table() {
    let table = generate_table::<Cube, 6>(u32::MAX);
    assert_eq!(table, [0, 1, 8, 27, 64, 125]);
}

#[test]
fn test_generate_empty_table() {
    let table = generate_table::<Cube, 0>(0);
    assert!(table.is_empty());
}
