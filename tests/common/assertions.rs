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

//! Custom assertions for helper testing

/// Assert two words are equal, printing both in hex on failure
#[allow(dead_code)]
pub fn assert_word(what: &str, actual: u32, expected: u32) {
    assert_eq!(
        actual, expected,
        "{} mismatch: expected 0x{:08X}, got 0x{:08X}",
        what, expected, actual
    );
}

/// Assert a byte is a valid packed BCD value (both nibbles 0-9)
#[allow(dead_code)]
pub fn assert_valid_bcd(value: u8) {
    assert!(
        value & 0xF <= 9 && value >> 4 <= 9,
        "0x{:02X} is not a valid BCD byte",
        value
    );
}
