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

//! Test fixtures for common test scenarios

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a temporary ROM file
#[allow(dead_code)]
pub fn rom_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp ROM");
    file.write_all(contents).expect("Failed to write temp ROM");
    file.flush().expect("Failed to flush temp ROM");
    file
}

/// Write `text` to a temporary TOML config file
#[allow(dead_code)]
pub fn config_file(text: &str) -> NamedTempFile {
    rom_file(text.as_bytes())
}

/// Byte pattern with every value 0x00-0xFF, repeated
#[allow(dead_code)]
pub fn byte_ramp(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// A few ARM instructions with their decoded fields:
/// (word, cond, opcode, Rn, Rd)
#[allow(dead_code)]
pub fn arm_data_processing() -> Vec<(u32, u32, u32, u32, u32)> {
    vec![
        (0xE081_2003, 0xE, 0x4, 1, 2), // add r2, r1, r3
        (0xE240_0001, 0xE, 0x2, 0, 0), // sub r0, r0, #1
        (0x01A0_F00E, 0x0, 0xD, 0, 15), // moveq pc, lr
        (0xE3C3_3102, 0xE, 0xE, 3, 3), // bic r3, r3, #0x80000000
    ]
}
