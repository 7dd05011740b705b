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

//! Build script
//!
//! - Emits the unrolled `static_for` dispatcher into `OUT_DIR/static_for.rs`
//! - Selects the `bit_cast` strategy (`bit_cast_portable` cfg)

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Highest exclusive `END` accepted by `static_for`
const STATIC_FOR_LIMIT: usize = 4096;

/// Indices per generated chunk function
const CHUNK: usize = 64;

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-env-changed=EMU_HELPERS_BIT_CAST");
    println!("cargo::rustc-check-cfg=cfg(bit_cast_portable)");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("static_for.rs"), generate_static_for())
        .expect("failed to write static_for.rs");

    let forced_by_env = env::var("EMU_HELPERS_BIT_CAST")
        .map(|v| v.eq_ignore_ascii_case("portable"))
        .unwrap_or(false);
    let forced_by_feature = env::var_os("CARGO_FEATURE_PORTABLE_BIT_CAST").is_some();

    if forced_by_env || forced_by_feature {
        println!("cargo::rustc-cfg=bit_cast_portable");
    }
}

/// Generate the dispatcher.
///
/// Every index becomes a literal `f.call::<N>()` guarded only by comparisons
/// between literals and the `BEGIN`/`END` const generics, so each guard is a
/// constant after monomorphization and no loop survives into codegen.
fn generate_static_for() -> String {
    let mut src = String::new();
    let chunks = STATIC_FOR_LIMIT / CHUNK;

    writeln!(src, "// @generated by build.rs, do not edit").unwrap();
    writeln!(src).unwrap();
    writeln!(src, "pub const STATIC_FOR_LIMIT: usize = {STATIC_FOR_LIMIT};").unwrap();
    writeln!(src).unwrap();

    writeln!(src, "#[inline(always)]").unwrap();
    writeln!(
        src,
        "pub fn dispatch<const BEGIN: usize, const END: usize, F: StaticFor>(f: &mut F) {{"
    )
    .unwrap();
    for chunk in 0..chunks {
        let lo = chunk * CHUNK;
        let hi = lo + CHUNK;
        writeln!(
            src,
            "    if BEGIN < {hi} && {lo} < END {{ chunk_{chunk}::<BEGIN, END, F>(f); }}"
        )
        .unwrap();
    }
    writeln!(src, "}}").unwrap();

    for chunk in 0..chunks {
        let lo = chunk * CHUNK;
        writeln!(src).unwrap();
        writeln!(src, "#[inline(always)]").unwrap();
        writeln!(src, "#[allow(unused_comparisons, clippy::absurd_extreme_comparisons)]").unwrap();
        writeln!(
            src,
            "fn chunk_{chunk}<const BEGIN: usize, const END: usize, F: StaticFor>(f: &mut F) {{"
        )
        .unwrap();
        for index in lo..lo + CHUNK {
            writeln!(
                src,
                "    if BEGIN <= {index} && {index} < END {{ f.call::<{index}>(); }}"
            )
            .unwrap();
        }
        writeln!(src, "}}").unwrap();
    }

    src
}
