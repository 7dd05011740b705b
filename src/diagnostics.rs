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

//! Process-wide diagnostics
//!
//! Formatted reporting on top of the `log` facade. The macros take ordinary
//! Rust format arguments, so mismatched arguments are compile errors:
//!
//! - [`fatal!`]: log at `error` level with a `[FATAL]` prefix, flush, exit(1)
//! - [`warn!`]: log at `warn` level with a `[Warning]` prefix and continue
//! - [`debug_print!`]: log at `debug` level, compiled out of release builds
//!
//! Binaries call [`init_logging`] once at startup.

use std::fmt;

use log::LevelFilter;

use crate::helpers::hint::building_in_debug_mode;

/// Log target used by every diagnostic in this module
pub const TARGET: &str = "emu_helpers";

/// Report an unrecoverable error and terminate the process with status 1
///
/// ```no_run
/// emu_helpers::fatal!("Failed to load ROM file: {}", "game.3ds");
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::diagnostics::fatal(::std::format_args!($($arg)+))
    };
}

/// Report a recoverable problem and keep going
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::diagnostics::warn(::std::format_args!($($arg)+))
    };
}

/// Debug-build-only trace output
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)+) => {
        $crate::diagnostics::debug_print(::std::format_args!($($arg)+))
    };
}

/// Backing function for [`fatal!`]
#[cold]
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    log::error!(target: TARGET, "[FATAL] {args}");
    log::logger().flush();
    std::process::exit(1)
}

/// Backing function for [`warn!`]
#[cold]
pub fn warn(args: fmt::Arguments<'_>) {
    log::warn!(target: TARGET, "[Warning] {args}");
}

/// Backing function for [`debug_print!`]
#[inline]
pub fn debug_print(args: fmt::Arguments<'_>) {
    if building_in_debug_mode() {
        log::debug!(target: TARGET, "{args}");
    }
}

/// Initialise `env_logger` with `default_level`, overridable through `RUST_LOG`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_level: LevelFilter) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level.as_str()),
    )
    .try_init();
}
