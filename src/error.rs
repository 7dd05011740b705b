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

//! Error types for the host-side collaborators (ROM loading, configuration).
//!
//! The [`crate::helpers`] primitives never fail at runtime and have no error
//! type of their own.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for host-side operations
pub type Result<T> = std::result::Result<T, HelperError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Couldn't read {}", path.display())]
    RomNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ROM {} is {got} bytes (limit {limit})", path.display())]
    RomTooLarge {
        path: PathBuf,
        limit: usize,
        got: u64,
    },

    #[error("ROM {} is empty", path.display())]
    EmptyRom { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid byte size: {0:?}")]
    InvalidByteSize(String),
}
