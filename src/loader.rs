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

//! ROM image loading
//!
//! Reads a ROM/cartridge dump from disk as raw bytes. The image is not
//! parsed here; format detection belongs to the emulator core.
//!
//! # Example
//!
//! ```no_run
//! use emu_helpers::helpers::units::{mb, ByteSize};
//! use emu_helpers::loader::RomLoader;
//!
//! let rom = RomLoader::new()
//!     .max_size(ByteSize(mb(512)))
//!     .load("game.3ds")
//!     .unwrap();
//! assert!(!rom.is_empty());
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{HelperError, Result};
use crate::helpers::units::ByteSize;

/// ROM loader with an optional size limit
#[derive(Debug, Clone, Default)]
pub struct RomLoader {
    /// Reject images larger than this (no limit if `None`)
    max_size: Option<ByteSize>,

    /// Accept zero-length files
    allow_empty: bool,
}

impl RomLoader {
    /// Create a loader with no size limit that rejects empty files
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject images larger than `limit`
    ///
    /// # Arguments
    ///
    /// * `limit` - Largest accepted image; an image of exactly `limit` bytes loads
    ///
    /// # Returns
    ///
    /// The loader with the limit applied
    pub fn max_size(mut self, limit: ByteSize) -> Self {
        self.max_size = Some(limit);
        self
    }

    /// Accept zero-length images
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Read the whole file at `path`
    ///
    /// The size limit and the empty check apply to the bytes actually read,
    /// not to the size reported by the filesystem: procfs files, pipes and
    /// character devices report 0. At most `limit + 1` bytes are read.
    ///
    /// # Arguments
    ///
    /// * `path` - ROM image to read
    ///
    /// # Returns
    ///
    /// The raw image bytes
    ///
    /// # Errors
    ///
    /// - [`HelperError::RomNotFound`] if the file cannot be opened
    /// - [`HelperError::RomTooLarge`] if it exceeds the configured limit
    /// - [`HelperError::EmptyRom`] if it is empty and empty files are rejected
    /// - [`HelperError::Io`] if reading fails part-way
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<u8>> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| HelperError::RomNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        // Size hint only; 0 for files without a known length
        let reported = file.metadata()?.len();

        let too_large = |got: u64| HelperError::RomTooLarge {
            path: path.to_path_buf(),
            limit: self.max_size.map_or(0, ByteSize::bytes),
            got,
        };

        let rom = match self.max_size {
            Some(limit) => {
                let limit = limit.bytes() as u64;
                if reported > limit {
                    return Err(too_large(reported));
                }

                let mut rom = Vec::with_capacity(reported as usize);
                file.take(limit + 1).read_to_end(&mut rom)?;
                if rom.len() as u64 > limit {
                    return Err(too_large(rom.len() as u64));
                }
                rom
            }
            None => {
                let mut rom = Vec::with_capacity(reported as usize);
                (&file).read_to_end(&mut rom)?;
                rom
            }
        };

        if rom.is_empty() && !self.allow_empty {
            return Err(HelperError::EmptyRom {
                path: path.to_path_buf(),
            });
        }

        log::info!(
            "{} loaded successfully ({})",
            path.display(),
            ByteSize(rom.len())
        );
        Ok(rom)
    }

    /// Like [`RomLoader::load`], but terminates the process through
    /// [`fatal!`](crate::fatal) with exit status 1 if the image cannot be read
    pub fn load_or_die<P: AsRef<Path>>(&self, path: P) -> Vec<u8> {
        match self.load(path) {
            Ok(rom) => rom,
            Err(e) => crate::fatal!("Failed to load ROM file: {}", e),
        }
    }
}

/// Read the ROM at `path` with default settings
///
/// No size limit and empty files are accepted.
///
/// # Errors
///
/// See [`RomLoader::load`].
pub fn load_rom<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    RomLoader::new().allow_empty(true).load(path)
}

/// Read the ROM at `path` with default settings, terminating the process
/// through [`fatal!`](crate::fatal) if it cannot be read
pub fn load_rom_or_die<P: AsRef<Path>>(path: P) -> Vec<u8> {
    RomLoader::new().allow_empty(true).load_or_die(path)
}
