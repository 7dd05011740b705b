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

//! Host configuration
//!
//! Settings for the tools built on this crate, read from a TOML file and then
//! overridden by environment variables (a `.env` file is honoured through
//! `dotenvy`).
//!
//! ```toml
//! rom_path = "roms/game.3ds"
//! log_level = "debug"
//! max_rom_size = "2GB"
//! ```
//!
//! | Variable                   | Field          |
//! |----------------------------|----------------|
//! | `EMU_HELPERS_ROM`          | `rom_path`     |
//! | `EMU_HELPERS_LOG`          | `log_level`    |
//! | `EMU_HELPERS_MAX_ROM_SIZE` | `max_rom_size` |

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{HelperError, Result};
use crate::helpers::units::{gb, ByteSize};

pub const ENV_ROM: &str = "EMU_HELPERS_ROM";
pub const ENV_LOG: &str = "EMU_HELPERS_LOG";
pub const ENV_MAX_ROM_SIZE: &str = "EMU_HELPERS_MAX_ROM_SIZE";

/// Default ROM size limit
pub const DEFAULT_MAX_ROM_SIZE: ByteSize = ByteSize(gb(2));

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelpersConfig {
    /// ROM to load when none is given on the command line
    pub rom_path: Option<PathBuf>,

    /// Default log level (`RUST_LOG` still wins)
    #[serde(deserialize_with = "deserialize_level")]
    pub log_level: LevelFilter,

    /// Largest accepted ROM image
    pub max_rom_size: ByteSize,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            rom_path: None,
            log_level: LevelFilter::Info,
            max_rom_size: DEFAULT_MAX_ROM_SIZE,
        }
    }
}

impl HelpersConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::Config`] on malformed TOML, unknown keys or bad values
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| HelperError::Config(e.to_string()))
    }

    /// Read configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::Io`] if the file cannot be read, otherwise as
    /// [`HelpersConfig::parse`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Load `.env` if present, then build the configuration from `file`
    /// (or defaults) with environment overrides applied
    ///
    /// # Arguments
    ///
    /// * `file` - Optional TOML file; `None` starts from [`HelpersConfig::default`]
    ///
    /// # Returns
    ///
    /// The merged configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `file` cannot be read or parsed, or if an
    /// `EMU_HELPERS_*` variable holds an invalid value. A missing `.env` is
    /// not an error; an unreadable one is logged and skipped.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Failed to load .env file: {}", e);
            }
        }

        let config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` (normally the process environment)
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    ///
    /// The configuration with [`ENV_ROM`], [`ENV_LOG`] and
    /// [`ENV_MAX_ROM_SIZE`] applied over the current values
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::Config`] for an unknown log level and
    /// [`HelperError::InvalidByteSize`] for an unparsable size
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rom) = lookup(ENV_ROM) {
            self.rom_path = Some(PathBuf::from(rom));
        }

        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level
                .parse()
                .map_err(|_| HelperError::Config(format!("{ENV_LOG}: invalid level {level:?}")))?;
        }

        if let Some(size) = lookup(ENV_MAX_ROM_SIZE) {
            self.max_rom_size = size.parse()?;
        }

        Ok(self)
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    text.parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid log level {text:?}")))
}
