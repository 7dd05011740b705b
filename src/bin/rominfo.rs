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

use std::path::PathBuf;

use clap::Parser;
use emu_helpers::config::HelpersConfig;
use emu_helpers::diagnostics::init_logging;
use emu_helpers::fatal;
use emu_helpers::helpers::bit_cast::{bit_cast, STRATEGY};
use emu_helpers::helpers::rotate::rotl;
use emu_helpers::helpers::units::ByteSize;
use emu_helpers::loader::RomLoader;
use log::info;

/// Dump basic information about a ROM image
#[derive(Parser)]
#[command(name = "rominfo")]
#[command(about = "ROM image inspector", long_about = None)]
struct Args {
    /// Path to the ROM image (defaults to `rom_path` from the config)
    rom: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of header words to print
    #[arg(short = 'w', long, default_value = "8")]
    words: usize,
}

/// Rotate-xor digest over 32-bit words
fn digest(rom: &[u8]) -> u32 {
    rom.chunks(4).fold(0x811C_9DC5u32, |acc, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        rotl(acc, 5) ^ u32::from_le(bit_cast::<u32, [u8; 4]>(word))
    })
}

fn main() {
    let args = Args::parse();

    let config = match HelpersConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(log::LevelFilter::Info);
            fatal!("{}", e);
        }
    };

    init_logging(config.log_level);

    info!("rominfo v{}", env!("CARGO_PKG_VERSION"));
    info!("bit_cast strategy: {}", STRATEGY);

    let rom_path = match args.rom.or(config.rom_path) {
        Some(path) => path,
        None => fatal!("No ROM given on the command line or in the config"),
    };

    let rom = RomLoader::new()
        .max_size(config.max_rom_size)
        .load_or_die(&rom_path);

    println!("File:   {}", rom_path.display());
    println!("Size:   {} ({} bytes)", ByteSize(rom.len()), rom.len());
    println!("Digest: {:08X}", digest(&rom));

    for (i, chunk) in rom.chunks_exact(4).take(args.words).enumerate() {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        println!("  +{:04X}: {:08X}", i * 4, word);
    }
}
