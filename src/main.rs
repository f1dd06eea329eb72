// Copyright (c) 2026 to-nes-disasm Authors.
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

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use to_nes_disasm::logging::init_logging;
use to_nes_disasm::{run, sources_from_args};

/// Reformat `da` disassembler output into a column-aligned NES listing.
#[derive(Parser, Debug)]
#[command(name = "to-nes-disasm", version, about)]
struct Cli {
    /// Input files, read in order ("-" or nothing for stdin)
    files: Vec<PathBuf>,

    /// Enable debug output on stderr
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.debug)?;

    let sources = sources_from_args(&cli.files);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = run(&sources, &mut out)?;

    log::debug!(
        "done: {} lines read, {} emitted, {} skipped",
        stats.lines_read,
        stats.lines_emitted,
        stats.lines_skipped
    );
    Ok(())
}
