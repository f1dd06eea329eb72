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

//! Input sources. Files named on the command line are read back to back as
//! one stream; with none given we read stdin.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::reformat::{reformat_stream, ReformatStats};
use crate::utils::display_path;

const READ_BUF_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(arg.to_path_buf())
        }
    }

    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => display_path(path),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::with_capacity(
                READ_BUF_SIZE,
                io::stdin().lock(),
            ))),
            InputSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open {}", display_path(path)))?;
                Ok(Box::new(BufReader::with_capacity(READ_BUF_SIZE, file)))
            }
        }
    }
}

/// Map positional arguments to sources; no arguments means stdin.
pub fn sources_from_args(args: &[PathBuf]) -> Vec<InputSource> {
    if args.is_empty() {
        return vec![InputSource::Stdin];
    }
    args.iter().map(|a| InputSource::from_arg(a)).collect()
}

/// Reformat every source in order into `writer`.
///
/// A source is opened only once the previous one is drained, so a bad path
/// later in the list aborts the run after earlier output has been written.
pub fn run<W: Write>(sources: &[InputSource], writer: &mut W) -> Result<ReformatStats> {
    let mut total = ReformatStats::default();
    for source in sources {
        log::debug!("reading {}", source.name());
        let reader = source.open()?;
        let stats = reformat_stream(reader, writer)
            .with_context(|| format!("error while reformatting {}", source.name()))?;
        log::debug!(
            "{}: {} lines read, {} emitted, {} skipped",
            source.name(),
            stats.lines_read,
            stats.lines_emitted,
            stats.lines_skipped
        );
        total.merge(&stats);
    }
    writer.flush().context("cannot flush output")?;
    Ok(total)
}
