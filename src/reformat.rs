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

//! Streaming side of the reformatter: pulls lines from a reader, one at a
//! time, and hands back only the ones that matched.

use std::io::{self, BufRead, Write};

use crate::listing::parse_line;

/// Reformat one input line. `None` means the line is dropped.
pub fn reformat_line(line: &str) -> Option<String> {
    parse_line(line).map(|rec| rec.format_line())
}

/// Line counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReformatStats {
    pub lines_read: u64,
    pub lines_emitted: u64,
    pub lines_skipped: u64,
}

impl ReformatStats {
    pub fn merge(&mut self, other: &ReformatStats) {
        self.lines_read += other.lines_read;
        self.lines_emitted += other.lines_emitted;
        self.lines_skipped += other.lines_skipped;
    }
}

/// Lazy sequence of reformatted lines over a buffered reader.
///
/// Non-matching lines are consumed and skipped; the iterator only yields
/// output lines (or the I/O error that stopped the read).
pub struct ReformattedLines<R> {
    reader: R,
    buf: Vec<u8>,
    stats: ReformatStats,
    done: bool,
}

impl<R: BufRead> ReformattedLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            stats: ReformatStats::default(),
            done: false,
        }
    }

    pub fn stats(&self) -> ReformatStats {
        self.stats
    }

    /// Read the next raw line with its terminator stripped. `Ok(false)` at EOF.
    fn next_raw_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for ReformattedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.next_raw_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
            self.stats.lines_read += 1;

            let line = String::from_utf8_lossy(&self.buf);
            match reformat_line(&line) {
                Some(out) => {
                    self.stats.lines_emitted += 1;
                    return Some(Ok(out));
                }
                None => {
                    self.stats.lines_skipped += 1;
                    log::trace!("skipping line {}: {:?}", self.stats.lines_read, line);
                }
            }
        }
        None
    }
}

/// Reformat everything `reader` yields into `writer`, one line per match.
pub fn reformat_stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
) -> io::Result<ReformatStats> {
    let mut lines = ReformattedLines::new(reader);
    for out in lines.by_ref() {
        writeln!(writer, "{}", out?)?;
    }
    Ok(lines.stats())
}
