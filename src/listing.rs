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

//! The `da` disassembler prints one instruction per line as
//!
//! ```text
//! $8000: LDA #$01       (A901)
//! $8003:                (EA)
//! ```
//!
//! This module picks those lines apart and lays them out again as an
//! assembler-friendly listing:
//!
//! ```text
//! $8000	A901  	LDA #$01
//! $8003	EA  	.byte $EA
//! ```
//!
//! Anything that does not look like a `da` line is ignored.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Byte slots reserved for the encoding column.
const ENCODING_SLOTS: usize = 4;
/// Mnemonics of this length get one space of padding so bare opcodes line up.
const SHORT_MNEMONIC_LEN: usize = 3;

static RECORD_RE: OnceLock<Regex> = OnceLock::new();

fn record_re() -> &'static Regex {
    RECORD_RE.get_or_init(|| {
        Regex::new(r"^\$(.*): (.*) \((.*)\)$").expect("record pattern is a valid regex")
    })
}

/// One matched line of disassembler output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub address: String,
    /// Trimmed; padded to four characters when it is a bare 3-letter mnemonic.
    pub assembly: String,
    /// Hex digits with any whitespace between byte pairs removed.
    pub encoding: String,
}

impl ParsedRecord {
    pub fn new(address: &str, assembly: &str, encoding: &str) -> Self {
        let mut assembly = assembly.trim().to_string();
        if assembly.chars().count() == SHORT_MNEMONIC_LEN {
            assembly.push(' ');
        }
        let encoding: String = encoding.chars().filter(|c| !c.is_whitespace()).collect();
        Self {
            address: address.to_string(),
            assembly,
            encoding,
        }
    }

    pub fn byte_count(&self) -> usize {
        self.encoding.chars().count() / 2
    }

    /// Spaces inserted after the encoding. Undecoded bytes get one fewer so the
    /// `.byte` directive's extra width is absorbed.
    pub fn spacing(&self) -> usize {
        let empty_penalty = usize::from(self.assembly.is_empty());
        ENCODING_SLOTS.saturating_sub(self.byte_count() + empty_penalty)
    }

    pub fn text(&self) -> String {
        if self.assembly.is_empty() {
            format!(".byte ${}", self.encoding)
        } else {
            self.assembly.clone()
        }
    }

    pub fn format_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParsedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}\t{}{:width$}\t{}",
            self.address,
            self.encoding,
            "",
            self.text(),
            width = self.spacing()
        )
    }
}

/// Match a single line (without its terminator) against the `da` layout.
pub fn parse_line(line: &str) -> Option<ParsedRecord> {
    let caps = record_re().captures(line)?;
    Some(ParsedRecord::new(&caps[1], &caps[2], &caps[3]))
}
