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

//! Logger setup. Everything goes to stderr; stdout carries only the listing.

use anyhow::Result;
use flexi_logger::{Logger, LoggerHandle};

pub fn log_spec(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "warn"
    }
}

/// Start the logger. Keep the returned handle alive for the whole run.
pub fn init_logging(debug: bool) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str(log_spec(debug))?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
