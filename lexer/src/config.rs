//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Lexer and layout configuration
//!
//! # Examples
//!
//! ```
//! use wallart_lexer::{LayoutConfig, LexerConfig};
//!
//! let lexer = LexerConfig::new().with_suppress_empty_runs(true);
//! let layout = LayoutConfig::new().with_tab_width(8);
//! ```

/// Settings for run lexing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexerConfig {
    /// Drop zero-length runs, such as the one before an escape at the very
    /// start of the input or between two adjacent escapes. The escape codes
    /// themselves are still applied.
    pub suppress_empty_runs: bool,
}

impl LexerConfig {
    /// Create the default configuration, which emits every run
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable suppression of zero-length runs
    pub fn with_suppress_empty_runs(mut self, suppress: bool) -> Self {
        self.suppress_empty_runs = suppress;
        self
    }
}

/// Default distance between tab stops.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Settings for placing runs on a character grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LayoutConfig {
    /// Distance between tab stops; `0` keeps tabs as single characters
    pub tab_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the distance between tab stops
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }
}
