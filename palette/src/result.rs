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

//! Error types for palette loading.

use thiserror::Error;

/// Result type for palette operations
pub type PaletteResult<T> = std::result::Result<T, PaletteError>;

/// Errors raised while loading or parsing a terminal palette.
///
/// Color resolution itself never fails; only getting a palette into memory can.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// I/O error while reading a palette file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The palette file is not valid TOML or does not have the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color field did not hold a `#rrggbb` value
    #[error("Invalid color '{value}' for '{field}'")]
    InvalidColor {
        /// Name of the offending field
        field: String,
        /// The value found there
        value: String,
    },

    /// A key under `[ansi]` does not name one of the sixteen palette slots
    #[error("Unknown color slot '{0}'")]
    UnknownColorSlot(String),

    /// No built-in palette has the requested name
    #[error("Unknown palette '{0}'")]
    UnknownPalette(String),
}

impl PaletteError {
    /// Check if the error came from reading the palette source rather than its content
    pub fn is_io_error(&self) -> bool {
        matches!(self, PaletteError::Io(_))
    }
}
