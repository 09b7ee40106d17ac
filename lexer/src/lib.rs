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

//! Styled run lexing for terminal captures.
//!
//! Raw terminal output carries its colors inline as ANSI Select Graphic
//! Rendition escape codes. [`scan`] walks such text once, left to right, and
//! yields [`StyledRun`]s: the literal text between escape codes, each paired
//! with the foreground, background and decoration in effect for it. Colors are
//! resolved through a [`Theme`](wallart_palette::Theme), usually a
//! [`TerminalPalette`](wallart_palette::TerminalPalette).
//!
//! [`layout`] then places the runs on a character grid for drawing.

mod code;
mod config;
mod layout;
mod scanner;
mod state;
mod strip;

pub use self::code::{ESC, EscapeCode, EscapeMatch, MAX_ARGUMENTS, Selectors, find_escape};
pub use self::config::{DEFAULT_TAB_WIDTH, LayoutConfig, LexerConfig};
pub use self::layout::{Fragment, Layout, layout};
pub use self::scanner::{Lexer, OwnedStyledRun, Runs, StyledRun, scan};
pub use self::state::{COLOR_CODE_THRESHOLD, Decoration, StyleState};
pub use self::strip::strip_escapes;
