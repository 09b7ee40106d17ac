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

//! Concrete terminal palettes.
//!
//! A [`TerminalPalette`] is the sixteen-slot color table of a terminal
//! emulator plus its default foreground and background. It implements
//! [`Theme`] with the conventional SGR code layout:
//!
//! | Code      | Resolves to             |
//! |-----------|-------------------------|
//! | `30-37`   | Slots 0-7               |
//! | `39`      | Default foreground      |
//! | `40-47`   | Slots 0-7               |
//! | `49`      | Default background      |
//! | `90-97`   | Slots 8-15 (bright)     |
//! | `100-107` | Slots 8-15 (bright)     |
//! | `16-231`  | xterm 6x6x6 color cube  |
//! | `232-255` | xterm greyscale ramp    |
//!
//! The SGR slots take precedence over the 256-color table, so `31` is always
//! the palette's red and never cube entry 31. Codes above `255` resolve to
//! the default foreground.
//!
//! Palettes can be loaded from TOML:
//!
//! ```toml
//! name = "dracula"
//! foreground = "#f8f8f2"
//! background = "#282a36"
//!
//! [ansi]
//! red = "#ff5555"
//! bright_red = "#ff6e6e"
//! ```
//!
//! Slots missing from `[ansi]` keep their xterm value, as do a missing
//! `foreground` or `background`.

use crate::{Color, PaletteError, PaletteResult, Theme};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, instrument};

/// One of the sixteen slots of a terminal palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnsiColor {
    /// Slot 0 (FG `30`, BG `40`).
    Black,
    /// Slot 1 (FG `31`, BG `41`).
    Red,
    /// Slot 2 (FG `32`, BG `42`).
    Green,
    /// Slot 3 (FG `33`, BG `43`).
    Yellow,
    /// Slot 4 (FG `34`, BG `44`).
    Blue,
    /// Slot 5 (FG `35`, BG `45`).
    Magenta,
    /// Slot 6 (FG `36`, BG `46`).
    Cyan,
    /// Slot 7 (FG `37`, BG `47`).
    White,
    /// Slot 8 (FG `90`, BG `100`).
    BrightBlack,
    /// Slot 9 (FG `91`, BG `101`).
    BrightRed,
    /// Slot 10 (FG `92`, BG `102`).
    BrightGreen,
    /// Slot 11 (FG `93`, BG `103`).
    BrightYellow,
    /// Slot 12 (FG `94`, BG `104`).
    BrightBlue,
    /// Slot 13 (FG `95`, BG `105`).
    BrightMagenta,
    /// Slot 14 (FG `96`, BG `106`).
    BrightCyan,
    /// Slot 15 (FG `97`, BG `107`).
    BrightWhite,
}

impl AnsiColor {
    /// All slots in palette order.
    pub const ALL: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::BrightBlack,
        AnsiColor::BrightRed,
        AnsiColor::BrightGreen,
        AnsiColor::BrightYellow,
        AnsiColor::BrightBlue,
        AnsiColor::BrightMagenta,
        AnsiColor::BrightCyan,
        AnsiColor::BrightWhite,
    ];

    /// Position of this slot in the palette table.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The snake_case key used for this slot in palette files.
    pub fn name(&self) -> &'static str {
        match self {
            AnsiColor::Black => "black",
            AnsiColor::Red => "red",
            AnsiColor::Green => "green",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
            AnsiColor::BrightBlack => "bright_black",
            AnsiColor::BrightRed => "bright_red",
            AnsiColor::BrightGreen => "bright_green",
            AnsiColor::BrightYellow => "bright_yellow",
            AnsiColor::BrightBlue => "bright_blue",
            AnsiColor::BrightMagenta => "bright_magenta",
            AnsiColor::BrightCyan => "bright_cyan",
            AnsiColor::BrightWhite => "bright_white",
        }
    }

    /// Looks a slot up by its palette-file key.
    pub fn from_name(name: &str) -> Option<AnsiColor> {
        AnsiColor::ALL.into_iter().find(|slot| slot.name() == name)
    }

    /// The slot a foreground or background escape code selects.
    ///
    /// Returns `None` for codes outside `30-37`, `40-47`, `90-97` and `100-107`.
    pub fn from_code(code: u32) -> Option<AnsiColor> {
        let index = match code {
            30..=37 => code - 30,
            40..=47 => code - 40,
            90..=97 => code - 90 + 8,
            100..=107 => code - 100 + 8,
            _ => return None,
        };
        AnsiColor::ALL.get(index as usize).copied()
    }
}

/// The color table of a terminal emulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalPalette {
    /// Display name
    pub name: String,
    /// Default text color
    pub foreground: Color,
    /// Default background, what SGR `49` resolves to
    pub background: Color,
    /// The sixteen palette slots, indexed by [`AnsiColor::index`]
    pub ansi: [Color; 16],
}

const XTERM: [Color; 16] = [
    Color::new(0x00, 0x00, 0x00),
    Color::new(0xcd, 0x00, 0x00),
    Color::new(0x00, 0xcd, 0x00),
    Color::new(0xcd, 0xcd, 0x00),
    Color::new(0x00, 0x00, 0xee),
    Color::new(0xcd, 0x00, 0xcd),
    Color::new(0x00, 0xcd, 0xcd),
    Color::new(0xe5, 0xe5, 0xe5),
    Color::new(0x7f, 0x7f, 0x7f),
    Color::new(0xff, 0x00, 0x00),
    Color::new(0x00, 0xff, 0x00),
    Color::new(0xff, 0xff, 0x00),
    Color::new(0x5c, 0x5c, 0xff),
    Color::new(0xff, 0x00, 0xff),
    Color::new(0x00, 0xff, 0xff),
    Color::new(0xff, 0xff, 0xff),
];

const WITCHHAZEL: [Color; 16] = [
    Color::new(0x28, 0x26, 0x34),
    Color::new(0xff, 0x85, 0x7f),
    Color::new(0xc2, 0xff, 0xdf),
    Color::new(0xff, 0xf3, 0x52),
    Color::new(0xc5, 0xa3, 0xff),
    Color::new(0xdc, 0x8c, 0xc3),
    Color::new(0x81, 0xee, 0xf3),
    Color::new(0xf8, 0xf8, 0xf2),
    Color::new(0x71, 0x67, 0x99),
    Color::new(0xff, 0xb8, 0xd1),
    Color::new(0xd5, 0xff, 0xf0),
    Color::new(0xff, 0xf9, 0xa8),
    Color::new(0xd7, 0xc5, 0xff),
    Color::new(0xff, 0xc7, 0xec),
    Color::new(0xb3, 0xf7, 0xfa),
    Color::new(0xff, 0xff, 0xff),
];

const BUILTIN_NAMES: [&str; 2] = ["xterm", "witchhazel"];

/// Channel levels of the xterm 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// The fixed xterm 256-color entry for `index`, outside the sixteen slots.
fn indexed_color(index: u32) -> Option<Color> {
    match index {
        16..=231 => {
            let cube = (index - 16) as usize;
            Some(Color::new(
                CUBE_LEVELS[cube / 36],
                CUBE_LEVELS[(cube / 6) % 6],
                CUBE_LEVELS[cube % 6],
            ))
        }
        232..=255 => {
            let level = (8 + 10 * (index - 232)) as u8;
            Some(Color::new(level, level, level))
        }
        _ => None,
    }
}

impl TerminalPalette {
    /// Creates a palette from its parts.
    pub fn new(
        name: impl Into<String>,
        foreground: Color,
        background: Color,
        ansi: [Color; 16],
    ) -> Self {
        Self {
            name: name.into(),
            foreground,
            background,
            ansi,
        }
    }

    /// Classic xterm colors, white text on black.
    pub fn xterm() -> Self {
        Self::new("xterm", Color::WHITE, Color::BLACK, XTERM)
    }

    /// Soft pastels on a dusky purple background.
    pub fn witchhazel() -> Self {
        Self::new(
            "witchhazel",
            Color::new(0xf8, 0xf8, 0xf2),
            Color::new(0x43, 0x3e, 0x56),
            WITCHHAZEL,
        )
    }

    /// Names accepted by [`TerminalPalette::builtin`].
    pub fn builtin_names() -> &'static [&'static str] {
        &BUILTIN_NAMES
    }

    /// Returns the built-in palette with the given name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "xterm" => Some(Self::xterm()),
            "witchhazel" => Some(Self::witchhazel()),
            _ => None,
        }
    }

    /// The color stored in a slot.
    pub fn color(&self, slot: AnsiColor) -> Color {
        self.ansi[slot.index()]
    }

    /// Replaces the color stored in a slot.
    pub fn set_color(&mut self, slot: AnsiColor, color: Color) {
        self.ansi[slot.index()] = color;
    }

    /// Looks an escape code up in the resolution table without falling back.
    ///
    /// SGR slot codes win over the 256-color cube and greyscale ramp.
    pub fn lookup(&self, code: u32) -> Option<Color> {
        match code {
            39 => Some(self.foreground),
            49 => Some(self.background),
            _ => AnsiColor::from_code(code)
                .map(|slot| self.color(slot))
                .or_else(|| indexed_color(code)),
        }
    }

    /// Parses a palette from TOML text.
    pub fn from_toml(source: &str) -> PaletteResult<Self> {
        let file: PaletteFile = toml::from_str(source)?;
        let mut palette = Self::xterm();
        palette.name = file.name.unwrap_or_else(|| "custom".to_string());
        if let Some(value) = file.foreground {
            palette.foreground = parse_color("foreground", &value)?;
        }
        if let Some(value) = file.background {
            palette.background = parse_color("background", &value)?;
        }
        for (key, value) in file.ansi {
            let slot =
                AnsiColor::from_name(&key).ok_or_else(|| PaletteError::UnknownColorSlot(key.clone()))?;
            let color = parse_color(&format!("ansi.{}", key), &value)?;
            palette.set_color(slot, color);
        }
        Ok(palette)
    }

    /// Reads and parses a TOML palette file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> PaletteResult<Self> {
        let path = path.as_ref();
        debug!("Loading palette file");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Loads a built-in palette by name, or else a palette file at that path.
    pub fn load(name_or_path: &str) -> PaletteResult<Self> {
        if let Some(palette) = Self::builtin(name_or_path) {
            return Ok(palette);
        }
        if Path::new(name_or_path).is_file() {
            return Self::from_file(name_or_path);
        }
        Err(PaletteError::UnknownPalette(name_or_path.to_string()))
    }
}

impl Default for TerminalPalette {
    fn default() -> Self {
        Self::xterm()
    }
}

impl Theme for TerminalPalette {
    fn default_foreground(&self) -> Color {
        self.foreground
    }

    fn resolve(&self, code: u32) -> Color {
        match self.lookup(code) {
            Some(color) => color,
            None => {
                debug!(code, palette = %self.name, "No palette entry for escape code");
                self.foreground
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    name: Option<String>,
    foreground: Option<String>,
    background: Option<String>,
    #[serde(default)]
    ansi: BTreeMap<String, String>,
}

fn parse_color(field: &str, value: &str) -> PaletteResult<Color> {
    Color::from_hex(value).ok_or_else(|| PaletteError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
    })
}
