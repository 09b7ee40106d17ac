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

use crate::code::{EscapeCode, Selectors};
use tracing::trace;
use wallart_palette::{Color, Theme};

/// Escape codes at or below this value never select a color.
pub const COLOR_CODE_THRESHOLD: u32 = 30;

/// The weight, slant or underline applied to a run.
///
/// Decorations are mutually exclusive: setting one replaces whatever was set
/// before.
///
/// | Code | Decoration  |
/// |------|-------------|
/// | `1`  | Bold        |
/// | `2`  | Faint       |
/// | `3`  | Italic      |
/// | `4`  | Underline   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// Increased weight.
    Bold,
    /// Decreased intensity.
    Faint,
    /// Slanted text.
    Italic,
    /// Single underline.
    Underline,
}

impl Decoration {
    /// Converts the decoration to its SGR code.
    pub fn code(&self) -> u32 {
        match self {
            Decoration::Bold => 1,
            Decoration::Faint => 2,
            Decoration::Italic => 3,
            Decoration::Underline => 4,
        }
    }

    /// Converts an SGR code to a decoration.
    pub fn from_code(code: u32) -> Option<Decoration> {
        match code {
            1 => Some(Decoration::Bold),
            2 => Some(Decoration::Faint),
            3 => Some(Decoration::Italic),
            4 => Some(Decoration::Underline),
            _ => None,
        }
    }
}

/// The resolved style text is drawn with.
///
/// A scan owns exactly one `StyleState` and mutates it in place as escape
/// codes are applied. The type is `Copy`, so every emitted run holds its own
/// snapshot and later mutations never reach runs already handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// Text color.
    pub foreground: Color,
    /// Fill behind the text, `None` for the canvas background.
    pub background: Option<Color>,
    /// Weight, slant or underline, `None` for plain text.
    pub decoration: Option<Decoration>,
}

impl StyleState {
    /// The initial state of a scan: the theme's foreground, no background, no
    /// decoration.
    pub fn new<T: Theme + ?Sized>(theme: &T) -> Self {
        Self {
            foreground: theme.default_foreground(),
            background: None,
            decoration: None,
        }
    }

    /// Returns to the initial state.
    pub fn reset<T: Theme + ?Sized>(&mut self, theme: &T) {
        *self = Self::new(theme);
    }

    /// Applies one escape code.
    ///
    /// Reset, decoration, foreground and background are checked independently
    /// and in that order, so `ESC[0;0;31m` resets and then sets the foreground.
    /// Absent arguments match nothing. This never fails.
    pub fn apply<T: Theme + ?Sized>(&mut self, code: &EscapeCode, theme: &T) {
        let Selectors {
            style,
            foreground,
            background,
        } = code.selectors();

        if style == Some(0) {
            self.reset(theme);
        }
        if let Some(decoration) = style.and_then(Decoration::from_code) {
            self.decoration = Some(decoration);
        }
        if let Some(selector) = foreground.filter(|&c| c > COLOR_CODE_THRESHOLD) {
            self.foreground = theme.resolve(selector);
        }
        if let Some(selector) = background.filter(|&c| c > COLOR_CODE_THRESHOLD) {
            self.background = Some(theme.resolve(selector));
        }

        trace!(?code, state = ?self, "Applied escape code");
    }

    /// Whether text should be drawn bold.
    pub fn is_bold(&self) -> bool {
        self.decoration == Some(Decoration::Bold)
    }

    /// Whether text should be drawn faint.
    pub fn is_faint(&self) -> bool {
        self.decoration == Some(Decoration::Faint)
    }

    /// Whether text should be drawn italic.
    pub fn is_italic(&self) -> bool {
        self.decoration == Some(Decoration::Italic)
    }

    /// Whether text should be underlined.
    pub fn is_underline(&self) -> bool {
        self.decoration == Some(Decoration::Underline)
    }
}
