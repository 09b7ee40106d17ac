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

use crate::LexerConfig;
use crate::code::find_escape;
use crate::state::StyleState;
use std::fmt;
use std::iter::FusedIterator;
use tracing::trace;
use wallart_palette::Theme;

/// A span of input text together with the style it is drawn in.
///
/// The style is a snapshot taken when the run was emitted. `start` is the
/// byte offset of `text` in the scanned input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledRun<'a> {
    /// Byte offset of the run in the input
    pub start: usize,
    /// Style in effect for this run
    pub style: StyleState,
    /// The literal text, escape sequences removed
    pub text: &'a str,
}

impl<'a> StyledRun<'a> {
    /// Byte offset just past the run.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Length of the run in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the run holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Copies the text so the run can outlive the input.
    pub fn into_owned(self) -> OwnedStyledRun {
        OwnedStyledRun {
            start: self.start,
            style: self.style,
            text: self.text.to_string(),
        }
    }
}

/// A [`StyledRun`] that owns its text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedStyledRun {
    /// Byte offset of the run in the input
    pub start: usize,
    /// Style in effect for this run
    pub style: StyleState,
    /// The literal text, escape sequences removed
    pub text: String,
}

impl<'a> From<StyledRun<'a>> for OwnedStyledRun {
    fn from(run: StyledRun<'a>) -> Self {
        run.into_owned()
    }
}

/// Lazy iterator over the styled runs of one input.
///
/// Created by [`scan`] or [`Lexer::scan`]. Each `Runs` owns its own
/// [`StyleState`]; cloning it forks the scan at the current position.
pub struct Runs<'a, T: ?Sized> {
    text: &'a str,
    theme: &'a T,
    state: StyleState,
    pos: usize,
    done: bool,
    suppress_empty: bool,
}

impl<'a, T: Theme + ?Sized> Runs<'a, T> {
    fn new(text: &'a str, theme: &'a T, config: &LexerConfig) -> Self {
        Self {
            text,
            theme,
            state: StyleState::new(theme),
            pos: 0,
            done: false,
            suppress_empty: config.suppress_empty_runs,
        }
    }

    /// The style the next run will be emitted with.
    pub fn state(&self) -> &StyleState {
        &self.state
    }

    /// Consumes the iterator, returning the current style.
    ///
    /// After the iterator is exhausted this is the style at the end of input.
    pub fn into_state(self) -> StyleState {
        self.state
    }

    /// Byte offset the next run starts at.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn next_run(&mut self) -> Option<StyledRun<'a>> {
        if self.done {
            return None;
        }
        let start = self.pos;
        match find_escape(self.text, start) {
            Some(found) => {
                let run = StyledRun {
                    start,
                    style: self.state,
                    text: &self.text[start..found.start],
                };
                self.state.apply(&found.code, self.theme);
                self.pos = found.end;
                Some(run)
            }
            None => {
                self.done = true;
                self.pos = self.text.len();
                Some(StyledRun {
                    start,
                    style: self.state,
                    text: &self.text[start..],
                })
            }
        }
    }
}

impl<'a, T: Theme + ?Sized> Iterator for Runs<'a, T> {
    type Item = StyledRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let run = self.next_run()?;
            if self.suppress_empty && run.is_empty() {
                continue;
            }
            trace!(start = run.start, len = run.len(), "Emitting styled run");
            return Some(run);
        }
    }
}

impl<'a, T: Theme + ?Sized> FusedIterator for Runs<'a, T> {}

impl<'a, T: ?Sized> Clone for Runs<'a, T> {
    fn clone(&self) -> Self {
        Self {
            text: self.text,
            theme: self.theme,
            state: self.state,
            pos: self.pos,
            done: self.done,
            suppress_empty: self.suppress_empty,
        }
    }
}

impl<'a, T: ?Sized> fmt::Debug for Runs<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runs")
            .field("state", &self.state)
            .field("pos", &self.pos)
            .field("len", &self.text.len())
            .field("done", &self.done)
            .finish()
    }
}

/// Splits `text` into styled runs, resolving colors through `theme`.
///
/// Every run, including zero-length ones, is emitted. Use [`Lexer`] with a
/// [`LexerConfig`] to change that.
///
/// # Examples
///
/// ```rust
/// use wallart_lexer::scan;
/// use wallart_palette::{TerminalPalette, Theme};
///
/// let palette = TerminalPalette::xterm();
/// let runs: Vec<_> = scan("A\x1b[31mB\x1b[0mC", &palette).collect();
///
/// assert_eq!(runs.len(), 3);
/// assert_eq!(runs[1].text, "B");
/// assert_eq!(runs[1].style.foreground, palette.resolve(31));
/// assert_eq!(runs[2].style.foreground, palette.default_foreground());
/// ```
pub fn scan<'a, T: Theme + ?Sized>(text: &'a str, theme: &'a T) -> Runs<'a, T> {
    Runs::new(text, theme, &LexerConfig::default())
}

/// A theme paired with lexing settings, for scanning many inputs alike.
///
/// Scans share nothing but the read-only theme, so one `Lexer` can serve
/// several threads when `T: Sync`.
#[derive(Clone, Debug)]
pub struct Lexer<T> {
    theme: T,
    config: LexerConfig,
}

impl<T: Theme> Lexer<T> {
    /// Creates a lexer with the default configuration.
    pub fn new(theme: T) -> Self {
        Self::with_config(theme, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration.
    pub fn with_config(theme: T, config: LexerConfig) -> Self {
        Self { theme, config }
    }

    /// The theme colors are resolved through.
    pub fn theme(&self) -> &T {
        &self.theme
    }

    /// The active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Splits `text` into styled runs.
    pub fn scan<'a>(&'a self, text: &'a str) -> Runs<'a, T> {
        Runs::new(text, &self.theme, &self.config)
    }
}
