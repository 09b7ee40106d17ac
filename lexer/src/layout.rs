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

//! Placement of styled runs on a character grid.
//!
//! A renderer draws text at an advancing cursor. This module computes where
//! that cursor is for every piece of every run: runs are split at newlines,
//! tabs are expanded to spaces, and each non-empty piece becomes a
//! [`Fragment`] with a line and column. Nothing here knows about pixels,
//! fonts or terminal width; lines are never wrapped.

use crate::LayoutConfig;
use crate::scanner::StyledRun;
use crate::state::StyleState;
use tracing::{debug, instrument};

/// A piece of text at a fixed grid position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Zero-based line
    pub line: usize,
    /// Zero-based column, in characters
    pub column: usize,
    /// Text with tabs expanded and line breaks removed
    pub text: String,
    /// Style to draw the text with
    pub style: StyleState,
}

impl Fragment {
    /// Number of columns the fragment covers.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Grid-positioned fragments plus the extent of the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Fragments in drawing order
    pub fragments: Vec<Fragment>,
    /// Width of the widest line
    pub columns: usize,
    /// Number of lines holding content or ended by a newline, so an
    /// unterminated last line counts and a trailing newline adds nothing
    pub lines: usize,
}

impl Layout {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments placed on `line`.
    pub fn line(&self, line: usize) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter().filter(move |f| f.line == line)
    }
}

/// Places runs on a character grid.
///
/// # Examples
///
/// ```rust
/// use wallart_lexer::{LayoutConfig, layout, scan};
/// use wallart_palette::TerminalPalette;
///
/// let palette = TerminalPalette::xterm();
/// let grid = layout(scan("ab\x1b[31m\tc\nd", &palette), &LayoutConfig::default());
///
/// assert_eq!(grid.lines, 2);
/// assert_eq!(grid.columns, 5);
/// assert_eq!(grid.fragments[1].text, "  c");
/// assert_eq!(grid.fragments[1].column, 2);
/// ```
#[instrument(skip_all, fields(tab_width = config.tab_width))]
pub fn layout<'a, I>(runs: I, config: &LayoutConfig) -> Layout
where
    I: IntoIterator<Item = StyledRun<'a>>,
{
    let mut out = Layout::default();
    let mut line = 0;
    let mut column = 0;

    for run in runs {
        let mut pieces = run.text.split('\n').peekable();
        let mut first = true;
        while let Some(piece) = pieces.next() {
            if !first {
                line += 1;
                column = 0;
            }
            first = false;

            let piece = if pieces.peek().is_some() {
                piece.strip_suffix('\r').unwrap_or(piece)
            } else {
                piece
            };
            if piece.is_empty() {
                continue;
            }

            let start = column;
            let mut text = String::with_capacity(piece.len());
            for c in piece.chars() {
                if c == '\t' && config.tab_width > 0 {
                    let spaces = config.tab_width - column % config.tab_width;
                    text.extend(std::iter::repeat_n(' ', spaces));
                    column += spaces;
                } else {
                    text.push(c);
                    column += 1;
                }
            }
            out.columns = out.columns.max(column);
            out.fragments.push(Fragment {
                line,
                column: start,
                text,
                style: run.style,
            });
        }
    }

    out.lines = line + usize::from(column > 0);
    debug!(
        fragments = out.fragments.len(),
        columns = out.columns,
        lines = out.lines,
        "Laid out runs"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;
    use tracing_test::traced_test;
    use wallart_palette::{TerminalPalette, Theme};

    fn grid(text: &str) -> Layout {
        let palette = TerminalPalette::xterm();
        layout(scan(text, &palette), &LayoutConfig::default())
    }

    #[test]
    fn test_empty() {
        let out = grid("");
        assert!(out.is_empty());
        assert_eq!(out.lines, 0);
        assert_eq!(out.columns, 0);
    }

    #[test]
    fn test_lines_and_columns() {
        let out = grid("one\ntwo three\n");
        assert_eq!(out.lines, 2);
        assert_eq!(out.columns, 9);
        assert_eq!(out.fragments.len(), 2);
        assert_eq!(out.fragments[1].line, 1);
        assert_eq!(out.fragments[1].column, 0);

        let out = grid("a\n\nb");
        assert_eq!(out.lines, 3);
        assert_eq!(out.line(2).next().map(|f| f.text.as_str()), Some("b"));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(grid("hello").lines, 1);
        assert_eq!(grid("hello\n").lines, 1);
        assert_eq!(grid("a\n\nb").lines, 3);
        assert_eq!(grid("a\n\n").lines, 2);
        assert_eq!(grid("\n").lines, 1);
        // An escape alone on the last line puts nothing there
        assert_eq!(grid("a\n\x1b[31m").lines, 1);
    }

    #[test]
    fn test_styles_follow_runs_across_lines() {
        let palette = TerminalPalette::xterm();
        let out = layout(scan("x\x1b[32my\nz\x1b[0mw", &palette), &LayoutConfig::default());
        let texts: Vec<_> = out.fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "y", "z", "w"]);
        assert_eq!(out.fragments[1].column, 1);
        assert_eq!(out.fragments[2].line, 1);
        assert_eq!(out.fragments[2].style.foreground, palette.resolve(32));
        assert_eq!(out.fragments[3].column, 1);
        assert_eq!(out.fragments[3].style.foreground, palette.default_foreground());
    }

    #[test]
    fn test_tabs_expand_from_line_start() {
        let out = grid("ab\x1b[1m\tc");
        assert_eq!(out.fragments[1].text, "  c");
        assert_eq!(out.columns, 5);

        let palette = TerminalPalette::xterm();
        let out = layout(scan("a\tb", &palette), &LayoutConfig::new().with_tab_width(0));
        assert_eq!(out.fragments[0].text, "a\tb");
        assert_eq!(out.fragments[0].width(), 3);
    }

    #[test]
    fn test_crlf() {
        let out = grid("one\r\ntwo\r");
        assert_eq!(out.fragments[0].text, "one");
        // A carriage return not followed by a newline is kept
        assert_eq!(out.fragments[1].text, "two\r");
    }

    #[test]
    #[traced_test]
    fn test_layout_logs_extent() {
        let out = grid("hello");
        assert_eq!(out.columns, 5);
        assert!(logs_contain("Laid out runs"));
    }
}
