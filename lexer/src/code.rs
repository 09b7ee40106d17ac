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

//! The escape grammar.
//!
//! Only one shape of Select Graphic Rendition sequence is recognized:
//!
//! ```text
//! ESC [ <digits> ( ; <digits> ( ; <digits> )? )? m
//! ```
//!
//! Anything else that starts with `ESC [` (more than three arguments, an empty
//! argument, a terminator other than `m`) is not an escape code and stays in
//! the text.

/// The escape character that introduces every sequence.
pub const ESC: u8 = 0x1b;

/// Maximum number of arguments the grammar accepts.
pub const MAX_ARGUMENTS: usize = 3;

/// The arguments of one matched escape sequence.
///
/// `arity` records how many arguments the grammar matched, independently of
/// whether each one could be converted to a number. An argument too large for
/// a `u32` is matched but holds no value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EscapeCode {
    args: [Option<u32>; MAX_ARGUMENTS],
    arity: usize,
}

/// The roles an escape code's arguments play when applied to a style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selectors {
    /// Selects reset or a decoration
    pub style: Option<u32>,
    /// Selects a foreground color when above 30
    pub foreground: Option<u32>,
    /// Selects a background color when above 30
    pub background: Option<u32>,
}

/// Location and content of an escape sequence inside a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscapeMatch {
    /// Byte offset of the `ESC` introducer
    pub start: usize,
    /// Byte offset just past the `m` terminator
    pub end: usize,
    /// The parsed arguments
    pub code: EscapeCode,
}

impl EscapeCode {
    /// Builds an escape code from up to three argument values.
    ///
    /// The arity is the position of the last present argument.
    pub fn new(arg1: Option<u32>, arg2: Option<u32>, arg3: Option<u32>) -> Self {
        let args = [arg1, arg2, arg3];
        let arity = args.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
        Self { args, arity }
    }

    /// Number of arguments matched by the grammar.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Value of the argument at `index` (zero based).
    pub fn arg(&self, index: usize) -> Option<u32> {
        self.args.get(index).copied().flatten()
    }

    /// All three argument slots.
    pub fn args(&self) -> [Option<u32>; MAX_ARGUMENTS] {
        self.args
    }

    /// Whether the second and third arguments were both matched.
    pub fn is_three_argument_form(&self) -> bool {
        self.arity == MAX_ARGUMENTS
    }

    /// Assigns the arguments to their roles.
    ///
    /// In the three argument form the arguments are style, foreground and
    /// background in that order. Otherwise the first argument is both the
    /// style and the foreground selector and the second is the background.
    pub fn selectors(&self) -> Selectors {
        if self.is_three_argument_form() {
            Selectors {
                style: self.args[0],
                foreground: self.args[1],
                background: self.args[2],
            }
        } else {
            Selectors {
                style: self.args[0],
                foreground: self.args[0],
                background: self.args[1],
            }
        }
    }

    /// Matches an escape sequence starting exactly at byte `index` of `text`.
    pub fn parse_at(text: &str, index: usize) -> Option<EscapeMatch> {
        let bytes = text.as_bytes();
        if bytes.get(index) != Some(&ESC) || bytes.get(index + 1) != Some(&b'[') {
            return None;
        }

        let mut code = EscapeCode::default();
        let (value, mut cursor) = digits(bytes, index + 2)?;
        code.args[0] = value;
        code.arity = 1;

        while code.arity < MAX_ARGUMENTS && bytes.get(cursor) == Some(&b';') {
            let (value, next) = digits(bytes, cursor + 1)?;
            code.args[code.arity] = value;
            code.arity += 1;
            cursor = next;
        }

        if bytes.get(cursor) != Some(&b'm') {
            return None;
        }

        Some(EscapeMatch {
            start: index,
            end: cursor + 1,
            code,
        })
    }
}

/// Finds the first escape sequence starting at or after byte `from`.
pub fn find_escape(text: &str, from: usize) -> Option<EscapeMatch> {
    let bytes = text.as_bytes();
    let mut cursor = from;
    while cursor < bytes.len() {
        let offset = bytes[cursor..].iter().position(|&b| b == ESC)?;
        let candidate = cursor + offset;
        if let Some(found) = EscapeCode::parse_at(text, candidate) {
            return Some(found);
        }
        cursor = candidate + 1;
    }
    None
}

/// Reads a run of ASCII digits at `at`.
///
/// Returns `None` when there is no digit at `at`, otherwise the numeric value
/// (absent on overflow) and the offset after the last digit.
fn digits(bytes: &[u8], at: usize) -> Option<(Option<u32>, usize)> {
    let rest = bytes.get(at..)?;
    let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    let value = rest[..len].iter().try_fold(0u32, |acc, &b| {
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    });
    Some((value, at + len))
}
