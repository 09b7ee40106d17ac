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

use crate::code::find_escape;
use std::borrow::Cow;

/// Removes recognized SGR escape sequences from a string.
///
/// The result is exactly the concatenated text of the runs [`scan`](crate::scan)
/// would produce for the same input: each `ESC [ n ( ; n ( ; n )? )? m`
/// sequence is dropped, introducer included, and every other byte is kept.
/// Sequences outside that grammar, such as cursor movement or extended color
/// forms, stay in the output.
///
/// # Performance
///
/// If the input contains no recognized sequence, the original string is
/// returned borrowed without allocating.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use wallart_lexer::strip_escapes;
///
/// assert_eq!(strip_escapes("\x1b[1;31;40mRed Text\x1b[0m"), "Red Text");
///
/// let plain = strip_escapes("Plain Text");
/// assert!(matches!(plain, Cow::Borrowed(_)));
///
/// // Not an SGR sequence, left alone
/// assert_eq!(strip_escapes("\x1b[2Jclear"), "\x1b[2Jclear");
/// ```
pub fn strip_escapes(text: &str) -> Cow<'_, str> {
    let Some(mut found) = find_escape(text, 0) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len());
    let mut pos = 0;
    loop {
        result.push_str(&text[pos..found.start]);
        pos = found.end;
        match find_escape(text, pos) {
            Some(next) => found = next,
            None => break,
        }
    }
    result.push_str(&text[pos..]);

    Cow::Owned(result)
}
