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

use crate::Color;
use std::rc::Rc;
use std::sync::Arc;

/// Resolves SGR escape codes to concrete colors.
///
/// A `Theme` is consumed read-only by the run lexer: it supplies the
/// foreground a scan starts with (and returns to on reset), and maps each
/// color-selecting escape code (`31`, `42`, `97`, ...) to a [`Color`].
///
/// Resolution is infallible. Codes a theme has no entry for resolve to
/// whatever the theme considers a sensible fallback; callers never see an
/// error.
///
/// # Examples
///
/// ```rust
/// use wallart_palette::{Color, Theme};
///
/// struct Mono;
///
/// impl Theme for Mono {
///     fn default_foreground(&self) -> Color {
///         Color::WHITE
///     }
///     fn resolve(&self, _code: u32) -> Color {
///         Color::new(0x80, 0x80, 0x80)
///     }
/// }
///
/// assert_eq!(Mono.resolve(31), Color::new(0x80, 0x80, 0x80));
/// ```
pub trait Theme {
    /// The foreground color text starts with, and returns to on SGR `0`.
    fn default_foreground(&self) -> Color;

    /// Maps an escape code to a color.
    fn resolve(&self, code: u32) -> Color;
}

impl<T: Theme + ?Sized> Theme for &T {
    fn default_foreground(&self) -> Color {
        (**self).default_foreground()
    }

    fn resolve(&self, code: u32) -> Color {
        (**self).resolve(code)
    }
}

impl<T: Theme + ?Sized> Theme for Box<T> {
    fn default_foreground(&self) -> Color {
        (**self).default_foreground()
    }

    fn resolve(&self, code: u32) -> Color {
        (**self).resolve(code)
    }
}

impl<T: Theme + ?Sized> Theme for Rc<T> {
    fn default_foreground(&self) -> Color {
        (**self).default_foreground()
    }

    fn resolve(&self, code: u32) -> Color {
        (**self).resolve(code)
    }
}

impl<T: Theme + ?Sized> Theme for Arc<T> {
    fn default_foreground(&self) -> Color {
        (**self).default_foreground()
    }

    fn resolve(&self, code: u32) -> Color {
        (**self).resolve(code)
    }
}
