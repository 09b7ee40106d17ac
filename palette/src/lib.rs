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

//! Terminal color palettes for wallart.
//!
//! This crate supplies the color side of ANSI run lexing: the [`Theme`] trait
//! the lexer resolves escape codes through, the [`Color`] values it produces,
//! and [`TerminalPalette`], a concrete sixteen-color terminal theme that can be
//! built in or loaded from TOML.

mod color;
mod palette;
mod result;
mod theme;

pub use self::color::Color;
pub use self::palette::{AnsiColor, TerminalPalette};
pub use self::result::{PaletteError, PaletteResult};
pub use self::theme::Theme;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports_exist() {
        let _ = std::any::type_name::<Color>();
        let _ = std::any::type_name::<AnsiColor>();
        let _ = std::any::type_name::<TerminalPalette>();
        let _ = std::any::type_name::<PaletteError>();
        let _ = std::any::type_name::<PaletteResult<()>>();
        let _ = std::any::type_name::<&dyn Theme>();
    }
}
