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

use std::fmt;

/// A concrete 24-bit color as handed to the rendering stage.
///
/// Colors are plain values: they are `Copy`, compare by channel, and carry no
/// notion of which escape code produced them. Palettes map escape codes onto
/// `Color`s; everything downstream only ever sees the resolved value.
///
/// # Examples
///
/// ```rust
/// use wallart_palette::Color;
///
/// let red = Color::from_hex("#cd0000").unwrap();
/// assert_eq!(red, Color::new(0xcd, 0x00, 0x00));
/// assert_eq!(red.to_hex(), "#cd0000");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    /// Pure white.
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color such as `"#ff0000"` or `"ff0000"`.
    ///
    /// Returns `None` unless the input is exactly six hex digits after the
    /// optional `#`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#102030"), Some(Color::new(0x10, 0x20, 0x30)));
        assert_eq!(Color::from_hex("A0b0C0"), Some(Color::new(0xa0, 0xb0, 0xc0)));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ff00001"), None);
        // Six bytes, but not six ASCII digits
        assert_eq!(Color::from_hex("#ää00"), None);
    }

    #[test]
    fn test_hex_and_display_agree() {
        let color = Color::new(1, 171, 255);
        assert_eq!(color.to_hex(), "#01abff");
        assert_eq!(color.to_string(), "#01abff");
        assert_eq!(format!("{}", Color::BLACK), "#000000");
        assert_eq!(Color::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Color::from((255, 255, 255)), Color::WHITE);
    }
}
