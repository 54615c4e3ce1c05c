//! Fill colors, as they appear in SVG paint attributes.

use core::fmt;

/// A fill color.
///
/// This is a stateless style value serializing to a CSS `<paint>` string:
/// one of the color keywords the widget uses, or an 8-bit RGB triple
/// rendered as lowercase hex.
///
/// ```
/// use progress_circle::Color;
///
/// assert_eq!(Color::Silver.to_string(), "silver");
/// assert_eq!(Color::rgb8(0x1e, 0x90, 0xff).to_string(), "#1e90ff");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// The CSS `silver` keyword; the default track color.
    Silver,
    /// The CSS `white` keyword; the default inner-disc color.
    White,
    /// The CSS `blue` keyword; the default progress color.
    Blue,
    /// The CSS `black` keyword.
    Black,
    /// The CSS `transparent` keyword, for knocking a layer out entirely.
    Transparent,
    /// An 8-bit RGB triple, rendered as `#rrggbb`.
    Rgb8(u8, u8, u8),
}

impl Color {
    /// Create a color from 8-bit RGB components.
    #[inline]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::Rgb8(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Silver => write!(f, "silver"),
            Color::White => write!(f, "white"),
            Color::Blue => write!(f, "blue"),
            Color::Black => write!(f, "black"),
            Color::Transparent => write!(f, "transparent"),
            Color::Rgb8(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Blue.to_string(), "blue");
        assert_eq!(Color::Transparent.to_string(), "transparent");
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Color::rgb8(0, 0x0a, 0xff).to_string(), "#000aff");
        assert_eq!(Color::rgb8(0xde, 0xad, 0x00).to_string(), "#dead00");
    }
}
