//! Packed RGB color type
//!
//! Colors enter and leave the picker as packed integers. Alpha carries no
//! meaning for a swatch and is dropped on the way in.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An opaque 24-bit sRGB color.
///
/// This is the value a caller hands to the picker (the previously picked
/// color, the entries of a fixed palette) and the value it gets back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black, the darkest swatch of the achromatic row.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white, the brightest swatch of the achromatic row.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Unpack an `0xAARRGGBB` (or `0x00RRGGBB`) integer. The alpha byte is ignored.
    ///
    /// # Example
    /// ```
    /// use swatch_grid::Rgb;
    /// assert_eq!(Rgb::from_packed(0x80FF_0000), Rgb::new(255, 0, 0));
    /// ```
    #[inline]
    pub const fn from_packed(argb: u32) -> Self {
        Self::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8)
    }

    /// Pack as an opaque `0xFFRRGGBB` integer.
    ///
    /// # Example
    /// ```
    /// use swatch_grid::Rgb;
    /// assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_packed(), 0xFF12_3456);
    /// ```
    #[inline]
    pub const fn to_packed(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats, with or without a leading `#`:
    /// - `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    /// - `RRGGBB` - standard 6-digit hex
    /// - `AARRGGBB` - 8-digit hex with alpha, alpha is dropped
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_grid::Rgb;
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// let teal: Rgb = "ff008080".parse().unwrap();
    /// assert_eq!(teal, Rgb::new(0, 128, 128));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let mut digits = Vec::with_capacity(8);
        for c in s.chars() {
            let digit = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))?;
            digits.push(digit as u8);
        }
        let byte = |i: usize| digits[i] << 4 | digits[i + 1];

        match digits.len() {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            3 => Ok(Self::new(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            6 => Ok(Self::new(byte(0), byte(2), byte(4))),
            8 => Ok(Self::new(byte(2), byte(4), byte(6))),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
