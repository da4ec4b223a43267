use crate::error::{ColorError, Result};
use std::fmt;
use std::str::FromStr;

/// An RGB color with 8-bit components.
///
/// `Color` is an immutable value: the `with_*` methods return a new color
/// instead of modifying the receiver. Every constructor that accepts wide
/// integers clamps them into `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from in-range components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from arbitrary integers, clamping each into 0-255.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self::new(clamp_component(r), clamp_component(g), clamp_component(b))
    }

    /// Parses `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive).
    ///
    /// Shorthand digits are doubled, so `03F` becomes `0033FF`. Any other
    /// shape yields [`ColorError::InvalidHex`].
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidHex(hex.to_string());

        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        let mut nibbles = [0u8; 6];
        match digits.len() {
            3 => {
                for (i, &c) in digits.iter().enumerate() {
                    let n = nibble(c).ok_or_else(invalid)?;
                    nibbles[i * 2] = n;
                    nibbles[i * 2 + 1] = n;
                }
            }
            6 => {
                for (i, &c) in digits.iter().enumerate() {
                    nibbles[i] = nibble(c).ok_or_else(invalid)?;
                }
            }
            _ => return Err(invalid()),
        }

        Ok(Self::new(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        ))
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Returns a copy with the red component replaced (clamped).
    #[must_use]
    pub fn with_red(self, r: i64) -> Self {
        Self {
            r: clamp_component(r),
            ..self
        }
    }

    /// Returns a copy with the green component replaced (clamped).
    #[must_use]
    pub fn with_green(self, g: i64) -> Self {
        Self {
            g: clamp_component(g),
            ..self
        }
    }

    /// Returns a copy with the blue component replaced (clamped).
    #[must_use]
    pub fn with_blue(self, b: i64) -> Self {
        Self {
            b: clamp_component(b),
            ..self
        }
    }

    /// Components in `[r, g, b]` order.
    pub const fn components(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Mean of the three components, used as a brightness proxy.
    pub fn average(&self) -> f64 {
        (f64::from(self.r) + f64::from(self.g) + f64::from(self.b)) / 3.0
    }

    /// Lowercase `#rrggbb` encoding.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

fn clamp_component(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::default().components(), [0, 0, 0]);
    }

    #[test]
    fn test_clamped_construction() {
        let color = Color::clamped(-20, 128, 300);
        assert_eq!(color.components(), [0, 128, 255]);
    }

    #[test]
    fn test_with_component_clamps() {
        let color = Color::new(10, 20, 30);

        assert_eq!(color.with_red(-5).r(), 0);
        assert_eq!(color.with_red(300).r(), 255);
        assert_eq!(color.with_green(i64::MAX).g(), 255);
        assert_eq!(color.with_blue(i64::MIN).b(), 0);
        assert_eq!(color.with_blue(42).b(), 42);
    }

    #[test]
    fn test_with_component_leaves_original_untouched() {
        let color = Color::new(10, 20, 30);
        let changed = color.with_green(99);

        assert_eq!(color.components(), [10, 20, 30]);
        assert_eq!(changed.components(), [10, 99, 30]);
    }

    #[test]
    fn test_to_hex_zero_pads() {
        assert_eq!(Color::new(5, 0, 255).to_hex(), "#0500ff");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn test_display_matches_to_hex() {
        let color = Color::new(180, 218, 85);
        assert_eq!(color.to_string(), color.to_hex());
    }

    #[test]
    fn test_from_hex_full_form() {
        let color = Color::from_hex("B4DA55").unwrap();
        assert_eq!(color.components(), [180, 218, 85]);

        let color = Color::from_hex("#b4da55").unwrap();
        assert_eq!(color.components(), [180, 218, 85]);
    }

    #[test]
    fn test_from_hex_shorthand() {
        let color = Color::from_hex("03F").unwrap();
        assert_eq!(color.to_hex(), "#0033ff");

        let color = Color::from_hex("#fff").unwrap();
        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn test_from_hex_rejects_bad_shapes() {
        for input in ["zzz", "12", "1234567", "", "#", "##fff", "12345g", " fff", "ffff", "#abcd"] {
            assert_eq!(
                Color::from_hex(input),
                Err(ColorError::InvalidHex(input.to_string())),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_hex_rejects_non_ascii() {
        // "é" is two bytes, so these have the byte lengths of valid input.
        assert!(Color::from_hex("éf").is_err());
        assert!(Color::from_hex("éffff").is_err());
    }

    #[test]
    fn test_from_str() {
        let color: Color = "#123456".parse().unwrap();
        assert_eq!(color.components(), [0x12, 0x34, 0x56]);
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn test_average() {
        assert_eq!(Color::WHITE.average(), 255.0);
        assert_eq!(Color::BLACK.average(), 0.0);
        assert!((Color::new(1, 1, 2).average() - 4.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_array() {
        assert_eq!(Color::from([1, 2, 3]), Color::new(1, 2, 3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_hex_string() {
        let color = Color::new(180, 218, 85);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#b4da55\"");

        let back: Color = serde_json::from_str("\"B4DA55\"").unwrap();
        assert_eq!(back, color);

        assert!(serde_json::from_str::<Color>("\"xyz\"").is_err());
    }
}
