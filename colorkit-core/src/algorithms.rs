//! Pure color operations built on [`Color`].
//!
//! Each function reports unparseable input through [`ColorError`] rather
//! than panicking, leaving it to the caller to turn the error into a
//! response.

use crate::color::Color;
use crate::error::{ColorError, Result};
use rand::Rng;

/// Draws each component independently and uniformly from 0-255.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(rng.gen(), rng.gen(), rng.gen())
}

/// Parses a hex color and returns its `[r, g, b]` components.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    Color::from_hex(hex).map(|color| color.components())
}

/// Parses an `R-G-B` triple such as `180-218-85`.
///
/// Exactly three dash-separated parts are required. Each part is read with
/// [`parse_int_prefix`], and values outside 0-255 are clamped.
pub fn parse_rgb_triple(input: &str) -> Result<Color> {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 {
        return Err(ColorError::ComponentCount(parts.len()));
    }

    let mut components = [0i64; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = parse_int_prefix(part)
            .ok_or_else(|| ColorError::InvalidComponent(part.to_string()))?;
    }

    Ok(Color::clamped(components[0], components[1], components[2]))
}

/// Reads the leading integer of `input`, ignoring whatever follows it.
///
/// Leading whitespace and one `+`/`-` sign are accepted, and a `0x` prefix
/// switches to base 16. `12abc` reads as 12 and `4.5` as 4. Returns `None`
/// when no digits lead the string. Values too large for `i64` saturate.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    seen.then(|| if negative { -value } else { value })
}

/// Converts an `R-G-B` triple to its `#rrggbb` encoding.
pub fn rgb_to_hex(input: &str) -> Result<String> {
    parse_rgb_triple(input).map(|color| color.to_hex())
}

/// Returns the brighter of two colors by average; ties go to `first`.
pub fn brightest(first: Color, second: Color) -> Color {
    if first.average() >= second.average() {
        first
    } else {
        second
    }
}

/// Parses an interpolation step count with [`parse_int_prefix`].
pub fn parse_steps(input: &str) -> Result<i64> {
    parse_int_prefix(input).ok_or_else(|| ColorError::InvalidSteps(input.to_string()))
}

/// Largest step count [`interpolate`] accepts.
pub const MAX_STEPS: i64 = 65_536;

/// Produces the `steps - 1` colors strictly between `start` and `end`.
///
/// Step `i` places each channel at `floor(diff * i / steps + start)`.
/// A step count of 1 or less yields no colors; one above [`MAX_STEPS`]
/// yields [`ColorError::TooManySteps`].
pub fn interpolate(start: Color, end: Color, steps: i64) -> Result<Vec<Color>> {
    if steps > MAX_STEPS {
        return Err(ColorError::TooManySteps {
            steps,
            max: MAX_STEPS,
        });
    }
    if steps <= 1 {
        return Ok(Vec::new());
    }

    let total = steps as f64;
    let channel = |from: u8, to: u8, fraction: f64| -> i64 {
        let diff = f64::from(to) - f64::from(from);
        (diff * fraction + f64::from(from)).floor() as i64
    };

    Ok((1..steps)
        .map(|i| {
            let fraction = i as f64 / total;
            Color::clamped(
                channel(start.r(), end.r(), fraction),
                channel(start.g(), end.g(), fraction),
                channel(start.b(), end.b(), fraction),
            )
        })
        .collect())
}
