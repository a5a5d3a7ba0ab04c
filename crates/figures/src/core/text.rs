//! Shared text utilities for figure rendering and parsing

/// Magnitudes in this range render as plain decimals, everything else in
/// scientific notation.
const PLAIN_MIN: f64 = 1e-5;
const PLAIN_MAX: f64 = 1e16;

/// Render a number in its shortest form that parses back to the same value.
///
/// Rust's `Display` for `f64` already produces the shortest round-trip digits
/// but never switches to an exponent, so very large or very small values are
/// written with `LowerExp` instead.
///
/// # Example
/// ```
/// use figures::core::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(10.25), "10.25");
/// assert_eq!(format_number(1e300), "1e300");
/// ```
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || !value.is_finite() || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        value.to_string()
    } else {
        format!("{:e}", value)
    }
}

/// Token separator shared by the parser and the stream reader: ASCII
/// whitespace as `u8::is_ascii_whitespace` defines it (vertical tab excluded).
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

/// Iterate over the non-empty tokens of `input`
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_ascii() && is_separator(c as u8))
        .filter(|token| !token.is_empty())
}

/// Split a line into whitespace-separated tokens
pub fn split_tokens(input: &str) -> Vec<String> {
    tokens(input).map(str::to_string).collect()
}
