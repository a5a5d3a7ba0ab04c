//! Core type definitions for figure processing
//!
//! This module contains the closed set of figure kinds and the per-kind
//! facts shared by the parser and the figure sources.

use std::fmt;
use std::str::FromStr;

use super::error::FigureError;

/// The kinds of figure the library knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// Three sides: `Triangle a b c`
    Triangle,
    /// One radius: `Circle r`
    Circle,
    /// Width and height: `Rectangle w h`
    Rectangle,
}

impl FigureKind {
    /// Every kind, in the order used for uniform random selection
    pub const ALL: [FigureKind; 3] = [
        FigureKind::Triangle,
        FigureKind::Circle,
        FigureKind::Rectangle,
    ];

    /// Number of numeric parameters this kind takes
    pub fn arity(&self) -> usize {
        match self {
            FigureKind::Triangle => 3,
            FigureKind::Circle => 1,
            FigureKind::Rectangle => 2,
        }
    }

    /// Canonical capitalized name used when rendering
    pub fn name(&self) -> &'static str {
        match self {
            FigureKind::Triangle => "Triangle",
            FigureKind::Circle => "Circle",
            FigureKind::Rectangle => "Rectangle",
        }
    }

    /// Lower-case keyword accepted on input
    pub fn keyword(&self) -> &'static str {
        match self {
            FigureKind::Triangle => "triangle",
            FigureKind::Circle => "circle",
            FigureKind::Rectangle => "rectangle",
        }
    }

    /// Arity spelled out, as used in arity mismatch messages
    pub fn arity_description(&self) -> &'static str {
        match self {
            FigureKind::Triangle => "three parameters",
            FigureKind::Circle => "one parameter",
            FigureKind::Rectangle => "two parameters",
        }
    }
}

impl FromStr for FigureKind {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FigureKind::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(s))
            .ok_or_else(|| FigureError::unknown_kind(s))
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(FigureKind::Triangle.arity(), 3);
        assert_eq!(FigureKind::Circle.arity(), 1);
        assert_eq!(FigureKind::Rectangle.arity(), 2);
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("triangle".parse::<FigureKind>().unwrap(), FigureKind::Triangle);
        assert_eq!("CIRCLE".parse::<FigureKind>().unwrap(), FigureKind::Circle);
        assert_eq!("ReCtAnGlE".parse::<FigureKind>().unwrap(), FigureKind::Rectangle);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        for input in ["hexagon", "", " circle", "circle ", "squares"] {
            let err = input.parse::<FigureKind>().unwrap_err();
            assert!(matches!(err, FigureError::UnknownFigureKind { ref kind } if kind == input));
        }
    }

    #[test]
    fn test_display_is_capitalized() {
        assert_eq!(FigureKind::Triangle.to_string(), "Triangle");
        assert_eq!(FigureKind::Circle.to_string(), "Circle");
        assert_eq!(FigureKind::Rectangle.to_string(), "Rectangle");
    }
}
