//! Figures - validated geometric figures from text, streams and randomness
//!
//! A library for building triangles, circles and rectangles that are valid by
//! construction, reading them from their textual form, and generating them
//! at random.
//!
//! # Quick Start
//!
//! ```rust
//! use figures::parse;
//!
//! let figure = parse("rectangle 10 20").unwrap();
//! assert_eq!(figure.to_string(), "Rectangle 10 20");
//! assert_eq!(figure.perimeter(), 60.0);
//! ```
//!
//! # Sources
//!
//! For more control, pick a source from the tokens a user typed:
//!
//! ```rust
//! use figures::prelude::*;
//! use std::io::Cursor;
//!
//! let stdin = Cursor::new("circle 5\ntriangle 3 4 5");
//! let mut source = select_source(&["stdin"], stdin).unwrap().unwrap();
//!
//! assert_eq!(source.create().unwrap().unwrap().kind(), FigureKind::Circle);
//! assert_eq!(source.create().unwrap().unwrap().kind(), FigureKind::Triangle);
//! assert!(source.create().unwrap().is_none());
//! ```

pub mod core;
pub mod sources;

pub use crate::core::*;

use std::io::BufRead;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Circle, Figure, FigureError, FigureKind, FigureParser, Rectangle, Result, Triangle,
    };
    pub use crate::sources::{
        select_source, FigureSource, InputMethod, RandomFigureSource, StreamFigureSource,
    };
}

/// Parse one figure from its textual form
///
/// # Example
/// ```rust
/// use figures::{parse, FigureKind};
///
/// let figure = parse("Triangle 3 4 5").unwrap();
/// assert_eq!(figure.kind(), FigureKind::Triangle);
/// assert_eq!(figure.perimeter(), 12.0);
/// ```
pub fn parse(input: &str) -> Result<Figure> {
    FigureParser::new().parse(input)
}

/// Read every figure from a reader, stopping at the first invalid record
///
/// # Example
/// ```rust
/// let figures = figures::read_figures("circle 1\nrectangle 2 3\n".as_bytes()).unwrap();
/// assert_eq!(figures.len(), 2);
/// ```
pub fn read_figures<R: BufRead>(reader: R) -> Result<Vec<Figure>> {
    sources::StreamFigureSource::new(reader).collect()
}
