//! Figure value types
//!
//! Each shape validates itself once, in its constructor. A value that exists
//! is valid for its whole lifetime: fields are private and there are no
//! setters.

use std::f64::consts::PI;
use std::fmt;

use tracing::trace;

use super::error::{FigureError, Result};
use super::text::format_number;
use super::types::FigureKind;

fn validate_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FigureError::invalid_parameter(field, value))
    }
}

fn validate_perimeter(kind: FigureKind, perimeter: f64) -> Result<()> {
    if perimeter.is_finite() {
        Ok(())
    } else {
        Err(FigureError::overflow(kind.name()))
    }
}

/// Triangle given by the lengths of its three sides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Build a triangle, rejecting non-positive sides, degenerate or
    /// impossible side combinations, and perimeters that overflow.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let a = validate_positive("a", a)?;
        let b = validate_positive("b", b)?;
        let c = validate_positive("c", c)?;

        if !(a + b > c && b + c > a && a + c > b) {
            return Err(FigureError::GeometricConstraintViolation { a, b, c });
        }

        let triangle = Self { a, b, c };
        validate_perimeter(FigureKind::Triangle, triangle.perimeter())?;
        Ok(triangle)
    }

    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }
}

/// Circle given by its radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        let radius = validate_positive("radius", radius)?;
        let circle = Self { radius };
        validate_perimeter(FigureKind::Circle, circle.perimeter())?;
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

/// Rectangle given by its width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let width = validate_positive("width", width)?;
        let height = validate_positive("height", height)?;
        let rectangle = Self { width, height };
        validate_perimeter(FigureKind::Rectangle, rectangle.perimeter())?;
        Ok(rectangle)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

/// A validated figure of one of the known kinds
///
/// Cloning yields a new, fully independent value with identical parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Triangle(Triangle),
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Figure {
    /// Build a figure of `kind` from exactly `kind.arity()` parameters
    pub fn from_params(kind: FigureKind, params: &[f64]) -> Result<Self> {
        trace!(%kind, ?params, "Constructing figure");
        match (kind, params) {
            (FigureKind::Triangle, &[a, b, c]) => Triangle::new(a, b, c).map(Figure::Triangle),
            (FigureKind::Circle, &[radius]) => Circle::new(radius).map(Figure::Circle),
            (FigureKind::Rectangle, &[width, height]) => {
                Rectangle::new(width, height).map(Figure::Rectangle)
            }
            _ => Err(FigureError::ParseArityMismatch {
                kind: kind.keyword(),
                expected: kind.arity_description(),
                found: params.len(),
            }),
        }
    }

    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Triangle(_) => FigureKind::Triangle,
            Figure::Circle(_) => FigureKind::Circle,
            Figure::Rectangle(_) => FigureKind::Rectangle,
        }
    }

    /// Parameters in rendering order
    pub fn params(&self) -> Vec<f64> {
        match self {
            Figure::Triangle(t) => vec![t.a, t.b, t.c],
            Figure::Circle(c) => vec![c.radius],
            Figure::Rectangle(r) => vec![r.width, r.height],
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Figure::Triangle(t) => t.perimeter(),
            Figure::Circle(c) => c.perimeter(),
            Figure::Rectangle(r) => r.perimeter(),
        }
    }
}

impl From<Triangle> for Figure {
    fn from(value: Triangle) -> Self {
        Figure::Triangle(value)
    }
}

impl From<Circle> for Figure {
    fn from(value: Circle) -> Self {
        Figure::Circle(value)
    }
}

impl From<Rectangle> for Figure {
    fn from(value: Rectangle) -> Self {
        Figure::Rectangle(value)
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().name())?;
        for param in self.params() {
            write!(f, " {}", format_number(param))?;
        }
        Ok(())
    }
}
