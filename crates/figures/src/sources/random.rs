//! Random figure source
//!
//! Every parameter range is bounded so the largest possible perimeter stays
//! well below `f64::MAX`, which keeps every generated figure valid.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::FigureSource;
use crate::core::{Circle, Figure, FigureError, FigureKind, Rectangle, Result, Triangle};

/// Smallest parameter value ever drawn
const MIN_PARAM: f64 = 0.1;

/// Upper bound for any generated perimeter, leaving headroom for rounding
const PERIMETER_CEILING: f64 = f64::MAX / 2.0;

const MAX_RADIUS: f64 = PERIMETER_CEILING / (2.0 * PI);
const MAX_RECTANGLE_SIDE: f64 = PERIMETER_CEILING / 4.0;
const MAX_TRIANGLE_SIDE: f64 = PERIMETER_CEILING / 3.0;

/// Source of uniformly chosen, randomly sized figures
pub struct RandomFigureSource {
    rng: StdRng,
}

impl RandomFigureSource {
    /// Create a source seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible source
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one of the figure kinds with equal probability
    pub fn random_kind(&mut self) -> FigureKind {
        FigureKind::ALL[self.rng.gen_range(0..FigureKind::ALL.len())]
    }

    /// Generate a single figure of a uniformly chosen kind
    pub fn generate(&mut self) -> Result<Figure> {
        let figure: Figure = match self.random_kind() {
            FigureKind::Triangle => self.generate_triangle()?.into(),
            FigureKind::Circle => self.generate_circle()?.into(),
            FigureKind::Rectangle => self.generate_rectangle()?.into(),
        };
        trace!(%figure, "Generated random figure");
        Ok(figure)
    }

    fn generate_circle(&mut self) -> Result<Circle> {
        Circle::new(self.rng.gen_range(MIN_PARAM..MAX_RADIUS))
    }

    fn generate_rectangle(&mut self) -> Result<Rectangle> {
        let width = self.rng.gen_range(MIN_PARAM..MAX_RECTANGLE_SIDE);
        let height = self.rng.gen_range(MIN_PARAM..MAX_RECTANGLE_SIDE);
        Rectangle::new(width, height)
    }

    /// Two sides are drawn freely; the third comes from the interval that
    /// satisfies the triangle inequality. Draws that floating point rounding
    /// collapses into a degenerate triangle are discarded.
    fn generate_triangle(&mut self) -> Result<Triangle> {
        loop {
            let a = self.rng.gen_range(MIN_PARAM..MAX_TRIANGLE_SIDE);
            let b = self.rng.gen_range(MIN_PARAM..MAX_TRIANGLE_SIDE);

            let low = (a - b).abs().max(MIN_PARAM);
            let high = MAX_TRIANGLE_SIDE.min(a + b);
            if high <= low {
                trace!(a, b, "Empty third side interval, redrawing");
                continue;
            }

            let c = self.rng.gen_range(low..high);
            match Triangle::new(a, b, c) {
                Err(FigureError::GeometricConstraintViolation { .. }) => {
                    trace!(a, b, c, "Rounded to a degenerate triangle, redrawing");
                }
                other => return other,
            }
        }
    }
}

impl Default for RandomFigureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FigureSource for RandomFigureSource {
    fn create(&mut self) -> Result<Option<Figure>> {
        self.generate().map(Some)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
