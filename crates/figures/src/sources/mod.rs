//! Figure sources
//!
//! A source hands out one figure per call, either synthesizing it
//! ([`RandomFigureSource`]) or reading its textual form from a stream
//! ([`StreamFigureSource`]). [`InputMethod`] picks a source from the tokens a
//! user typed.

mod random;
mod selector;
mod stream;

pub use random::RandomFigureSource;
pub use selector::{select_source, InputMethod};
pub use stream::StreamFigureSource;

use crate::core::{Figure, Result};

/// Something that produces figures on demand
pub trait FigureSource {
    /// Produce the next figure
    ///
    /// `Ok(None)` means the source is cleanly exhausted; it is not an error.
    fn create(&mut self) -> Result<Option<Figure>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
