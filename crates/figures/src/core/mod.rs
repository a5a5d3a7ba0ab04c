//! Core figure model
//!
//! Figure values, the kind table, the text format and the error type. The
//! sources in [`crate::sources`] are built on top of these.

mod error;
mod figure;
pub mod logging;
mod parser;
mod text;
mod types;

pub use error::*;
pub use figure::*;
pub use logging::*;
pub use parser::*;
pub use text::*;
pub use types::*;
