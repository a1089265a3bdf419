#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod parse;

pub mod stmt;

/// A Result type alias that uses Gridify's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
