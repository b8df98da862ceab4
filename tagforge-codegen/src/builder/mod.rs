//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indented line buffer
//! - [`Piece`] - One declaration signature plus its scope-tracked body
//! - [`GeneratedUnit`] - Ordered, key-unique registry of pieces for one output file
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod piece;
mod unit;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use piece::Piece;
pub use unit::GeneratedUnit;
