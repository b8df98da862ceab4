//! Core utilities shared across tagforge crates.

mod file;

pub use file::{File, Overwrite, WriteResult, write_file};
