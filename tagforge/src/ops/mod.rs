//! Core operations.
//!
//! This module contains the business logic for tagforge commands,
//! separated from CLI argument parsing and output rendering.

pub mod clear;
pub mod compile;
pub mod generate;
pub mod prepare;
pub mod tools;

pub use clear::clear;
pub use compile::compile;
pub use generate::{generate, instantiate};
pub use prepare::prepare;
pub use tools::tools;
