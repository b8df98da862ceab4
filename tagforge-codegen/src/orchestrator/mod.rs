//! Tool orchestration.
//!
//! The [`Orchestrator`] runs an ordered list of tools against one shared
//! tree, renders every unit they return through the [`OutputLayout`] and
//! writes one file per unit. The first failure aborts the run:
//!
//! ```text
//! Idle → Running → Completed
//!                ↘ Aborted
//! ```
//!
//! When files are written is governed by the [`WritePolicy`].

mod config;
mod error;
mod output;
mod report;
mod runner;

pub use config::{RunConfig, WritePolicy};
pub use error::RunError;
pub use output::OutputLayout;
pub use report::{RunReport, RunState, WrittenUnit};
pub use runner::Orchestrator;
