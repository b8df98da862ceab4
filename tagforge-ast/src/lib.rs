//! Declaration tree model for tagforge.
//!
//! This crate defines the read-only view of a parsed translation unit that
//! generation tools work against. The tree itself is produced by an external
//! parser; tagforge only consumes it through the [`AstProvider`] contract.
//!
//! # Architecture
//!
//! ```text
//! source (C/C++) → external parser → JSON dump → tagforge-ast (Tree) → tools
//! ```
//!
//! Loading a tree normalizes it once:
//! - tags are lowercased and deduplicated into a [`TagSet`] per node
//! - qualified names are computed from the enclosing declaration chain
//! - record declarations are indexed by qualified name

mod error;
mod kind;
mod node;
mod provider;
mod tags;
mod tree;
mod ty;

pub use error::ParseError;
pub use kind::NodeKind;
pub use node::Node;
pub use provider::{AstProvider, JsonDumpProvider};
pub use tags::TagSet;
pub use tree::{SCOPE_SEPARATOR, Tree};
pub use ty::{TypeCategory, TypeInfo};
