//! Ordered, key-unique registry of pieces destined for one output file.

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use super::Piece;
use crate::{Error, Result};

/// A named output artifact.
///
/// Pieces are registered under a caller-chosen key, usually the qualified
/// name of the declaration they were generated for. Registration order is
/// output order. The registry is the single authority for "already emitted":
/// recursive generators check [`contains`](Self::contains) before emitting a
/// dependency, and registering a key twice is an [`Error::DuplicateKey`].
///
/// # Example
///
/// ```
/// use tagforge_codegen::{GeneratedUnit, Piece};
///
/// let mut unit = GeneratedUnit::new("math").with_includes(["<cmath>"]);
/// let mut piece = Piece::new("float sq(float v)");
/// piece.line("return v * v;");
/// unit.register("sq", piece)?;
///
/// assert_eq!(
///     unit.build()?,
///     "float sq(float v);\n\nfloat sq(float v)\n{\n    return v * v;\n}\n"
/// );
/// assert!(unit.register("sq", Piece::flat()).is_err());
/// # Ok::<(), tagforge_codegen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    name: String,
    includes: IndexSet<String>,
    pieces: IndexMap<String, Piece>,
}

impl GeneratedUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            includes: IndexSet::new(),
            pieces: IndexMap::new(),
        }
    }

    pub fn with_includes(mut self, includes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for include in includes {
            self.add_include(include);
        }
        self
    }

    /// Add an include; duplicates are ignored.
    pub fn add_include(&mut self, include: impl Into<String>) {
        self.includes.insert(include.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.includes.iter().map(String::as_str)
    }

    /// Register `piece` under `key`.
    ///
    /// Fails if `key` is already present; the existing piece is kept.
    pub fn register(&mut self, key: impl Into<String>, piece: Piece) -> Result<()> {
        let key = key.into();
        if self.pieces.contains_key(&key) {
            return Err(Error::DuplicateKey {
                unit: self.name.clone(),
                key,
            });
        }
        trace!(unit = %self.name, %key, "register piece");
        self.pieces.insert(key, piece);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pieces.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Piece> {
        self.pieces.get(key)
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pieces.keys().map(String::as_str)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (&str, &Piece)> {
        self.pieces.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// `#include` lines; names not starting with `<` are quoted.
    pub fn build_includes(&self) -> String {
        self.includes
            .iter()
            .map(|include| {
                if include.starts_with('<') {
                    format!("#include {include}")
                } else {
                    format!("#include \"{include}\"")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the unit content.
    ///
    /// Two blocks, both in registration order: first one forward declaration
    /// per piece with a signature, then the full text of every definition
    /// piece. Declaration-only pieces appear in the first block only.
    pub fn build(&self) -> Result<String> {
        let mut out = String::new();

        for piece in self.pieces.values() {
            if let Some(head) = piece.head() {
                out.push_str(head);
                out.push_str(";\n");
            }
        }

        for piece in self.pieces.values().filter(|p| p.is_definition()) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&piece.build()?);
        }

        Ok(out)
    }
}
