//! Template cache.
//!
//! Templates are named boilerplate texts stored outside the generator (a
//! template directory, or built-in texts shipped by a tool crate). A template
//! is expanded once, with its parameters injected as preprocessor macros, and
//! the expansion is cached under its name for the rest of the process.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use indexmap::IndexMap;
use tracing::debug;

use crate::{Error, Piece, Result};

/// Where template texts come from.
pub trait TemplateSource: Send + Sync {
    /// Load the raw text of `name`, or `None` if this source does not have it.
    fn load(&self, name: &str) -> Result<Option<String>>;
}

/// Templates read from files under a directory: `name` is a path relative to
/// the root.
#[derive(Debug, Clone)]
pub struct TemplateDir {
    root: PathBuf,
}

impl TemplateDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for TemplateDir {
    fn load(&self, name: &str) -> Result<Option<String>> {
        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::TemplateIo {
                name: name.to_string(),
                path,
                source,
            }),
        }
    }
}

/// Templates held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    texts: IndexMap<String, String>,
}

impl MemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(name.into(), text.into());
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }
}

impl TemplateSource for MemoryTemplates {
    fn load(&self, name: &str) -> Result<Option<String>> {
        Ok(self.texts.get(name).cloned())
    }
}

/// Several sources searched in order; the first that has a template wins.
#[derive(Default)]
pub struct LayeredTemplates {
    layers: Vec<Box<dyn TemplateSource>>,
}

impl LayeredTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(mut self, source: impl TemplateSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl TemplateSource for LayeredTemplates {
    fn load(&self, name: &str) -> Result<Option<String>> {
        for layer in &self.layers {
            if let Some(text) = layer.load(name)? {
                return Ok(Some(text));
            }
        }
        Ok(None)
    }
}

/// Process-wide, name-keyed cache of expanded templates.
///
/// The cache is keyed by name only: once a template has been expanded, later
/// calls return that first expansion whatever parameters they pass. Shared as
/// `&TemplateCache`; one internal mutex guards the map.
pub struct TemplateCache {
    source: Box<dyn TemplateSource>,
    cache: Mutex<HashMap<String, String>>,
}

impl TemplateCache {
    pub fn new(source: impl TemplateSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The expansion of `name` as a flat piece.
    ///
    /// On first use the raw text is loaded and wrapped: one `#define` per
    /// parameter before the body, one `#undef` per parameter after it. A
    /// missing template is an error.
    pub fn template(&self, name: &str, params: &[(&str, &str)]) -> Result<Piece> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(text) = cache.get(name) {
            return Ok(Piece::from_text(text));
        }

        let raw = self
            .source
            .load(name)?
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
            })?;
        let text = expand(&raw, params);
        debug!(template = name, params = params.len(), "template cached");
        cache.insert(name.to_string(), text.clone());

        Ok(Piece::from_text(&text))
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Number of cached templates.
    pub fn len(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for TemplateCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateCache")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

fn expand(raw: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (name, value) in params {
        let value = value
            .trim()
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" \\\n");
        out.push_str(&format!("#define {name} {value}\n"));
    }

    out.push_str(raw);
    if !raw.ends_with('\n') {
        out.push('\n');
    }

    for (name, _) in params {
        out.push_str(&format!("#undef {name}\n"));
    }
    out
}
