//! Name-indexed constructors for the built-in tools.

use indexmap::IndexMap;
use serde::{Deserialize, de::DeserializeOwned};
use tagforge_codegen::Tool;
use thiserror::Error;

use crate::{ClassDump, EnumInfo, Printable, Soa, StructRepr, StructReprOptions};

/// Per-tool options, as written under `[tools.options.<name>]` in the manifest.
pub type ToolOptions = toml::Table;

type Constructor = fn(&ToolOptions) -> Result<Box<dyn Tool>, toml::de::Error>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown tool `{name}` (available: {known})")]
    UnknownTool { name: String, known: String },

    #[error("invalid options for tool `{tool}`: {source}")]
    InvalidOptions {
        tool: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Copy)]
struct Entry {
    description: &'static str,
    construct: Constructor,
}

/// Tools known by name, in registration order.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    entries: IndexMap<&'static str, Entry>,
}

/// Options for tools that take none; rejects any key.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NoOptions {}

fn parse<T: DeserializeOwned>(options: &ToolOptions) -> Result<T, toml::de::Error> {
    toml::Value::Table(options.clone()).try_into()
}

fn no_options(options: &ToolOptions) -> Result<(), toml::de::Error> {
    parse::<NoOptions>(options).map(|_| ())
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every tool shipped with tagforge.
    pub fn builtin() -> Self {
        Self::new()
            .with(Printable::NAME, Printable::DESCRIPTION, |options| {
                no_options(options)?;
                Ok(Box::new(Printable))
            })
            .with(StructRepr::NAME, StructRepr::DESCRIPTION, |options| {
                let options: StructReprOptions = parse(options)?;
                Ok(Box::new(StructRepr::new(options)))
            })
            .with(EnumInfo::NAME, EnumInfo::DESCRIPTION, |options| {
                no_options(options)?;
                Ok(Box::new(EnumInfo))
            })
            .with(Soa::NAME, Soa::DESCRIPTION, |options| {
                no_options(options)?;
                Ok(Box::new(Soa))
            })
            .with(ClassDump::NAME, ClassDump::DESCRIPTION, |options| {
                no_options(options)?;
                Ok(Box::new(ClassDump))
            })
    }

    pub fn with(
        mut self,
        name: &'static str,
        description: &'static str,
        construct: Constructor,
    ) -> Self {
        self.register(name, description, construct);
        self
    }

    /// Register a constructor, replacing any previous one with the same name.
    pub fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        construct: Constructor,
    ) {
        self.entries.insert(
            name,
            Entry {
                description,
                construct,
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// `(name, description)` pairs in registration order.
    pub fn descriptions(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (*name, entry.description))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the tool registered as `name` with `options`.
    pub fn create(&self, name: &str, options: &ToolOptions) -> Result<Box<dyn Tool>, RegistryError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTool {
                name: name.to_string(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })?;

        (entry.construct)(options).map_err(|source| RegistryError::InvalidOptions {
            tool: name.to_string(),
            source,
        })
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = ToolRegistry::builtin();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["printable", "struct_repr", "enum_info", "soa", "class_dump"]
        );
    }

    #[test]
    fn test_create_matches_name_and_description() {
        let registry = ToolRegistry::builtin();
        for (name, description) in registry.descriptions() {
            let tool = registry.create(name, &ToolOptions::new()).unwrap();
            assert_eq!(tool.name(), name);
            assert_eq!(tool.description(), description);
        }
    }

    #[test]
    fn test_unknown_tool() {
        let err = ToolRegistry::builtin()
            .create("reflect", &ToolOptions::new())
            .err().unwrap();
        assert!(matches!(err, RegistryError::UnknownTool { ref name, .. } if name == "reflect"));
        assert!(err.to_string().contains("printable, struct_repr"));
    }

    #[test]
    fn test_struct_repr_options() {
        let options: ToolOptions = toml::from_str("skip_unregistered_records = true").unwrap();
        let tool = ToolRegistry::builtin()
            .create(StructRepr::NAME, &options)
            .unwrap();
        assert_eq!(tool.name(), "struct_repr");
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let options: ToolOptions = toml::from_str("colors = true").unwrap();
        for name in [Printable::NAME, StructRepr::NAME] {
            let err = ToolRegistry::builtin().create(name, &options).err().unwrap();
            assert!(matches!(err, RegistryError::InvalidOptions { ref tool, .. } if tool == name));
        }
    }

    #[test]
    fn test_register_custom_tool() {
        let registry = ToolRegistry::new().with("noop", "does nothing", |_| {
            Ok(Box::new(tagforge_codegen::tool_fn("noop", |_| Ok(Vec::new()))))
        });
        assert!(registry.contains("noop"));
        assert_eq!(registry.len(), 1);
        assert!(registry.create("noop", &ToolOptions::new()).is_ok());
    }
}
