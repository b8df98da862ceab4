use std::collections::BTreeSet;

/// Normalized set of tags attached to one declaration.
///
/// Tags are stored lowercased and deduplicated, so lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, returning false if it was already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        self.tags.insert(normalize(tag))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&normalize(tag))
    }

    /// True if at least one of `tags` is present.
    pub fn contains_any<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|t| self.contains(t.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}
