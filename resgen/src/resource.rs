use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One embedded file and the key it is looked up by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub path: PathBuf,
    pub alias: String,
}

impl ResourceEntry {
    pub fn new(path: impl Into<PathBuf>, alias: impl Into<String>) -> Self {
        ResourceEntry {
            path: path.into(),
            alias: alias.into(),
        }
    }
}

/// Resources in declaration order. Declaration order is lookup precedence,
/// so entries are never merged, sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceList(Vec<ResourceEntry>);

impl ResourceList {
    pub fn new() -> Self {
        ResourceList(vec![])
    }

    /// Builds the list from a flat `path alias path alias ...` stream.
    pub fn from_flat<S: AsRef<str>>(values: &[S]) -> Result<Self, Error> {
        let mut list = ResourceList::new();
        let mut iter = values.iter();
        while let Some(path) = iter.next() {
            let alias = iter
                .next()
                .ok_or_else(|| Error::MissingAlias(path.as_ref().to_string()))?;
            list.push(ResourceEntry::new(path.as_ref(), alias.as_ref()));
        }
        Ok(list)
    }

    pub fn push(&mut self, entry: ResourceEntry) {
        self.0.push(entry);
    }

    pub fn append(&mut self, other: ResourceList) {
        self.0.extend(other.0);
    }

    /// Re-roots every relative path onto `base`.
    pub fn rebase(self, base: &Path) -> Self {
        ResourceList(
            self.0
                .into_iter()
                .map(|entry| ResourceEntry {
                    path: if entry.path.is_relative() {
                        base.join(&entry.path)
                    } else {
                        entry.path
                    },
                    alias: entry.alias,
                })
                .collect(),
        )
    }

    /// Entries whose alias was not declared earlier in the list. Later
    /// repeats are unreachable through the lookup and own no storage.
    pub fn first_declared(&self) -> impl Iterator<Item = &ResourceEntry> {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .filter(move |entry| seen.insert(entry.alias.as_str()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResourceEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ResourceEntry> for ResourceList {
    fn from_iter<I: IntoIterator<Item = ResourceEntry>>(iter: I) -> Self {
        ResourceList(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResourceList {
    type Item = &'a ResourceEntry;
    type IntoIter = std::slice::Iter<'a, ResourceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
