pub mod loader;

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// Bundled US to UK table, compiled into the binary.
const EMBEDDED_CSV: &str = include_str!("../../data/us_to_uk.csv");

/// Lowercase US spelling to lowercase UK spelling.
///
/// Built once, then shared by reference with every conversion. Keys are
/// expected to be lowercase already; the map does not normalize them, and
/// case handling is left entirely to the converter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellingMap {
    entries: HashMap<String, String>,
}

impl SpellingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `us,uk` CSV from disk
    pub fn load(path: &Path) -> Result<Self> {
        loader::load(path)
    }

    /// Load a `us,uk` CSV from any reader (useful for testing)
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        loader::from_reader(reader)
    }

    /// The table shipped with the crate
    pub fn embedded() -> Result<Self> {
        loader::from_reader(EMBEDDED_CSV.as_bytes())
    }

    /// Insert a pair, returning the UK spelling it replaced, if any.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, us: K, uk: V) -> Option<String> {
        self.entries.insert(us.into(), uk.into())
    }

    pub fn remove(&mut self, us: &str) -> Option<String> {
        self.entries.remove(us)
    }

    pub fn get(&self, us: &str) -> Option<&str> {
        self.entries.get(us).map(String::as_str)
    }

    pub fn contains(&self, us: &str) -> bool {
        self.entries.contains_key(us)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(us, uk)| (us.as_str(), uk.as_str()))
    }

    /// Overlay `other` on top of this map; its entries win on conflict.
    pub fn merge(&mut self, other: SpellingMap) {
        self.entries.extend(other.entries);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SpellingMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SpellingMap::new();
        for (us, uk) in iter {
            map.insert(us, uk);
        }
        map
    }
}
