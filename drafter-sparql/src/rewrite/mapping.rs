//! The live-to-draft IRI substitution table.

use std::collections::HashMap;
use std::sync::Arc;

/// Map from live IRIs to their draft replacements.
///
/// Lookups are exact string matches. IRIs with no entry map to themselves.
/// The table is built once and then only read, so one instance can be
/// shared by any number of concurrent rewrites.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UriMapping {
    entries: HashMap<Arc<str>, Arc<str>>,
}

impl UriMapping {
    /// Create an empty (identity) mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a substitution, returning the replacement previously held for `live`.
    pub fn insert(&mut self, live: impl AsRef<str>, draft: impl AsRef<str>) -> Option<Arc<str>> {
        self.entries
            .insert(Arc::from(live.as_ref()), Arc::from(draft.as_ref()))
    }

    /// Builder form of [`UriMapping::insert`].
    pub fn with(mut self, live: impl AsRef<str>, draft: impl AsRef<str>) -> Self {
        self.insert(live, draft);
        self
    }

    /// The replacement for `iri`, if one is defined.
    pub fn get(&self, iri: &str) -> Option<&Arc<str>> {
        self.entries.get(iri)
    }

    /// The replacement for `iri`, or `iri` itself.
    pub fn map<'a>(&'a self, iri: &'a str) -> &'a str {
        self.get(iri).map_or(iri, |draft| draft.as_ref())
    }

    /// Number of substitutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this is the identity mapping.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(live, draft)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for UriMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = UriMapping::new();
        for (live, draft) in iter {
            mapping.insert(live, draft);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_is_identity() {
        let mapping = UriMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.map("http://example.org/a"), "http://example.org/a");
    }

    #[test]
    fn test_mapped_lookup() {
        let mapping: UriMapping = [("http://live/g", "http://draft/g")].into_iter().collect();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.map("http://live/g"), "http://draft/g");
        assert_eq!(mapping.map("http://live/g2"), "http://live/g2");
    }

    #[test]
    fn test_lookup_is_exact() {
        let mapping = UriMapping::new().with("http://live/", "http://draft/");
        assert_eq!(mapping.map("http://live/g"), "http://live/g");
        assert_eq!(mapping.map("http://live"), "http://live");
    }

    #[test]
    fn test_insert_replaces() {
        let mut mapping = UriMapping::new();
        assert!(mapping.insert("a", "b").is_none());
        assert_eq!(mapping.insert("a", "c").as_deref(), Some("b"));
        assert_eq!(mapping.map("a"), "c");
    }

    #[test]
    fn test_mapping_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UriMapping>();
    }
}
