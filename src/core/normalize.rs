//! Canonical key set: deduplicated and sorted.

use std::collections::BTreeSet;

use serde::Serialize;

/// Unique keys in ascending code-point order.
///
/// The order is stable for identical inputs, which keeps generated artifacts
/// byte-identical between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalKeySet(Vec<String>);

impl CanonicalKeySet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(key))
            .is_ok()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a CanonicalKeySet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Deduplicate by exact string equality and sort.
pub fn normalize<I, S>(tokens: I) -> CanonicalKeySet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let unique: BTreeSet<String> = tokens.into_iter().map(Into::into).collect();
    CanonicalKeySet(unique.into_iter().collect())
}

/// The namespace prefix of a key (`ns` in `ns:ok_button`), if it has one.
pub fn namespace_of(key: &str) -> Option<&str> {
    key.split_once(':').map(|(ns, _)| ns)
}
