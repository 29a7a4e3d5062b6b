//! Reconciliation of canonical keys against every locale of a catalog family.

use std::collections::BTreeMap;

use crate::core::{catalog::CatalogFamily, normalize::CanonicalKeySet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationEntry {
    Found { value: String },
    Missing,
}

impl ReconciliationEntry {
    pub fn is_found(&self) -> bool {
        matches!(self, ReconciliationEntry::Found { .. })
    }
}

/// Entries for one locale, keyed by canonical key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleReconciliation {
    pub entries: BTreeMap<String, ReconciliationEntry>,
}

impl LocaleReconciliation {
    pub fn found(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, entry)| match entry {
            ReconciliationEntry::Found { value } => Some((key.as_str(), value.as_str())),
            ReconciliationEntry::Missing => None,
        })
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.is_found())
            .map(|(key, _)| key.as_str())
    }

    pub fn found_count(&self) -> usize {
        self.found().count()
    }

    pub fn missing_count(&self) -> usize {
        self.entries.len() - self.found_count()
    }
}

/// Locale → entries for every canonical key.
pub type ReconciliationReport = BTreeMap<String, LocaleReconciliation>;

/// The dotted catalog path a key is looked up under.
///
/// The namespace prefix is dropped and only the first `_` becomes `.`. This is
/// the inverse of `norm_props`, which turns only the first `.` into `_`, so
/// any later underscores belong to the catalog key itself:
///
/// ```
/// use spring_cleaning::core::reconcile::lookup_path;
///
/// assert_eq!(lookup_path("ns:main_ok_button"), "main.ok_button");
/// assert_eq!(lookup_path("ns:a_b_c"), "a.b_c");
/// assert_eq!(lookup_path("title"), "title");
/// ```
pub fn lookup_path(key: &str) -> String {
    let local = key.split_once(':').map_or(key, |(_, rest)| rest);
    local.replacen('_', ".", 1)
}

pub fn reconcile(keys: &CanonicalKeySet, family: &CatalogFamily) -> ReconciliationReport {
    family
        .catalogs
        .iter()
        .map(|(locale, catalog)| {
            let entries = keys
                .iter()
                .map(|key| {
                    let entry = match catalog.get(&lookup_path(key)) {
                        Some(value) => ReconciliationEntry::Found {
                            value: value.clone(),
                        },
                        None => ReconciliationEntry::Missing,
                    };
                    (key.to_string(), entry)
                })
                .collect();
            (locale.clone(), LocaleReconciliation { entries })
        })
        .collect()
}
