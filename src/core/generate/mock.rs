//! Mock locale resources for `gen_prop_list`.
//!
//! Layout under the destination directory:
//!
//! ```text
//! prop_list.txt                  canonical keys, one per line
//! spring_props.json              key -> #springMessage( '<lookup path>' )
//! missing_translations.txt       per-locale missing keys
//! mocks/<locale>.found.json      key -> translated value
//! mocks/<locale>.missing.json    key -> sentinel
//! mocks/<locale>.json            both, sentinel for missing
//! propertiesFiles/<file name>    verbatim catalog copies
//! ```

use std::{collections::BTreeMap, fmt::Write as _, path::Path};

use crate::core::{
    catalog::CatalogFamily,
    generate::{OutputFile, render_list_props, spring_message, to_json_string},
    normalize::CanonicalKeySet,
    reconcile::{LocaleReconciliation, ReconciliationReport, lookup_path},
};
use crate::error::Result;

/// Value standing in for a translation a locale does not have.
pub const MISSING_SENTINEL: &str = "__MISSING_TRANSLATION__";

pub const PROPERTIES_DIR: &str = "propertiesFiles";
pub const MOCKS_DIR: &str = "mocks";

/// The three per-locale views of a reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMocks {
    pub found: BTreeMap<String, String>,
    pub missing: BTreeMap<String, String>,
    pub combined: BTreeMap<String, String>,
}

impl LocaleMocks {
    pub fn from_reconciliation(reconciliation: &LocaleReconciliation) -> Self {
        let mut mocks = LocaleMocks::default();
        for (key, value) in reconciliation.found() {
            mocks.found.insert(key.to_string(), value.to_string());
            mocks.combined.insert(key.to_string(), value.to_string());
        }
        for key in reconciliation.missing() {
            mocks
                .missing
                .insert(key.to_string(), MISSING_SENTINEL.to_string());
            mocks
                .combined
                .insert(key.to_string(), MISSING_SENTINEL.to_string());
        }
        mocks
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockResources {
    pub locales: BTreeMap<String, LocaleMocks>,
    /// Locale independent, covers every canonical key.
    pub spring: BTreeMap<String, String>,
}

impl MockResources {
    pub fn new(keys: &CanonicalKeySet, report: &ReconciliationReport) -> Self {
        let locales = report
            .iter()
            .map(|(locale, reconciliation)| {
                (locale.clone(), LocaleMocks::from_reconciliation(reconciliation))
            })
            .collect();
        let spring = keys
            .iter()
            .map(|key| (key.to_string(), spring_message(&lookup_path(key))))
            .collect();
        Self { locales, spring }
    }

    /// Render every artifact of a `gen_prop_list` job under `dest`.
    pub fn generate(
        keys: &CanonicalKeySet,
        report: &ReconciliationReport,
        family: &CatalogFamily,
        dest: &Path,
    ) -> Result<Vec<OutputFile>> {
        let mocks = MockResources::new(keys, report);
        let mut files = vec![
            OutputFile::new(dest.join("prop_list.txt"), render_list_props(keys)),
            OutputFile::new(dest.join("spring_props.json"), to_json_string(&mocks.spring)?),
            OutputFile::new(
                dest.join("missing_translations.txt"),
                render_missing_report(report),
            ),
        ];

        let mocks_dir = dest.join(MOCKS_DIR);
        for (locale, views) in &mocks.locales {
            files.push(OutputFile::new(
                mocks_dir.join(format!("{locale}.found.json")),
                to_json_string(&views.found)?,
            ));
            files.push(OutputFile::new(
                mocks_dir.join(format!("{locale}.missing.json")),
                to_json_string(&views.missing)?,
            ));
            files.push(OutputFile::new(
                mocks_dir.join(format!("{locale}.json")),
                to_json_string(&views.combined)?,
            ));
        }

        let properties_dir = dest.join(PROPERTIES_DIR);
        for file in &family.files {
            files.push(OutputFile::new(
                properties_dir.join(&file.file_name),
                file.bytes.clone(),
            ));
        }

        Ok(files)
    }
}

/// Human-readable summary of missing translations per locale.
pub fn render_missing_report(report: &ReconciliationReport) -> String {
    let mut out = String::new();
    for (locale, reconciliation) in report {
        let total = reconciliation.entries.len();
        let missing = reconciliation.missing_count();
        let _ = writeln!(out, "[{locale}] {missing} of {total} keys missing");
        for key in reconciliation.missing() {
            let _ = writeln!(out, "  {key} -> {}", lookup_path(key));
        }
    }
    out
}
