//! Translation catalog discovery.
//!
//! A catalog family is every file whose name starts with a base stem, e.g. for
//! stem `src/i18n/messages`:
//!
//! | file                      | locale |
//! |---------------------------|--------|
//! | `messages.properties`     | `en`   |
//! | `messages.es.properties`  | `es`   |
//! | `messages_fr.properties`  | `fr`   |
//! | `messages.de`             | `de`   |

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::core::parsers::properties::{TranslationCatalog, parse_catalog};
use crate::error::{Error, Result};

/// Locale assigned to the file that carries no locale suffix.
pub const DEFAULT_LOCALE: &str = "en";

/// Single-segment suffixes that are file extensions, not locales.
pub const CATALOG_EXTENSIONS: &[&str] = &["properties", "props", "txt", "ini"];

/// One catalog file as loaded from disk.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub path: PathBuf,
    pub file_name: String,
    pub locale: String,
    /// Raw file contents, kept for byte-for-byte passthrough.
    pub bytes: Vec<u8>,
    pub dropped_lines: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogFamily {
    pub stem: String,
    pub source_dir: PathBuf,
    pub catalogs: BTreeMap<String, TranslationCatalog>,
    /// Every matched file in name order, including ones whose locale was
    /// shadowed by a later file.
    pub files: Vec<CatalogFile>,
    /// Locales claimed by more than one file, with the file that won.
    pub duplicate_locales: Vec<(String, PathBuf)>,
}

impl CatalogFamily {
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    pub fn get(&self, locale: &str) -> Option<&TranslationCatalog> {
        self.catalogs.get(locale)
    }
}

/// Derive the locale from a catalog file name.
///
/// Returns `None` if `file_name` does not start with `stem`.
///
/// ```
/// use spring_cleaning::core::catalog::locale_from_file_name;
///
/// assert_eq!(locale_from_file_name("messages.es.properties", "messages").as_deref(), Some("es"));
/// assert_eq!(locale_from_file_name("messages.properties", "messages").as_deref(), Some("en"));
/// ```
pub fn locale_from_file_name(file_name: &str, stem: &str) -> Option<String> {
    let rest = file_name.strip_prefix(stem)?;
    let rest = rest
        .strip_prefix('.')
        .or_else(|| rest.strip_prefix('_'))
        .unwrap_or(rest);

    let segments: Vec<&str> = rest.split('.').filter(|s| !s.is_empty()).collect();
    let locale = match segments.as_slice() {
        [] => DEFAULT_LOCALE,
        [single] if CATALOG_EXTENSIONS.contains(single) => DEFAULT_LOCALE,
        [first, ..] => first,
    };
    Some(locale.to_string())
}

/// List the files matching `stem*`, sorted by path.
fn list_family_files(stem: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}*", glob::Pattern::escape(stem));
    let entries = glob::glob(&pattern).map_err(|source| Error::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Discover and parse every catalog sharing `stem`.
///
/// `stem` may include a directory (`src/i18n/messages`); only the final
/// component is matched against file names.
pub fn discover(stem: impl AsRef<Path>) -> Result<CatalogFamily> {
    let stem_path = stem.as_ref();
    let stem_str = stem_path.to_string_lossy().to_string();
    let name_stem = stem_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let paths = list_family_files(&stem_str)?;
    let Some(first) = paths.first() else {
        return Err(Error::CatalogNotFound { stem: stem_str });
    };

    let mut family = CatalogFamily {
        stem: stem_str,
        source_dir: first.parent().map(Path::to_path_buf).unwrap_or_default(),
        ..Default::default()
    };

    for path in paths {
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        let Some(locale) = locale_from_file_name(&file_name, &name_stem) else {
            continue;
        };

        let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;
        let parsed = parse_catalog(&String::from_utf8_lossy(&bytes));

        if family.catalogs.insert(locale.clone(), parsed.catalog).is_some() {
            family.duplicate_locales.push((locale.clone(), path.clone()));
        }

        family.files.push(CatalogFile {
            path,
            file_name,
            locale,
            bytes,
            dropped_lines: parsed.dropped_lines,
        });
    }

    Ok(family)
}
