//! Key extraction - raw i18n key tokens from source text.
//!
//! Two source kinds are understood:
//!
//! - **Markup** (HTML, Velocity templates, ...): elements carrying the
//!   `data-i18n` attribute, queried from the parsed document.
//! - **Script** (JS/TS): a lexical scan for `namespace:identifier` tokens.
//!
//! Extraction keeps duplicates and discovery order; deduplication happens in
//! [`crate::core::normalize`].

mod markup;
mod script;


use std::path::Path;

pub use markup::{I18N_ATTRIBUTE, extract_markup, split_annotation};
pub use script::ScriptScanner;

use crate::error::Result;

/// Extensions that are scanned as script text. Everything else is markup.
pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx"];

/// Extensions picked up when a source entry names a whole directory.
pub const MARKUP_EXTENSIONS: &[&str] = &["html", "htm", "tmpl", "vm", "xhtml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Markup,
    Script,
}

impl SourceKind {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if SCRIPT_EXTENSIONS.contains(&ext) => SourceKind::Script,
            _ => SourceKind::Markup,
        }
    }

    /// Whether a file found while walking a directory should be scanned.
    pub fn is_scannable(path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext) || MARKUP_EXTENSIONS.contains(&ext))
    }
}

/// Extracts raw key tokens from one source file's text.
///
/// Holds the compiled script pattern so it is built once per job, not once
/// per file.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    scanner: ScriptScanner,
}

impl KeyExtractor {
    /// `namespaces` narrows the script scan to the listed prefixes; an empty
    /// list accepts any identifier-like prefix.
    pub fn new(namespaces: &[String]) -> Self {
        Self {
            scanner: ScriptScanner::new(namespaces),
        }
    }

    pub fn extract(&self, text: &str, kind: SourceKind) -> Result<Vec<String>> {
        match kind {
            SourceKind::Markup => extract_markup(text),
            SourceKind::Script => Ok(self.scanner.scan(text)),
        }
    }
}

impl Default for KeyExtractor {
    fn default() -> Self {
        Self::new(&[])
    }
}
