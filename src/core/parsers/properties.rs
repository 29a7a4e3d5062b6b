use std::collections::BTreeMap;

/// Flat dotted-path → translated value mapping for one locale.
pub type TranslationCatalog = BTreeMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedCatalog {
    pub catalog: TranslationCatalog,
    /// 1-based numbers of non-blank lines that were not exactly one
    /// `key = value` pair.
    pub dropped_lines: Vec<usize>,
}

/// Parse catalog text.
///
/// Each line is split on every `=`. Only lines that yield exactly two parts
/// become entries (key and value trimmed); everything else is dropped without
/// failing the file. A later duplicate key overrides an earlier one.
///
/// ```
/// use spring_cleaning::core::parsers::properties::parse_catalog;
///
/// let parsed = parse_catalog("main.ok_button = OK\nbroken = a = b\n");
/// assert_eq!(parsed.catalog.get("main.ok_button").map(String::as_str), Some("OK"));
/// assert_eq!(parsed.dropped_lines, vec![2]);
/// ```
pub fn parse_catalog(content: &str) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();

    for (index, line) in content.lines().enumerate() {
        let parts: Vec<&str> = line.split('=').collect();
        match parts.as_slice() {
            [key, value] => {
                parsed
                    .catalog
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            _ if line.trim().is_empty() => {}
            _ => parsed.dropped_lines.push(index + 1),
        }
    }

    parsed
}
