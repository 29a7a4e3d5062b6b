use std::sync::LazyLock;

use regex::Regex;

/// ASCII word characters and boundaries, so a non-ASCII letter ends a key.
const WORD: &str = r"(?-u:\w)";
const BOUNDARY: &str = r"(?-u:\b)";

/// Matches any `prefix:identifier` token when no namespaces are declared.
static ANY_NAMESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{BOUNDARY}[A-Za-z_]{WORD}*:{WORD}+")).unwrap()
});

/// Lexical scanner for `namespace:identifier` tokens in script text.
///
/// This is a plain pattern scan over the raw text. It does not know about
/// string or comment boundaries, so keys mentioned in comments are found too.
#[derive(Debug, Clone)]
pub struct ScriptScanner {
    pattern: Regex,
}

impl ScriptScanner {
    pub fn new(namespaces: &[String]) -> Self {
        if namespaces.is_empty() {
            return Self {
                pattern: ANY_NAMESPACE_REGEX.clone(),
            };
        }

        let alternatives: Vec<String> = namespaces.iter().map(|ns| regex::escape(ns)).collect();
        let source = format!("{BOUNDARY}(?:{}):{WORD}+", alternatives.join("|"));

        // Namespaces are escaped, so only the size limit could reject this.
        let pattern = Regex::new(&source).unwrap_or_else(|_| ANY_NAMESPACE_REGEX.clone());

        Self { pattern }
    }

    /// All non-overlapping matches, left to right.
    pub fn scan(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
