use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// Attribute that marks an element as carrying i18n keys.
pub const I18N_ATTRIBUTE: &str = "data-i18n";

static I18N_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[data-i18n]").unwrap());

/// Extract every key declared by `data-i18n` attributes, in document order.
pub fn extract_markup(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let mut keys = Vec::new();

    for element in document.select(&I18N_SELECTOR) {
        if let Some(annotation) = element.value().attr(I18N_ATTRIBUTE) {
            keys.extend(split_annotation(annotation)?);
        }
    }

    Ok(keys)
}

/// Split one attribute value into its keys.
///
/// An annotation may hold several `;`-separated keys, each optionally
/// targeting an attribute with a `[attr]` prefix:
///
/// ```
/// use spring_cleaning::core::extract::split_annotation;
///
/// let keys = split_annotation("[title]link_title;link_text").unwrap();
/// assert_eq!(keys, vec!["link_title", "link_text"]);
/// ```
pub fn split_annotation(annotation: &str) -> Result<Vec<String>> {
    let mut keys = Vec::new();

    for part in annotation.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let key = match part.strip_prefix('[').and_then(|rest| rest.split_once(']')) {
            Some((_attr, key)) => {
                let key = key.trim();
                if key.is_empty() {
                    return Err(Error::Extraction {
                        annotation: annotation.to_string(),
                    });
                }
                key
            }
            // No bracket prefix, or an unclosed one: the token is the key.
            None => part,
        };

        keys.push(key.to_string());
    }

    Ok(keys)
}
