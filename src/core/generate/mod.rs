//! Artifact generation.
//!
//! Single-file actions (`list_props`, `norm_props`, `spring_props`) render the
//! canonical key set into one string. `gen_prop_list` renders a whole tree of
//! mock resources from a reconciliation report, see [`mock`].

pub mod mock;

use std::{fmt, path::PathBuf, str::FromStr};

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::core::normalize::CanonicalKeySet;
use crate::error::{Error, Result};

pub use mock::{MISSING_SENTINEL, MockResources};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// Newline-separated key list.
    #[default]
    ListProps,
    /// JSON map of first-dot-normalized identifier → original key.
    NormProps,
    /// JSON map of fully normalized identifier → `#springMessage(...)`.
    SpringProps,
    /// Reconcile against a catalog family and emit mock resources.
    GenPropList,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::ListProps,
        Action::NormProps,
        Action::SpringProps,
        Action::GenPropList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ListProps => "list_props",
            Action::NormProps => "norm_props",
            Action::SpringProps => "spring_props",
            Action::GenPropList => "gen_prop_list",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

/// A file to be written, relative paths already resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Velocity lookup expression for a message key.
pub fn spring_message(key: &str) -> String {
    format!("#springMessage( '{}' )", key)
}

/// Serialize with 4-space indentation.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render_list_props(keys: &CanonicalKeySet) -> String {
    keys.as_slice().join("\n")
}

/// Identifier → original key, with only the FIRST `.` replaced by `_`.
pub fn render_norm_props(keys: &CanonicalKeySet) -> Result<String> {
    let mut map = Map::new();
    for key in keys {
        map.insert(key.replacen('.', "_", 1), Value::String(key.clone()));
    }
    to_json_string(&map)
}

/// Identifier with EVERY `.` replaced by `_` → lookup expression for the
/// original key.
pub fn render_spring_props(keys: &CanonicalKeySet) -> Result<String> {
    let mut map = Map::new();
    for key in keys {
        map.insert(key.replace('.', "_"), Value::String(spring_message(key)));
    }
    to_json_string(&map)
}

/// Render one of the single-file actions.
///
/// `gen_prop_list` needs a catalog family and is rendered by
/// [`MockResources::generate`] instead.
pub fn render(action: Action, keys: &CanonicalKeySet) -> Result<String> {
    match action {
        Action::ListProps => Ok(render_list_props(keys)),
        Action::NormProps => render_norm_props(keys),
        Action::SpringProps => render_spring_props(keys),
        Action::GenPropList => Err(Error::MissingOption {
            option: "translationFile",
        }),
    }
}
