//! Error taxonomy for the extraction and reconciliation pipeline.
//!
//! Every variant aborts the job it was raised in. Jobs are independent, so
//! one failing job never prevents the others from running.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A bracketed attribute prefix with no key after the closing bracket,
    /// e.g. `data-i18n="[title]"`.
    #[error("malformed i18n annotation \"{annotation}\": no key after attribute prefix")]
    Extraction { annotation: String },

    /// No file matches the configured `translationFile` stem.
    #[error("no translation files match \"{stem}\"")]
    CatalogNotFound { stem: String },

    #[error("unknown action \"{0}\" (expected one of: list_props, norm_props, spring_props, gen_prop_list)")]
    UnknownAction(String),

    /// An option the selected action cannot run without.
    #[error("action requires the \"{option}\" option")]
    MissingOption { option: &'static str },

    #[error("invalid source pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the source file an error was raised for.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Error::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
