//! Core pipeline.
//!
//! 1. **Extraction** ([`extract`]): raw key tokens per source file
//! 2. **Normalization** ([`normalize`]): canonical, sorted key set
//! 3. **Catalog loading** ([`catalog`], [`parsers`]): per-locale translation files
//! 4. **Reconciliation** ([`reconcile`]): found/missing per (locale, key)
//! 5. **Generation** ([`generate`]): output artifacts
//!
//! [`pipeline`] ties the stages together for a job; [`file_scanner`] expands
//! a job's source entries.

pub mod catalog;
pub mod extract;
pub mod file_scanner;
pub mod generate;
pub mod normalize;
pub mod parsers;
pub mod pipeline;
pub mod reconcile;

pub use catalog::{CatalogFamily, discover};
pub use extract::{KeyExtractor, SourceKind};
pub use generate::{Action, OutputFile, render};
pub use normalize::{CanonicalKeySet, normalize};
pub use parsers::properties::{TranslationCatalog, parse_catalog};
pub use pipeline::{Job, JobReport, JobWarning, ResolvedOptions, run_job, run_jobs};
pub use reconcile::{ReconciliationEntry, ReconciliationReport, reconcile};
