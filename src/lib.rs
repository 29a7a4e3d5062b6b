//! spring-cleaning - i18n property extraction for Spring-backed front ends
//!
//! Scans markup and script sources for i18n keys, reconciles them against
//! Spring-style `.properties` message bundles and writes key lists, normalized
//! key maps, `#springMessage` lookups and mock locale resources.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading, job definitions and option merging
//! - `core`: Extraction, normalization, reconciliation and generation pipeline
//! - `error`: Library error types

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
