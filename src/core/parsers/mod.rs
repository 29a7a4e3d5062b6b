//! File parsers for translation catalogs.
//!
//! - `properties`: line-oriented `key = value` catalog parser
//!
//! Markup and script sources are handled by [`crate::core::extract`].

pub mod properties;
