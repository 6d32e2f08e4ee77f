//! Localized display strings.
//!
//! The catalog is a typed table: one [`LocaleStrings`] record per [`Language`].
//! Unknown language keys are rejected when parsing a [`Language`], so a lookup
//! in the catalog can never miss.
//!
//! - `language`: the closed set of display languages
//! - `catalog`: the string table and the suggested-question supplier

mod catalog;
mod language;

pub use catalog::{LocaleCatalog, LocaleStrings, DEMO_QUESTION_COUNT};
pub use language::Language;
