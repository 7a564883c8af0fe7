//! Language numeral data
//!
//! Suffix sets, month names, the glued-token alphabet and the ordinal
//! word table for a language, described in TOML and loaded once.

pub mod config;
pub mod data;
mod loader;

pub use config::LanguageConfig;
pub use data::LanguageData;
pub use loader::{get_language_data, list_available_languages};
