//! Output formatting module

use anyhow::Result;
use sansoz_core::Expansion;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the expansion of one input
    fn format_expansion(
        &mut self,
        source: &str,
        original: &str,
        expansion: &Expansion,
    ) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
