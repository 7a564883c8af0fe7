//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use sansoz_core::Expansion;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all expansions as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<ExpansionRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpansionRecord {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// The input text
    pub text: String,
    /// The expanded text
    pub expanded: String,
    /// Whether every digit was expanded
    pub complete: bool,
    /// Rules that fired, in application order
    pub rules: Vec<RuleRecord>,
}

/// One fired rule
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleRecord {
    pub rule: String,
    pub matches: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_expansion(
        &mut self,
        source: &str,
        original: &str,
        expansion: &Expansion,
    ) -> Result<()> {
        self.records.push(ExpansionRecord {
            source: source.to_string(),
            text: original.to_string(),
            expanded: expansion.text.clone(),
            complete: expansion.is_complete(),
            rules: expansion
                .hits
                .iter()
                .map(|hit| RuleRecord {
                    rule: hit.rule.name().to_string(),
                    matches: hit.matches,
                })
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
