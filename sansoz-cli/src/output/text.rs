//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use sansoz_core::Expansion;
use std::io::{self, Write};

/// Plain text formatter - outputs the expanded text of each input
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_expansion(
        &mut self,
        _source: &str,
        _original: &str,
        expansion: &Expansion,
    ) -> Result<()> {
        write!(self.writer, "{}", expansion.text)?;
        if !expansion.text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expansion(text: &str) -> Expansion {
        Expansion {
            text: text.to_string(),
            hits: Vec::new(),
        }
    }

    #[test]
    fn test_text_output_adds_missing_newline() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_expansion("<text>", "5", &expansion("бес"))
            .unwrap();
        formatter
            .format_expansion("<text>", "6\n", &expansion("алты\n"))
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "бес\nалты\n");
    }
}
