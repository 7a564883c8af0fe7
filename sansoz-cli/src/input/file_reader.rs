//! File and stdin reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reader for UTF-8 text sources
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                anyhow::Error::new(CliError::FileNotFound(path.display().to_string()))
            } else {
                anyhow::Error::new(e).context(format!("Failed to read file: {}", path.display()))
            }
        })?;

        Ok(content)
    }

    /// Read all of a reader (typically stdin) as UTF-8 text
    pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;

        Ok(content)
    }
}
