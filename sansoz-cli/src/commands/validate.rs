//! Validate command implementation

use anyhow::Result;
use clap::Args;
use sansoz_core::{LanguageData, NumeralExpander};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        // Rule compilation catches problems the schema check cannot
        match LanguageData::from_file(&self.language_config, None)
            .and_then(NumeralExpander::from_data)
        {
            Ok(expander) => {
                let data = expander.language();
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", data.code());
                println!("  Language name: {}", data.name());
                println!("  Speller: {}", data.speller_tag());
                println!(
                    "  Suffixes: {} ordinal, {} group",
                    data.suffixes().ordinal().len(),
                    data.suffixes().group().len()
                );
                println!("  Months: {}", data.months().len());
                println!("  Ordinal words: {}", data.ordinals().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
