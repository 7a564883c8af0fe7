//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to list your suffixes, months and ordinals");
        println!("2. Validate your configuration:");
        println!(
            "   sansoz validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for expansion:");
        println!(
            "   sansoz expand -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Numeral expansion data for {code}

[metadata]
code = "{code}"
name = "Custom Language"
# Cardinal speller used to spell numbers (currently: "kk")
speller = "kk"

# Suffixes recognised after "<digits>-"
[suffixes]
# Turn the number into an ordinal: 5-ші -> бесінші
ordinal = ["інші", "ыншы", "нші", "ншы", "ші", "шы"]
# Appended unseparated to the cardinal: 5-еу -> бесеу
# Must not repeat any ordinal suffix
group = ["еу", "ау", "ге", "ға", "де", "да", "нен", "нан"]

[calendar]
# A day number 1-31 followed by one of these is spelled as an ordinal
months = [
    "қаңтар", "ақпан", "наурыз", "сәуір", "мамыр", "маусым",
    "шілде", "тамыз", "қыркүйек", "қазан", "қараша", "желтоқсан",
]
# A four-digit year followed by this word is spelled as an ordinal
year_marker = "жыл"

# Letters that may be glued to digits (e.g. "A4"); digits in such tokens are dropped
[alphabet]
chars = "аәбвгғдеёжзийкқлмнңоөпрстуұүфхһцчшщъыіьэюяabcdefghijklmnopqrstuvwxyz"

# Last word of a cardinal -> its ordinal form
[ordinals]
"бір" = "бірінші"
"екі" = "екінші"
"үш" = "үшінші"
"#,
            code = self.language_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sansoz_core::{LanguageConfig, LanguageData};
    use tempfile::TempDir;

    #[test]
    fn test_template_is_valid_config() {
        let args = GenerateConfigArgs {
            language_code: "kk-custom".to_string(),
            output: PathBuf::from("unused.toml"),
        };

        let config = LanguageConfig::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(config.metadata.code, "kk-custom");
        assert_eq!(config.speller_tag(), "kk");
        assert!(LanguageData::from_config(&config).is_ok());
    }

    #[test]
    fn test_generate_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("lang.toml");
        let args = GenerateConfigArgs {
            language_code: "test".to_string(),
            output: output.clone(),
        };

        args.execute().unwrap();
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("code = \"test\""));
        assert!(content.contains("[suffixes]"));
    }
}
