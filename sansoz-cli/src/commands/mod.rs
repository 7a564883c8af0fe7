//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod expand;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand numerals in text files, inline text or stdin
    Expand(expand::ExpandArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Write a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language data
    Languages,

    /// List the numeral rules in application order
    Rules,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Expand(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for code in sansoz_core::list_available_languages() {
                    let data = sansoz_core::get_language_data(code)?;
                    println!("  {:<4} {}", code, data.name());
                }
            }
            ListCommands::Rules => {
                let expander = sansoz_core::NumeralExpander::for_language("kk")?;
                println!("Numeral rules (applied in order):");
                for (index, rule) in expander.rules().iter().enumerate() {
                    println!(
                        "  {}. {:<15} -> {}",
                        index + 1,
                        rule.kind().name(),
                        rule.kind().rewriter()
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let expand_cmd = Commands::Expand(expand::ExpandArgs {
            input: vec!["test.txt".to_string()],
            text: None,
            output: None,
            format: expand::OutputFormat::Text,
            language: Some(expand::Language::Kazakh),
            language_config: None,
            language_code: None,
            parallel: false,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", expand_cmd);
        assert!(debug_str.contains("Expand"));
        assert!(debug_str.contains("test.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Rules,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Rules"));
    }

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Languages.execute().is_ok());
        assert!(ListCommands::Rules.execute().is_ok());
    }

    #[test]
    fn test_validate_dispatch_fails_on_missing_file() {
        let cmd = Commands::Validate(validate::ValidateArgs {
            language_config: PathBuf::from("/nonexistent/lang.toml"),
        });
        assert!(cmd.execute().is_err());
    }
}
