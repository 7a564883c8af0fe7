//! Expand command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageSource;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use sansoz_core::{Expansion, NumeralExpander, RuleHit, RuleKind};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the expand command
#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Input files or patterns (supports glob); reads stdin when neither
    /// files nor --text are given
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Expand this text instead of reading files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Built-in language data
    #[arg(
        short,
        long,
        value_enum,
        default_value = "kazakh",
        conflicts_with = "language_config"
    )]
    pub language: Option<Language>,

    /// External language configuration file (TOML)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Override the language code of an external configuration
    #[arg(long, value_name = "CODE", requires = "language_config")]
    pub language_code: Option<String>,

    /// Expand lines in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Expanded text only
    Text,
    /// JSON array with the input, the expansion and the rules that fired
    Json,
}

/// Supported built-in languages
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Language {
    /// Kazakh numeral data
    Kazakh,
}

impl ExpandArgs {
    /// Execute the expand command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting numeral expansion");
        log::debug!("Arguments: {:?}", self);

        let source = self.language_source();
        log::info!("Language data: {}", source.display_name());
        let expander = source.expander()?;

        let mut formatter = self.formatter()?;

        if let Some(text) = &self.text {
            let expansion = self.expand_document(&expander, text)?;
            formatter.format_expansion("<text>", text, &expansion)?;
        } else if self.input.is_empty() {
            let text = FileReader::read_all(io::stdin().lock())?;
            let expansion = self.expand_document(&expander, &text)?;
            formatter.format_expansion("<stdin>", &text, &expansion)?;
        } else {
            let files = resolve_patterns(&self.input)
                .map_err(|e| CliError::InvalidPattern(e.to_string()))?;
            log::info!("Found {} file(s) to expand", files.len());

            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for path in &files {
                let text = FileReader::read_text(path)?;
                let expansion = self
                    .expand_document(&expander, &text)
                    .with_context(|| format!("Failed to expand {}", path.display()))?;
                let name = path.display().to_string();
                formatter.format_expansion(&name, &text, &expansion)?;
                progress.file_completed(&name);
            }

            progress.finish();
        }

        formatter.finish()
    }

    fn language_source(&self) -> LanguageSource {
        match &self.language_config {
            Some(path) => LanguageSource::External {
                path: path.clone(),
                language_code: self.language_code.clone(),
            },
            None => LanguageSource::BuiltIn(self.language.unwrap_or(Language::Kazakh)),
        }
    }

    fn formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let formatter: Box<dyn OutputFormatter> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                match self.format {
                    OutputFormat::Text => Box::new(TextFormatter::new(BufWriter::new(file))),
                    OutputFormat::Json => Box::new(JsonFormatter::new(BufWriter::new(file))),
                }
            }
            None => match self.format {
                OutputFormat::Text => Box::new(TextFormatter::stdout()),
                OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
            },
        };
        Ok(formatter)
    }

    fn expand_document(&self, expander: &NumeralExpander, text: &str) -> Result<Expansion> {
        let expansion = if self.parallel {
            expand_lines_parallel(expander, text)
        } else {
            expander.expand_with_report(text)
        }
        .map_err(|e| CliError::ExpansionError(e.to_string()))?;

        if !expansion.is_complete() {
            log::warn!("Some digits were left unexpanded");
        }
        log::info!("Rewrote {} numeral token(s)", expansion.total_matches());
        Ok(expansion)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when called more than once in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Expand each line on the rayon pool and stitch the results back together.
///
/// Tokens never span lines here, unlike whole-text expansion.
pub fn expand_lines_parallel(
    expander: &NumeralExpander,
    text: &str,
) -> sansoz_core::Result<Expansion> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let expansions = lines
        .par_iter()
        .map(|line| expander.expand_with_report(line))
        .collect::<sansoz_core::Result<Vec<_>>>()?;

    let mut counts = [0usize; RuleKind::ORDER.len()];
    let mut out = String::with_capacity(text.len());
    for expansion in &expansions {
        out.push_str(&expansion.text);
        for hit in &expansion.hits {
            if let Some(index) = RuleKind::ORDER.iter().position(|kind| *kind == hit.rule) {
                counts[index] += hit.matches;
            }
        }
    }

    let hits = RuleKind::ORDER
        .iter()
        .zip(counts)
        .filter(|(_, matches)| *matches > 0)
        .map(|(rule, matches)| RuleHit {
            rule: *rule,
            matches,
        })
        .collect();

    Ok(Expansion { text: out, hits })
}
