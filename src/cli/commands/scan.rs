//! Scan command implementation
//!
//! Detection-only pass over an input CSV: classifies records and prints
//! a report, never writing redacted output.

use crate::config::KavachConfig;
use crate::pipeline::Pipeline;
use crate::redaction::{RecordRedactor, RedactionConfig};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input CSV file with a record_id column and a JSON data column
    pub input: PathBuf,

    /// Print the report as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self, config: &KavachConfig) -> anyhow::Result<i32> {
        if !self.input.exists() {
            eprintln!("❌ Input file not found: {}", self.input.display());
            return Ok(1);
        }

        tracing::info!(input = %self.input.display(), "Starting scan");

        // Scanning never rewrites values, whatever the config says
        let redaction_config = RedactionConfig {
            dry_run: true,
            ..config.redaction.clone()
        };

        let redactor =
            RecordRedactor::new(redaction_config).context("Failed to initialize redactor")?;
        let pipeline = Pipeline::new(&redactor);

        let (_summary, report) = pipeline
            .run(&self.input, None)
            .with_context(|| format!("Failed to process {}", self.input.display()))?;

        if self.json {
            println!(
                "{}",
                report.format_json().context("Failed to serialize report")?
            );
        } else {
            print!("{}", report.format_console());
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_exits_with_error_code() {
        let args = ScanArgs {
            input: PathBuf::from("no-such-file.csv"),
            json: false,
        };
        let code = args.execute(&KavachConfig::default()).unwrap();
        assert_eq!(code, 1);
    }
}
