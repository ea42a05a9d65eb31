//! Redact command implementation
//!
//! Reads an input CSV of JSON records, masks detected PII, and writes
//! one output row per input row.

use crate::config::KavachConfig;
use crate::pipeline::Pipeline;
use crate::redaction::RecordRedactor;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Input CSV file with a record_id column and a JSON data column
    pub input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "redacted_output.csv")]
    pub output: PathBuf,

    /// Detect and report without writing redacted output
    #[arg(long)]
    pub dry_run: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub fn execute(&self, config: &KavachConfig) -> anyhow::Result<i32> {
        if !self.input.exists() {
            eprintln!("❌ Input file not found: {}", self.input.display());
            return Ok(1);
        }

        let mut redaction_config = config.redaction.clone();
        if self.dry_run {
            redaction_config.dry_run = true;
        }
        let dry_run = redaction_config.dry_run;

        tracing::info!(
            input = %self.input.display(),
            output = %self.output.display(),
            dry_run,
            "Starting redaction"
        );

        let redactor =
            RecordRedactor::new(redaction_config).context("Failed to initialize redactor")?;
        let pipeline = Pipeline::new(&redactor);

        let output = if dry_run {
            None
        } else {
            Some(self.output.as_path())
        };

        let (summary, report) = pipeline
            .run(&self.input, output)
            .with_context(|| format!("Failed to process {}", self.input.display()))?;

        if dry_run {
            print!("{}", report.format_console());
            println!(
                "Dry run: no output written. {} of {} records would be flagged as PII.",
                summary.records_flagged, summary.records_read
            );
        } else {
            println!(
                "✅ Processed {} records ({} flagged as PII) in {} ms",
                summary.records_read, summary.records_flagged, summary.duration_ms
            );
            println!("   Output written to {}", self.output.display());
            if summary.parse_failures > 0 {
                println!(
                    "⚠️  {} records had malformed JSON and were passed through empty",
                    summary.parse_failures
                );
            }
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_args_default_output() {
        let args = RedactArgs {
            input: PathBuf::from("input.csv"),
            output: PathBuf::from("redacted_output.csv"),
            dry_run: false,
        };
        assert_eq!(args.output, PathBuf::from("redacted_output.csv"));
    }

    #[test]
    fn test_missing_input_exits_with_error_code() {
        let args = RedactArgs {
            input: PathBuf::from("no-such-file.csv"),
            output: PathBuf::from("out.csv"),
            dry_run: false,
        };
        let code = args.execute(&KavachConfig::default()).unwrap();
        assert_eq!(code, 1);
    }
}
