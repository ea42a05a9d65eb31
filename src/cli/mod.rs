//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Kavach using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Kavach - PII detection and redaction for structured records
#[derive(Parser, Debug)]
#[command(name = "kavach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "kavach.toml", env = "KAVACH_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KAVACH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redact PII from a CSV of JSON records
    Redact(commands::redact::RedactArgs),

    /// Scan a CSV for PII without writing redacted output
    Scan(commands::scan::ScanArgs),
}
