// Kavach - PII detection and redaction for structured records
// Copyright (c) 2026 Kavach Contributors
// Licensed under the MIT License

use clap::Parser;
use kavach::cli::{Cli, Commands};
use kavach::config::{load_config, KavachConfig};
use kavach::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (falls back to defaults when the file is absent)
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    // Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Kavach - PII record redactor"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &KavachConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Redact(args) => args.execute(config),
        Commands::Scan(args) => args.execute(config),
    }
}
