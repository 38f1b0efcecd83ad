// Entry point for the sheet exporter.
//
// **Architecture Overview:**
// - `core/` = Configuration and the export pipeline (no direct I/O)
// - `infra/` = Google auth, Drive export and local file implementations
// - `cli/` = Argument parsing, logging setup and wiring
//
// This file's job is to:
// 1. Load `.env`
// 2. Parse arguments and resolve the configuration
// 3. Set up logging from it, run the export and turn the result into an exit code

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "cli/cli_layer.rs"]
mod cli;
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

use std::process::ExitCode;

use clap::Parser;

use crate::core::export::ExportStage;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let args = cli::Args::parse();

    let config = match cli::resolve_config(args) {
        Ok(config) => config,
        Err(err) => {
            cli::logging::init(false);
            tracing::error!("{:#}", err);
            return ExitCode::FAILURE;
        }
    };
    cli::logging::init(config.verbose);

    match cli::run(&config).await {
        Ok(report) => {
            tracing::info!(
                stage = %ExportStage::Done,
                output = %report.output_file.display(),
                bytes = report.bytes_written,
                credentials = ?report.credentials,
                "Export complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
