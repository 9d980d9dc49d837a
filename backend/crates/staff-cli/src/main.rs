//! staff - participation request tool
//!
//! Decodes "create participation" request bodies the way the backend does
//! and shows what it would receive.
//!
//! # Examples
//!
//! ```bash
//! # Show the decoded value
//! staff inspect request.json
//!
//! # Rewrite a legacy body with canonical field names
//! echo '{"matricule": 4, "codeProjet": 2, "pourcentage": 0.5}' | staff normalize --pretty
//!
//! # Check whether two bodies carry the same values
//! staff compare before.json after.json
//! ```

use staff_cli::{Cli, CliResult, logger, run};
use staff_config::{Config, LogLevel};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> CliResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let level = match cli.log_level.as_deref() {
        Some(name) => LogLevel::parse(name),
        None => config.logging.level,
    };
    logger::initialize(*level, config.log_file_path()?, config.logging.colored)?;

    config.log_summary();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &config, &mut out)
}
