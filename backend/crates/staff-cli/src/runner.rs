use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, CliResult},
    input::{is_stdin, read_request},
};

use staff_config::Config;

use std::io::Write;

use log::info;

/// Execute the parsed command, writing its result to `out`.
pub fn run<W: Write>(cli: &Cli, config: &Config, out: &mut W) -> CliResult<()> {
    let pretty = cli.pretty || config.output.pretty;

    match &cli.command {
        Commands::Inspect { file } => {
            let request = read_request(file.as_deref())?;
            writeln!(out, "{}", request)?;
        }

        Commands::Normalize { file } => {
            let request = read_request(file.as_deref())?;
            let json = if pretty {
                request.to_json_pretty()?
            } else {
                request.to_json()?
            };
            writeln!(out, "{}", json)?;
        }

        Commands::Compare { left, right } => {
            if is_stdin(Some(left.as_path())) && is_stdin(Some(right.as_path())) {
                return Err(CliError::usage("only one side of compare can read stdin"));
            }

            let left = read_request(Some(left.as_path()))?;
            let right = read_request(Some(right.as_path()))?;
            let equal = left == right;

            info!("Compared request bodies: equal={}", equal);

            writeln!(out, "{}", if equal { "equal" } else { "different" })?;
            writeln!(out, "left:  {:016x}", left.content_hash())?;
            writeln!(out, "right: {:016x}", right.content_hash())?;
        }
    }

    Ok(())
}
