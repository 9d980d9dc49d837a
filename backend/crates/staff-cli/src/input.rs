use crate::error::{CliError, CliResult};

use staff_core::ParticipationRequest;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

const STDIN_MARKER: &str = "-";

/// True when the argument means "read stdin"
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p.as_os_str() == STDIN_MARKER)
}

/// Decode one request body from a file, or from stdin when no path (or "-") is given
pub fn read_request(path: Option<&Path>) -> CliResult<ParticipationRequest> {
    match path {
        Some(path) if !is_stdin(Some(path)) => read_request_file(path),
        _ => {
            debug!("Reading request body from stdin");
            let stdin = std::io::stdin();
            Ok(ParticipationRequest::from_reader(stdin.lock())?)
        }
    }
}

pub fn read_request_file(path: &Path) -> CliResult<ParticipationRequest> {
    debug!("Reading request body from {}", path.display());

    let file = File::open(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ParticipationRequest::from_reader(BufReader::new(file))?)
}
