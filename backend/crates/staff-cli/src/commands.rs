use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a request body and print its display form
    Inspect {
        /// Request body file; omit or pass "-" to read stdin
        file: Option<PathBuf>,
    },

    /// Decode a request body and print it back as canonical JSON
    Normalize {
        /// Request body file; omit or pass "-" to read stdin
        file: Option<PathBuf>,
    },

    /// Decode two request bodies and report whether they are equal
    Compare {
        /// First request body ("-" for stdin)
        left: PathBuf,

        /// Second request body ("-" for stdin)
        right: PathBuf,
    },
}
