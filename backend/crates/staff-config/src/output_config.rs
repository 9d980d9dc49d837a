use crate::DEFAULT_OUTPUT_PRETTY;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON written to stdout
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: DEFAULT_OUTPUT_PRETTY,
        }
    }
}
