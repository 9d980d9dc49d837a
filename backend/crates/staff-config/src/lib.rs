mod config;
mod error;
mod log_level;
mod logging_config;
mod output_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use output_config::OutputConfig;

const CONFIG_DIR_ENV: &str = "STAFF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".staff";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_OUTPUT_PRETTY: bool = false;
