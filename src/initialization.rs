use std::env;
use log::info;
use thiserror::Error;
use crate::config::{load_config, Config, LoadConfigurationError};
use crate::logging::{setup_logger, LoggerError};

/// Loads configuration given by the '--config=' argument and sets up logging
///
/// # Arguments
///
/// * 'app' - name of the entry point, used in the startup log record
pub fn init(app: &str) -> Result<Config, InitializationError> {
    let args: Vec<String> = env::args().collect();
    let config_path = config_path(&args)?;

    // Load configuration
    let config = load_config(config_path)?;

    // Setup logging
    let _ = setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stdout)?;

    // Print version
    info!("starting {} version: {}", app, env!("CARGO_PKG_VERSION"));

    Ok(config)
}

/// Finds the configuration file path among the program arguments
///
/// # Arguments
///
/// * 'args' - program arguments
fn config_path(args: &[String]) -> Result<&str, InitializationError> {
    args.iter()
        .find_map(|p| p.strip_prefix("--config="))
        .filter(|p| !p.is_empty())
        .ok_or(InitializationError::ArgumentError("expected --config=<path to config file>".to_string()))
}

/// Error depicting errors that occur while initializing
///
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("ArgumentError: {0}")]
    ArgumentError(String),
    #[error("ConfigurationError: {0}")]
    ConfigurationError(#[from] LoadConfigurationError),
    #[error("SetupLoggerError: {0}")]
    SetupLoggerError(#[from] LoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(a: &[&str]) -> Vec<String> {
        a.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn finds_config_argument() {
        let a = args(&["collect_data", "--config=/etc/weather_etl/config.toml"]);

        assert_eq!(config_path(&a).unwrap(), "/etc/weather_etl/config.toml");
    }

    #[test]
    fn missing_or_empty_config_argument() {
        assert!(matches!(config_path(&args(&["collect_data"])), Err(InitializationError::ArgumentError(_))));
        assert!(matches!(config_path(&args(&["collect_data", "--config="])), Err(InitializationError::ArgumentError(_))));
    }
}
