use std::fs;
use chrono_tz::Tz;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct WeatherParameters {
    #[serde(default = "default_root_url")]
    pub root_url: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
}

#[derive(Deserialize)]
pub struct CsvParameters {
    #[serde(default = "default_csv_file")]
    pub file: String,
}

#[derive(Deserialize)]
pub struct KinesisParameters {
    #[serde(default = "default_stream_name")]
    pub stream_name: String,
    #[serde(default = "default_partition_key")]
    pub partition_key: String,
    #[serde(default = "default_region")]
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

#[derive(Deserialize)]
pub struct Config {
    pub general: General,
    pub weather: WeatherParameters,
    pub csv: Option<CsvParameters>,
    pub kinesis: Option<KinesisParameters>,
}

fn default_root_url() -> String { "https://api.openweathermap.org".to_string() }
fn default_endpoint() -> String { "data/2.5/weather".to_string() }
fn default_timezone() -> Tz { chrono_tz::Europe::Brussels }
fn default_csv_file() -> String { "weather_data.csv".to_string() }
fn default_stream_name() -> String { "weather_stream".to_string() }
fn default_partition_key() -> String { "city".to_string() }
fn default_region() -> String { "eu-west-1".to_string() }

fn default_cities() -> Vec<String> {
    ["Antwerp", "Bruges", "Brussels", "Charleroi", "Ghent", "Leuven", "Liege", "Mons", "Namur", "Ostend"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, LoadConfigurationError> {
    let toml = fs::read_to_string(config_path)
        .map_err(|e| LoadConfigurationError::ReadError(format!("{}: {}", config_path, e)))?;

    parse_config(&toml)
}

/// Parses configuration from a TOML document
///
/// # Arguments
///
/// * 'toml' - the configuration document
pub fn parse_config(toml: &str) -> Result<Config, LoadConfigurationError> {
    let config: Config = toml::from_str(toml)?;

    Ok(config)
}

/// Error depicting errors that occur while loading the configuration
///
#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("ReadError: {0}")]
    ReadError(String),
    #[error("ParseError: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("MissingSection: {0}")]
    MissingSection(String),
}
