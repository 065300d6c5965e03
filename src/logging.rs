use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up logging to file and, optionally, to stdout
///
/// # Arguments
///
/// * 'log_path' - path to the log file, it is created if it doesn't exist
/// * 'log_level' - the level to log at
/// * 'log_to_stdout' - whether log records also should go to stdout
pub fn setup_logger(log_path: &str, log_level: LevelFilter, log_to_stdout: bool) -> Result<Handle, LoggerError> {
    let config = logger_config(log_path, log_level, log_to_stdout)?;
    let handle = log4rs::init_config(config)
        .map_err(|e| LoggerError(e.to_string()))?;

    Ok(handle)
}

/// Builds the log4rs configuration without installing it
///
/// # Arguments
///
/// * 'log_path' - path to the log file
/// * 'log_level' - the level to log at
/// * 'log_to_stdout' - whether to add a console appender
fn logger_config(log_path: &str, log_level: LevelFilter, log_to_stdout: bool) -> Result<Config, LoggerError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_path)
        .map_err(|e| LoggerError(format!("log file {}: {}", log_path, e)))?;

    let mut builder = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    builder
        .build(root.build(log_level))
        .map_err(|e| LoggerError(e.to_string()))
}

#[derive(Debug, Error)]
#[error("LoggerError: {0}")]
pub struct LoggerError(pub String);
