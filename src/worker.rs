use chrono_tz::Tz;
use log::info;
use thiserror::Error;
use crate::extraction::{extract_raw, ExtractError};
use crate::manager_csv::{CsvError, CsvFile};
use crate::manager_kinesis::errors::KinesisError;
use crate::manager_kinesis::{Publisher, StreamSink};
use crate::manager_weather::{Weather, WeatherError};
use crate::models::{StreamRecord, WeatherRecord};

/// Fetches weather for all cities, extracts the records and appends them to file
///
/// Returns the number of rows appended
///
/// # Arguments
///
/// * 'weather' - the weather fetcher
/// * 'csv' - the file to append to
/// * 'tz' - time zone for dates and times in the records
pub fn collect_to_csv(weather: &Weather, csv: &CsvFile, tz: &Tz) -> Result<usize, WorkerError> {
    let responses = weather.fetch_all()?;
    info!("fetched {} of {} cities", responses.len(), weather.cities().len());

    let records = responses
        .iter()
        .map(|r| extract_raw(r, tz))
        .collect::<Result<Vec<WeatherRecord>, ExtractError>>()?;

    Ok(csv.append(&records)?)
}

/// Fetches weather city by city and publishes each extracted record to the stream
///
/// Returns the number of records published
///
/// # Arguments
///
/// * 'weather' - the weather fetcher
/// * 'sink' - the stream to publish to
/// * 'tz' - time zone for dates and times in the records
pub fn load_to_stream<P: Publisher>(weather: &Weather, sink: &StreamSink<P>, tz: &Tz) -> Result<usize, WorkerError> {
    let mut published: usize = 0;

    for city in weather.cities() {
        if let Some(raw) = weather.fetch_city(city)? {
            let record = extract_raw(&raw, tz)?;
            sink.put(&StreamRecord::from(&record))?;
            published += 1;
        }
    }

    info!("published {} of {} cities", published, weather.cities().len());
    Ok(published)
}

/// Error depicting errors that occur during a run
///
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("FetchError: {0}")]
    FetchError(#[from] WeatherError),
    #[error("ExtractError: {0}")]
    ExtractError(#[from] ExtractError),
    #[error("CsvError: {0}")]
    CsvError(#[from] CsvError),
    #[error("PublishError: {0}")]
    PublishError(#[from] KinesisError),
}
