use anyhow::Result;
use log::{error, info};
use weather_etl::config::LoadConfigurationError;
use weather_etl::initialization::{init, InitializationError};
use weather_etl::manager_csv::CsvFile;
use weather_etl::manager_weather::Weather;
use weather_etl::worker::collect_to_csv;

fn main() -> Result<()> {
    // If initialization fails we have no logger, so the error goes straight back to the caller
    let config = match init("collect_data") {
        Ok(c) => c,
        Err(e) => {
            return Err(anyhow::anyhow!("Initialization failed: {}", e));
        }
    };

    let csv_config = config.csv
        .as_ref()
        .ok_or(InitializationError::ConfigurationError(LoadConfigurationError::MissingSection("csv".into())))?;

    let weather = Weather::new(&config.weather)?;
    let csv = CsvFile::new(csv_config);

    match collect_to_csv(&weather, &csv, &config.weather.timezone) {
        Ok(rows) => {
            info!("Run finished, {} rows appended to {}", rows, csv_config.file);
        },
        Err(e) => {
            error!("Run failed: {}", e);
            return Err(e)?;
        }
    }

    Ok(())
}
