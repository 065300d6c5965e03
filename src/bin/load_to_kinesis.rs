use anyhow::Result;
use log::{error, info};
use weather_etl::config::LoadConfigurationError;
use weather_etl::initialization::{init, InitializationError};
use weather_etl::manager_kinesis::{Kinesis, StreamSink};
use weather_etl::manager_weather::Weather;
use weather_etl::worker::load_to_stream;

fn main() -> Result<()> {
    // If initialization fails we have no logger, so the error goes straight back to the caller
    let config = match init("load_to_kinesis") {
        Ok(c) => c,
        Err(e) => {
            return Err(anyhow::anyhow!("Initialization failed: {}", e));
        }
    };

    let kinesis_config = config.kinesis
        .as_ref()
        .ok_or(InitializationError::ConfigurationError(LoadConfigurationError::MissingSection("kinesis".into())))?;

    let weather = Weather::new(&config.weather)?;
    let kinesis = Kinesis::new(kinesis_config)?;
    let sink = StreamSink::new(kinesis, kinesis_config);

    match load_to_stream(&weather, &sink, &config.weather.timezone) {
        Ok(published) => {
            info!("Run finished, {} records published to {}", published, kinesis_config.stream_name);
        },
        Err(e) => {
            error!("Run failed: {}", e);
            return Err(e)?;
        }
    }

    Ok(())
}
