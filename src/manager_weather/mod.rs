pub mod models;

use std::time::Duration;
use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use crate::config::WeatherParameters;

/// Struct for fetching current weather observations
pub struct Weather {
    client: Client,
    url: String,
    api_key: String,
    cities: Vec<String>,
}

impl Weather {
    /// Returns a weather struct ready for fetching current weather
    ///
    /// # Arguments
    ///
    /// * 'config' - weather API configuration
    pub fn new(config: &WeatherParameters) -> Result<Weather, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Weather {
            client,
            url: format!("{}/{}", config.root_url.trim_end_matches('/'), config.endpoint.trim_start_matches('/')),
            api_key: config.api_key.clone(),
            cities: config.cities.clone(),
        })
    }

    /// Returns the configured cities in fetch order
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Fetches current weather for all configured cities, one after the other
    ///
    /// Only bodies from responses with status 200 are returned, any other status is skipped.
    pub fn fetch_all(&self) -> Result<Vec<String>, WeatherError> {
        let mut responses: Vec<String> = Vec::new();

        for city in self.cities.iter() {
            if let Some(body) = self.fetch_city(city)? {
                responses.push(body);
            }
        }

        Ok(responses)
    }

    /// Fetches current weather for one city
    ///
    /// Returns None if the API answered with anything but status 200
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city, as understood by the weather API
    pub fn fetch_city(&self, city: &str) -> Result<Option<String>, WeatherError> {
        let response = self.client
            .get(&self.url)
            .query(&[("q", city), ("APPID", self.api_key.as_str()), ("units", "metric")])
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("skipping {}: weather API responded with status {}", city, status);
            return Ok(None);
        }

        let body = response.text()?;
        debug!("fetched weather for {}", city);

        Ok(Some(body))
    }
}

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("NetworkError: {0}")]
    NetworkError(#[from] reqwest::Error),
}
