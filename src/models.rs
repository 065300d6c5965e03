use serde::{Deserialize, Serialize};

/// Flat weather observation for one city, columns in the order they are written to file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub id: u64,
    pub city: String,
    pub longitude: f64,
    pub latitude: f64,
    pub weather: String,
    pub description: String,
    pub cloud_percentage: u8,
    pub temperature: f64,
    pub feels_like: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub visibility: u32,
    pub wind_speed: f64,
    pub wind_deg: u16,
    pub pressure: u32,
    pub humidity: u8,
    pub date: String,
    pub time: String,
    pub sunrise: String,
    pub sunset: String,
}

/// The subset of a weather observation that is published to the stream
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StreamRecord {
    pub id: u64,
    pub city: String,
    pub weather: String,
    pub description: String,
    pub cloud_pct: u8,
    pub temperature: f64,
    pub feels_like: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub wind_speed: f64,
    pub humidity: u8,
    pub date: String,
    pub time: String,
    pub sunrise: String,
    pub sunset: String,
}

impl From<&WeatherRecord> for StreamRecord {
    fn from(r: &WeatherRecord) -> Self {
        StreamRecord {
            id: r.id,
            city: r.city.clone(),
            weather: r.weather.clone(),
            description: r.description.clone(),
            cloud_pct: r.cloud_percentage,
            temperature: r.temperature,
            feels_like: r.feels_like,
            min_temp: r.min_temp,
            max_temp: r.max_temp,
            wind_speed: r.wind_speed,
            humidity: r.humidity,
            date: r.date.clone(),
            time: r.time.clone(),
            sunrise: r.sunrise.clone(),
            sunset: r.sunset.clone(),
        }
    }
}
