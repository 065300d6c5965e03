use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Deserialize, Debug)]
pub struct Condition {
    pub main: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: u32,
    pub humidity: u8,
}

#[derive(Deserialize, Debug)]
pub struct Clouds {
    pub all: u8,
}

#[derive(Deserialize, Debug)]
pub struct Wind {
    pub speed: f64,
    pub deg: u16,
}

#[derive(Deserialize, Debug)]
pub struct Sys {
    pub sunrise: i64,
    pub sunset: i64,
}

/// Current weather document as returned by the OpenWeatherMap weather endpoint
#[derive(Deserialize, Debug)]
pub struct WeatherResponse {
    pub coord: Coord,
    pub weather: Vec<Condition>,
    pub main: Main,
    pub visibility: u32,
    pub wind: Wind,
    pub clouds: Clouds,
    pub dt: i64,
    pub sys: Sys,
    pub id: u64,
    pub name: String,
}
