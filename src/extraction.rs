use chrono::DateTime;
use chrono_tz::Tz;
use thiserror::Error;
use crate::manager_weather::models::WeatherResponse;
use crate::models::WeatherRecord;

/// Converts a unix timestamp to a local date and time
///
/// Returns a tuple of date as 'YYYY-MM-DD' and time as 'HH:MM:SS'
///
/// # Arguments
///
/// * 'unix_timestamp' - seconds since 1970-01-01T00:00:00Z
/// * 'tz' - the time zone to express the date and time in
pub fn convert_time(unix_timestamp: i64, tz: &Tz) -> Result<(String, String), ExtractError> {
    let utc = DateTime::from_timestamp(unix_timestamp, 0)
        .ok_or(ExtractError::Timestamp(unix_timestamp))?;
    let local = utc.with_timezone(tz);

    Ok((local.format("%Y-%m-%d").to_string(), local.format("%H:%M:%S").to_string()))
}

/// Parses a raw weather API response
///
/// # Arguments
///
/// * 'raw' - the JSON body as received from the weather API
pub fn parse_response(raw: &str) -> Result<WeatherResponse, ExtractError> {
    let response: WeatherResponse = serde_json::from_str(raw)?;

    Ok(response)
}

/// Extracts the relevant weather information from a weather API response
///
/// # Arguments
///
/// * 'response' - the parsed weather API response
/// * 'tz' - time zone for observation, sunrise and sunset times
pub fn extract_info(response: &WeatherResponse, tz: &Tz) -> Result<WeatherRecord, ExtractError> {
    let condition = response.weather
        .first()
        .ok_or(ExtractError::MissingCondition(response.id))?;

    let (date, time) = convert_time(response.dt, tz)?;
    let (_, sunrise) = convert_time(response.sys.sunrise, tz)?;
    let (_, sunset) = convert_time(response.sys.sunset, tz)?;

    Ok(WeatherRecord {
        id: response.id,
        city: response.name.clone(),
        longitude: response.coord.lon,
        latitude: response.coord.lat,
        weather: condition.main.clone(),
        description: condition.description.clone(),
        cloud_percentage: response.clouds.all,
        temperature: response.main.temp,
        feels_like: response.main.feels_like,
        min_temp: response.main.temp_min,
        max_temp: response.main.temp_max,
        visibility: response.visibility,
        wind_speed: round_to_two_decimals(response.wind.speed * 60.0 * 60.0 / 1000.0),
        wind_deg: response.wind.deg,
        pressure: response.main.pressure,
        humidity: response.main.humidity,
        date,
        time,
        sunrise,
        sunset,
    })
}

/// Parses a raw response and extracts a weather record from it
///
/// # Arguments
///
/// * 'raw' - the JSON body as received from the weather API
/// * 'tz' - time zone for observation, sunrise and sunset times
pub fn extract_raw(raw: &str, tz: &Tz) -> Result<WeatherRecord, ExtractError> {
    let response = parse_response(raw)?;
    extract_info(&response, tz)
}

/// Rounds values to two decimals
///
/// # Arguments
///
/// * 'value' - the value to round to two decimals
fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100f64).round() / 100f64
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("DocumentError: {0}")]
    DocumentError(#[from] serde_json::Error),
    #[error("MissingCondition: no weather condition for city id {0}")]
    MissingCondition(u64),
    #[error("Timestamp: {0} is out of range")]
    Timestamp(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Brussels;
    use crate::manager_weather::tests::payload;
    use crate::models::StreamRecord;

    #[test]
    fn convert_time_in_winter() {
        assert_eq!(convert_time(1700000000, &Brussels).unwrap(), ("2023-11-14".to_string(), "23:13:20".to_string()));
    }

    #[test]
    fn convert_time_in_summer() {
        assert_eq!(convert_time(1688169600, &Brussels).unwrap(), ("2023-07-01".to_string(), "02:00:00".to_string()));
    }

    #[test]
    fn convert_time_is_deterministic() {
        assert_eq!(convert_time(0, &Brussels).unwrap(), ("1970-01-01".to_string(), "01:00:00".to_string()));
        assert_eq!(convert_time(0, &Brussels).unwrap(), convert_time(0, &Brussels).unwrap());
    }

    #[test]
    fn convert_time_out_of_range() {
        assert!(matches!(convert_time(i64::MAX, &Brussels), Err(ExtractError::Timestamp(i64::MAX))));
    }

    #[test]
    fn extracts_all_fields() {
        let record = extract_raw(&payload(2803138, "Antwerp"), &Brussels).unwrap();

        assert_eq!(record, WeatherRecord {
            id: 2803138,
            city: "Antwerp".to_string(),
            longitude: 4.4035,
            latitude: 51.2199,
            weather: "Clouds".to_string(),
            description: "broken clouds".to_string(),
            cloud_percentage: 75,
            temperature: 8.45,
            feels_like: 6.12,
            min_temp: 7.22,
            max_temp: 9.44,
            visibility: 10000,
            wind_speed: 12.96,
            wind_deg: 230,
            pressure: 1012,
            humidity: 87,
            date: "2023-11-14".to_string(),
            time: "23:13:20".to_string(),
            sunrise: "08:00:00".to_string(),
            sunset: "17:10:00".to_string(),
        });
    }

    #[test]
    fn wind_speed_is_converted_to_kmh() {
        let raw = payload(1, "Ostend").replace(r#""speed": 3.6"#, r#""speed": 5.14"#);
        let record = extract_raw(&raw, &Brussels).unwrap();

        assert_eq!(record.wind_speed, 18.5);
    }

    #[test]
    fn stream_record_is_a_projection() {
        let record = extract_raw(&payload(2800866, "Brussels"), &Brussels).unwrap();
        let stream = StreamRecord::from(&record);

        assert_eq!(stream.id, record.id);
        assert_eq!(stream.cloud_pct, record.cloud_percentage);
        assert_eq!(stream.wind_speed, record.wind_speed);
        assert_eq!(stream.sunset, record.sunset);

        let json = serde_json::to_value(&stream).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 15);
    }

    #[test]
    fn missing_sunrise_fails() {
        let raw = payload(1, "Liege").replace(r#""sunrise": 1699945200, "#, "");

        assert!(matches!(extract_raw(&raw, &Brussels), Err(ExtractError::DocumentError(_))));
    }

    #[test]
    fn empty_weather_array_fails() {
        let raw = payload(2791537, "Mons")
            .replace(r#"[{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04n"}]"#, "[]");

        assert!(matches!(extract_raw(&raw, &Brussels), Err(ExtractError::MissingCondition(2791537))));
    }
}
