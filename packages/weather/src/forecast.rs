//! Open-Meteo daily forecast client.
//!
//! Fetches the fixed daily field set (min/max temperature, precipitation
//! sum, weather code) for a number of consecutive days starting today,
//! in the location's local timezone. Single attempt, no retry.
//!
//! See <https://open-meteo.com/en/docs>

use chrono::NaiveDate;

use crate::{GeoPoint, WeatherError};

/// The raw daily forecast payload: parallel arrays indexed by day.
///
/// The collaborator contract is that all five arrays have equal length;
/// the pipeline verifies that when zipping them into a series.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPayload {
    /// Calendar dates, one per day.
    pub dates: Vec<NaiveDate>,
    /// Daily minimum temperatures in °C.
    pub temp_min: Vec<f64>,
    /// Daily maximum temperatures in °C.
    pub temp_max: Vec<f64>,
    /// Daily precipitation sums in mm.
    pub precipitation: Vec<f64>,
    /// Daily WMO weather condition codes.
    pub weather_codes: Vec<i32>,
}

/// Fetches a daily forecast for the given coordinates.
///
/// # Errors
///
/// Returns [`WeatherError`] if the HTTP request fails, the service
/// responds with a non-success status, or the payload is malformed.
pub async fn fetch_daily(
    client: &reqwest::Client,
    base_url: &str,
    point: GeoPoint,
    days: u8,
) -> Result<DailyPayload, WeatherError> {
    let url = format!("{base_url}/v1/forecast");

    let resp = client
        .get(&url)
        .query(&[
            ("latitude", point.latitude.to_string()),
            ("longitude", point.longitude.to_string()),
            (
                "daily",
                "temperature_2m_min,temperature_2m_max,precipitation_sum,weather_code"
                    .to_string(),
            ),
            ("forecast_days", days.to_string()),
            ("timezone", "auto".to_string()),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(WeatherError::Parse {
            message: format!("Forecast service returned status {}", resp.status()),
        });
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses an Open-Meteo forecast response into parallel daily arrays.
fn parse_response(body: &serde_json::Value) -> Result<DailyPayload, WeatherError> {
    let daily = body.get("daily").ok_or_else(|| WeatherError::Parse {
        message: "Forecast response missing 'daily' block".to_string(),
    })?;

    Ok(DailyPayload {
        dates: date_series(daily, "time")?,
        temp_min: number_series(daily, "temperature_2m_min")?,
        temp_max: number_series(daily, "temperature_2m_max")?,
        precipitation: number_series(daily, "precipitation_sum")?,
        weather_codes: code_series(daily, "weather_code")?,
    })
}

fn series<'a>(
    daily: &'a serde_json::Value,
    key: &str,
) -> Result<&'a Vec<serde_json::Value>, WeatherError> {
    daily
        .get(key)
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| WeatherError::Parse {
            message: format!("Forecast 'daily' block missing '{key}' array"),
        })
}

fn date_series(daily: &serde_json::Value, key: &str) -> Result<Vec<NaiveDate>, WeatherError> {
    series(daily, key)?
        .iter()
        .map(|value| {
            value
                .as_str()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                .ok_or_else(|| WeatherError::Parse {
                    message: format!("Invalid date '{value}' in '{key}' array"),
                })
        })
        .collect()
}

fn number_series(daily: &serde_json::Value, key: &str) -> Result<Vec<f64>, WeatherError> {
    series(daily, key)?
        .iter()
        .map(|value| {
            value.as_f64().ok_or_else(|| WeatherError::Parse {
                message: format!("Non-numeric value '{value}' in '{key}' array"),
            })
        })
        .collect()
}

fn code_series(daily: &serde_json::Value, key: &str) -> Result<Vec<i32>, WeatherError> {
    series(daily, key)?
        .iter()
        .map(|value| {
            value
                .as_i64()
                .and_then(|code| i32::try_from(code).ok())
                .ok_or_else(|| WeatherError::Parse {
                    message: format!("Invalid weather code '{value}' in '{key}' array"),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_daily_arrays() {
        let body = serde_json::json!({
            "daily": {
                "time": ["2026-08-08", "2026-08-09"],
                "temperature_2m_min": [22.1, 21.7],
                "temperature_2m_max": [29.4, 30.0],
                "precipitation_sum": [4.2, 0.0],
                "weather_code": [61, 2]
            }
        });
        let payload = parse_response(&body).unwrap();
        assert_eq!(payload.dates.len(), 2);
        assert_eq!(
            payload.dates[0],
            NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
        );
        assert!((payload.temp_min[1] - 21.7).abs() < 1e-9);
        assert!((payload.temp_max[0] - 29.4).abs() < 1e-9);
        assert!((payload.precipitation[0] - 4.2).abs() < 1e-9);
        assert_eq!(payload.weather_codes, vec![61, 2]);
    }

    #[test]
    fn missing_daily_block_is_parse_error() {
        let body = serde_json::json!({ "latitude": 18.5 });
        assert!(matches!(
            parse_response(&body).unwrap_err(),
            WeatherError::Parse { ref message } if message.contains("'daily'")
        ));
    }

    #[test]
    fn missing_field_array_is_parse_error() {
        let body = serde_json::json!({
            "daily": {
                "time": ["2026-08-08"],
                "temperature_2m_min": [22.1],
                "temperature_2m_max": [29.4],
                "precipitation_sum": [4.2]
            }
        });
        assert!(matches!(
            parse_response(&body).unwrap_err(),
            WeatherError::Parse { ref message } if message.contains("weather_code")
        ));
    }

    #[test]
    fn malformed_date_is_parse_error() {
        let body = serde_json::json!({
            "daily": {
                "time": ["08/08/2026"],
                "temperature_2m_min": [22.1],
                "temperature_2m_max": [29.4],
                "precipitation_sum": [4.2],
                "weather_code": [61]
            }
        });
        assert!(matches!(
            parse_response(&body).unwrap_err(),
            WeatherError::Parse { .. }
        ));
    }

    #[test]
    fn non_numeric_temperature_is_parse_error() {
        let body = serde_json::json!({
            "daily": {
                "time": ["2026-08-08"],
                "temperature_2m_min": ["cold"],
                "temperature_2m_max": [29.4],
                "precipitation_sum": [4.2],
                "weather_code": [61]
            }
        });
        assert!(matches!(
            parse_response(&body).unwrap_err(),
            WeatherError::Parse { ref message } if message.contains("temperature_2m_min")
        ));
    }
}
