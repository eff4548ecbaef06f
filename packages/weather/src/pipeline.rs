//! The weather aggregation pipeline.
//!
//! Geocode → fetch → zip: resolves the place name, fetches the daily
//! payload for the resolved coordinates, and walks the parallel arrays by
//! a common index to build the ordered forecast series. A length mismatch
//! between the arrays is a collaborator contract violation and fails the
//! whole lookup — the series is never silently truncated.

use crate::config::WeatherConfig;
use crate::forecast::DailyPayload;
use crate::{conditions, forecast, geocoding, DailyForecast, Forecast, WeatherError};

/// Produces a multi-day forecast for a named place.
///
/// Geocoding strictly precedes the forecast fetch; both are single
/// attempts. On success the series holds exactly `days` entries in
/// chronological order.
///
/// # Errors
///
/// Returns [`WeatherError::LocationNotFound`] when the place cannot be
/// resolved, and [`WeatherError::Http`] / [`WeatherError::Parse`] when
/// either collaborator fails at the transport or payload level.
pub async fn forecast(
    client: &reqwest::Client,
    config: &WeatherConfig,
    place: &str,
    days: u8,
) -> Result<Forecast, WeatherError> {
    let location = geocoding::resolve_place(client, &config.geocoding_base_url, place).await?;
    log::debug!(
        "Resolved '{place}' to ({}, {})",
        location.latitude,
        location.longitude
    );

    let payload =
        forecast::fetch_daily(client, &config.forecast_base_url, location.point(), days).await?;
    let series = build_series(&payload)?;

    if series.len() != days as usize {
        return Err(WeatherError::Parse {
            message: format!("Expected {days} forecast days, got {}", series.len()),
        });
    }

    Ok(Forecast {
        location,
        days: series,
    })
}

/// Zips the parallel daily arrays into an ordered series.
fn build_series(payload: &DailyPayload) -> Result<Vec<DailyForecast>, WeatherError> {
    let len = payload.dates.len();
    if payload.temp_min.len() != len
        || payload.temp_max.len() != len
        || payload.precipitation.len() != len
        || payload.weather_codes.len() != len
    {
        return Err(WeatherError::Parse {
            message: format!(
                "Mismatched daily array lengths: dates={}, min={}, max={}, precipitation={}, codes={}",
                len,
                payload.temp_min.len(),
                payload.temp_max.len(),
                payload.precipitation.len(),
                payload.weather_codes.len()
            ),
        });
    }

    Ok((0..len)
        .map(|i| DailyForecast {
            date: payload.dates[i],
            temp_min: payload.temp_min[i],
            temp_max: payload.temp_max[i],
            precipitation: payload.precipitation[i],
            condition: conditions::describe(payload.weather_codes[i]),
        })
        .collect())
}
