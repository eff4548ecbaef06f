//! Weather collaborator configuration.
//!
//! Base URLs and the default day count come from environment variables
//! with sensible defaults, so a deployment can point at a self-hosted
//! Open-Meteo instance without a rebuild.

/// Default number of forecast days requested per lookup.
pub const DEFAULT_FORECAST_DAYS: u8 = 14;

const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com";
const DEFAULT_FORECAST_BASE_URL: &str = "https://api.open-meteo.com";

/// Configuration for the two weather collaborators.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Base URL of the geocoding service.
    pub geocoding_base_url: String,
    /// Base URL of the forecast service.
    pub forecast_base_url: String,
    /// Number of days to request when the caller does not specify one.
    pub forecast_days: u8,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            forecast_base_url: DEFAULT_FORECAST_BASE_URL.to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }
}

impl WeatherConfig {
    /// Builds the configuration from `WEATHER_GEOCODING_URL`,
    /// `WEATHER_FORECAST_URL`, and `WEATHER_FORECAST_DAYS`, falling back
    /// to the public Open-Meteo endpoints and a 14-day horizon.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            geocoding_base_url: std::env::var("WEATHER_GEOCODING_URL")
                .unwrap_or(defaults.geocoding_base_url),
            forecast_base_url: std::env::var("WEATHER_FORECAST_URL")
                .unwrap_or(defaults.forecast_base_url),
            forecast_days: std::env::var("WEATHER_FORECAST_DAYS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(defaults.forecast_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo() {
        let config = WeatherConfig::default();
        assert!(config.geocoding_base_url.contains("geocoding-api.open-meteo.com"));
        assert!(config.forecast_base_url.contains("api.open-meteo.com"));
        assert_eq!(config.forecast_days, 14);
    }
}
