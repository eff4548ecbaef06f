//! Open-Meteo geocoding client.
//!
//! Resolves a free-text place name against the `/v1/search` endpoint.
//! When several candidates match, the first one wins — no ranking by
//! population or country; duplicate place names are ambiguous by design.
//!
//! See <https://open-meteo.com/en/docs/geocoding-api>

use crate::{ResolvedLocation, WeatherError};

/// Resolves a place name to coordinates.
///
/// A non-success status or an empty candidate list is reported as
/// [`WeatherError::LocationNotFound`]; transport and payload-format
/// failures surface as [`WeatherError::Http`] / [`WeatherError::Parse`].
///
/// # Errors
///
/// Returns [`WeatherError`] if the place cannot be resolved or the HTTP
/// request or response parsing fails.
pub async fn resolve_place(
    client: &reqwest::Client,
    base_url: &str,
    place: &str,
) -> Result<ResolvedLocation, WeatherError> {
    let url = format!("{base_url}/v1/search");

    let resp = client
        .get(&url)
        .query(&[("name", place), ("count", "5"), ("format", "json")])
        .send()
        .await?;

    if !resp.status().is_success() {
        log::warn!(
            "Geocoding for '{place}' returned status {}",
            resp.status()
        );
        return Err(WeatherError::LocationNotFound {
            place: place.to_string(),
        });
    }

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body, place)
}

/// Parses an Open-Meteo geocoding response, selecting the first
/// candidate.
fn parse_response(
    body: &serde_json::Value,
    place: &str,
) -> Result<ResolvedLocation, WeatherError> {
    if !body.is_object() {
        return Err(WeatherError::Parse {
            message: "Geocoding response is not an object".to_string(),
        });
    }

    // A miss omits the `results` key entirely.
    let Some(first) = body
        .get("results")
        .and_then(serde_json::Value::as_array)
        .and_then(|results| results.first())
    else {
        return Err(WeatherError::LocationNotFound {
            place: place.to_string(),
        });
    };

    let latitude = first["latitude"]
        .as_f64()
        .ok_or_else(|| WeatherError::Parse {
            message: "Missing latitude in geocoding candidate".to_string(),
        })?;

    let longitude = first["longitude"]
        .as_f64()
        .ok_or_else(|| WeatherError::Parse {
            message: "Missing longitude in geocoding candidate".to_string(),
        })?;

    let name = first["name"].as_str();
    let country = first["country"].as_str();
    let label = match (name, country) {
        (Some(n), Some(c)) => Some(format!("{n}, {c}")),
        (Some(n), None) => Some(n.to_string()),
        _ => None,
    };

    Ok(ResolvedLocation {
        latitude,
        longitude,
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_candidate() {
        let body = serde_json::json!({
            "results": [
                {
                    "name": "Pune",
                    "latitude": 18.51957,
                    "longitude": 73.85535,
                    "country": "India"
                },
                {
                    "name": "Pune",
                    "latitude": 19.0,
                    "longitude": 74.0,
                    "country": "India"
                }
            ]
        });
        let location = parse_response(&body, "Pune").unwrap();
        assert!((location.latitude - 18.51957).abs() < 1e-6);
        assert!((location.longitude - 73.85535).abs() < 1e-6);
        assert_eq!(location.label.as_deref(), Some("Pune, India"));
    }

    #[test]
    fn missing_results_key_is_location_not_found() {
        let body = serde_json::json!({ "generationtime_ms": 0.5 });
        let err = parse_response(&body, "Nonexistentplacexyz").unwrap_err();
        assert!(matches!(
            err,
            WeatherError::LocationNotFound { ref place } if place == "Nonexistentplacexyz"
        ));
    }

    #[test]
    fn empty_results_is_location_not_found() {
        let body = serde_json::json!({ "results": [] });
        assert!(matches!(
            parse_response(&body, "Atlantis").unwrap_err(),
            WeatherError::LocationNotFound { .. }
        ));
    }

    #[test]
    fn candidate_without_coordinates_is_parse_error() {
        let body = serde_json::json!({ "results": [{ "name": "Pune" }] });
        assert!(matches!(
            parse_response(&body, "Pune").unwrap_err(),
            WeatherError::Parse { .. }
        ));
    }

    #[test]
    fn label_without_country_uses_name_alone() {
        let body = serde_json::json!({
            "results": [{ "name": "Pune", "latitude": 18.5, "longitude": 73.9 }]
        });
        let location = parse_response(&body, "Pune").unwrap();
        assert_eq!(location.label.as_deref(), Some("Pune"));
    }
}
