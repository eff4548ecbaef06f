//! HTTP handler functions for the crop advisor API.

use actix_web::{web, HttpResponse};
use crop_advisor_recommender::pipeline;
use crop_advisor_server_models::{
    ApiForecast, ApiHealth, ApiRecommendation, ForecastQueryParams, RecommendRequest,
};
use crop_advisor_weather::pipeline as weather_pipeline;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/recommend`
///
/// Produces a crop recommendation from seven agronomic measurements.
/// Always responds with a fully populated body: missing or non-finite
/// measurements yield `success = false` plus the default catalog entry,
/// never an empty response.
pub async fn recommend(
    state: web::Data<AppState>,
    request: web::Json<RecommendRequest>,
) -> HttpResponse {
    let result = match request.feature_vector() {
        Ok(vector) => state.recommender.recommend(&vector),
        Err(e) => {
            log::error!("Invalid recommendation request: {e}");
            pipeline::failure_from_error(&e)
        }
    };

    HttpResponse::Ok().json(ApiRecommendation::from(result))
}

/// `GET /api/forecast`
///
/// Resolves the requested city and returns its daily forecast series.
/// Failures produce a body with an error message and zero data rows; the
/// page is always renderable.
pub async fn forecast(
    state: web::Data<AppState>,
    params: web::Query<ForecastQueryParams>,
) -> HttpResponse {
    let days = params.days.unwrap_or(state.weather.forecast_days);

    match weather_pipeline::forecast(&state.http, &state.weather, &params.city, days).await {
        Ok(forecast) => HttpResponse::Ok().json(ApiForecast::from(forecast)),
        Err(e) => {
            log::error!("Forecast for '{}' failed: {e}", params.city);
            HttpResponse::Ok().json(ApiForecast::error(e.to_string()))
        }
    }
}
