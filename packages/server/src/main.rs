#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the crop advisor application.
//!
//! Serves the REST API for crop recommendations and multi-day weather
//! forecasts, plus the static frontend files.

mod handlers;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use crop_advisor_recommender::pipeline::Recommender;
use crop_advisor_weather::config::WeatherConfig;

/// Shared application state.
///
/// Everything here is built once at startup and read-only afterwards:
/// the fitted recommendation pipeline, the weather collaborator
/// configuration, and the shared HTTP client.
pub struct AppState {
    /// The fitted crop recommendation pipeline.
    pub recommender: Recommender,
    /// Weather collaborator endpoints and defaults.
    pub weather: WeatherConfig,
    /// Shared HTTP client for collaborator calls.
    pub http: reqwest::Client,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Building recommendation pipeline from fitted artifacts...");
    let recommender = Recommender::fitted();

    let weather = WeatherConfig::from_env();
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .build()
        .expect("Failed to build HTTP client");

    let state = web::Data::new(AppState {
        recommender,
        weather,
        http,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/recommend", web::post().to(handlers::recommend))
                    .route("/forecast", web::get().to(handlers::forecast)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
