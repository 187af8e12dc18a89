#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the subdivision map.
//!
//! Serves the read-only REST API the map frontend uses to draw zones,
//! resolve clicks, show zone and house details, and render the admin and
//! owner dashboards, plus the built frontend from `app/dist`.
//!
//! The subdivision store is built once at startup from the embedded
//! definition (or `SUBDIVISION_FILE`) and mock data seeded from
//! `SUBDIVISION_SEED`, and is shared immutably across workers.

mod handlers;
pub mod interactive;

use std::{num::ParseIntError, path::Path, sync::Arc};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use subdivision_map_generate::{MockGenerator, generate_store};
use subdivision_map_spatial::ZoneIndex;
use subdivision_map_zone::{
    ZoneError, ZoneStore,
    registry::{default_definition, load_definition},
};
use thiserror::Error;

/// Errors that can occur while preparing the server's data.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Loading the definition or building the store failed.
    #[error(transparent)]
    Zone(#[from] ZoneError),

    /// `SUBDIVISION_SEED` is not a valid `u64`.
    #[error("Invalid SUBDIVISION_SEED '{value}': {source}")]
    InvalidSeed {
        /// The rejected value.
        value: String,
        /// The parse failure.
        source: ParseIntError,
    },
}

/// Shared application state.
pub struct AppState {
    /// The subdivision store.
    pub store: Arc<ZoneStore>,
    /// Spatial index over the store's zone polygons.
    pub index: Arc<ZoneIndex>,
}

impl AppState {
    /// Wraps a store and builds its spatial index.
    #[must_use]
    pub fn new(store: ZoneStore) -> Self {
        let index = ZoneIndex::build(store.zones());
        Self {
            store: Arc::new(store),
            index: Arc::new(index),
        }
    }
}

/// Builds the subdivision store from the environment.
///
/// Reads the definition from `SUBDIVISION_FILE` when set, otherwise uses
/// the embedded definition. Mock data is seeded from `SUBDIVISION_SEED`
/// when set, otherwise from a random (logged) seed.
///
/// # Errors
///
/// * If the definition file cannot be read or parsed
/// * If `SUBDIVISION_SEED` is not a valid `u64`
/// * If the generated store fails validation
pub fn load_store() -> Result<ZoneStore, StartupError> {
    let definition = match std::env::var("SUBDIVISION_FILE") {
        Ok(path) => load_definition(Path::new(&path))?,
        Err(_) => default_definition(),
    };

    let mut generator = match std::env::var("SUBDIVISION_SEED") {
        Ok(value) => {
            let seed = value
                .trim()
                .parse()
                .map_err(|source| StartupError::InvalidSeed {
                    value: value.clone(),
                    source,
                })?;
            log::info!("Generating mock data with seed {seed}");
            MockGenerator::seeded(seed)
        }
        Err(_) => MockGenerator::from_entropy(),
    };

    Ok(generate_store(&definition, &mut generator)?)
}

/// Registers the `/api` routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/statuses", web::get().to(handlers::statuses))
            .route(
                "/incident-categories",
                web::get().to(handlers::incident_categories),
            )
            .route("/zones", web::get().to(handlers::zones))
            // Must precede `/zones/{zone_id}`
            .route("/zones/geojson", web::get().to(handlers::zones_geojson))
            .route("/zones/{zone_id}", web::get().to(handlers::zone))
            .route(
                "/zones/{zone_id}/houses/{house_id}",
                web::get().to(handlers::house),
            )
            .route("/locate", web::get().to(handlers::locate))
            .route("/guards", web::get().to(handlers::guards))
            .route("/dashboard/admin", web::get().to(handlers::admin_dashboard))
            .route(
                "/dashboard/owner/{zone_id}/{house_id}",
                web::get().to(handlers::owner_dashboard),
            ),
    );
}

/// Starts the subdivision map API server.
///
/// Builds the store via [`load_store`] and starts the Actix-Web HTTP
/// server on `BIND_ADDR:PORT`. The caller is responsible for providing
/// the async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the store cannot be built, or if
/// the HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    if pretty_env_logger::try_init_custom_env("RUST_LOG").is_err() {
        log::debug!("Logger already initialized");
    }

    log::info!("Building subdivision store...");
    let store = load_store().map_err(|e| {
        log::error!("Failed to build subdivision store: {e}");
        std::io::Error::other(e)
    })?;

    let state = web::Data::new(AppState::new(store));

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
            .configure(configure_api)
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
