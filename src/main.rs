//! Les Jardins de Yasmina website backend
//!
//! Serves the room catalog and photo gallery, stores contact and reservation requests,
//! and hands visitors over to the hosted booking engine.

mod api;
mod auth;
mod booking;
mod config;
mod db;
mod errors;
mod gallery;
mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Yasmina backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Booking engine: {}", config.booking_engine_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (YASMINA_API_PSK). Admin routes are open!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    if config.seed_demo {
        let seeded = db::seed_demo_rooms(&repo).await?;
        tracing::info!("Demo seed inserted {} room(s)", seeded);
    }

    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The site is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();

    let admin_routes = Router::new()
        .route("/rooms", post(api::create_room))
        .route("/gallery", post(api::create_gallery_image))
        .route("/contact-messages", get(api::list_contact_messages))
        .route("/reservations", get(api::list_reservations))
        .layer(middleware::from_fn(move |req, next| {
            auth::require_admin_key(psk.clone(), req, next)
        }));

    let api_routes = Router::new()
        // Rooms
        .route("/rooms", get(api::list_rooms))
        .route("/rooms/{id}", get(api::get_room))
        // Gallery
        .route("/gallery", get(api::list_gallery))
        .route("/gallery/marquee", get(api::gallery_marquee))
        // Forms
        .route("/contact", post(api::submit_contact))
        .route("/reservations", post(api::submit_reservation))
        // Booking engine
        .route("/booking/search", get(api::booking_search))
        .nest("/admin", admin_routes);

    Router::new()
        .nest("/api", api_routes)
        .route("/book", get(api::book))
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
