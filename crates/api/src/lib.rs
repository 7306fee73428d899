//! # RoomBook API
//!
//! The API crate provides the web server for the RoomBook meeting-room
//! booking service. It exposes RESTful endpoints for creating, listing, and
//! deleting appointments, and for querying time-slot availability.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; persistence goes through the
//! `AppointmentStore` trait from `roombook-db`, so the server can run
//! against Postgres or a purely in-memory store.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use roombook_db::locks::DateLocks;
use roombook_db::store::{AppointmentStore, MemoryAppointmentStore, PgAppointmentStore};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds the persistence adapter behind the store trait, plus the per-date
/// lock registry that serializes appointment creation per calendar date.
pub struct ApiState {
    /// Persistence adapter for appointment records
    pub store: Arc<dyn AppointmentStore>,
    /// Per-date mutexes guarding the create check-then-insert sequence
    pub date_locks: DateLocks,
}

/// Builds the application router with all routes attached to `state`.
///
/// Split out of [`start_server`] so integration tests can drive the full
/// router against an in-memory store without binding a socket.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Appointment management endpoints
        .merge(routes::appointment::routes())
        // Availability endpoints
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration
///
/// This function initializes logging, selects the persistence adapter
/// (Postgres when `DATABASE_URL` is configured, in-memory otherwise),
/// configures routes, and starts the HTTP server.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and store settings
///
/// # Returns
///
/// * `Result<()>` - Success or error result
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Select the persistence adapter
    let store: Arc<dyn AppointmentStore> = match &config.database_url {
        Some(url) => {
            let pool = roombook_db::create_pool(url).await?;
            roombook_db::schema::initialize_database(&pool).await?;
            Arc::new(PgAppointmentStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; using the in-memory store, bookings will not survive a restart");
            Arc::new(MemoryAppointmentStore::new())
        }
    };

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        store,
        date_locks: DateLocks::new(),
    });

    // Build the application router with all routes
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<axum::http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
