use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability/:date",
            get(handlers::availability::get_availability),
        )
        .route(
            "/api/occupied-slots/:date",
            get(handlers::availability::get_occupied_slots),
        )
        .route(
            "/api/check-availability/:date/:start_time/:end_time",
            get(handlers::availability::check_availability),
        )
}
