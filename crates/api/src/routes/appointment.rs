use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            post(handlers::appointment::create_appointment)
                .get(handlers::appointment::list_all_appointments),
        )
        // One registration for both methods: the router rejects the same
        // path under two different parameter names. GET reads the segment
        // as a date, DELETE as an appointment id.
        .route(
            "/api/appointments/:date_or_id",
            get(handlers::appointment::list_appointments_by_date)
                .delete(handlers::appointment::delete_appointment),
        )
}
