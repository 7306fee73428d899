use std::sync::Arc;

use axum_test::TestServer;
use roombook_api::{app, ApiState};
use roombook_db::locks::DateLocks;
use roombook_db::store::{AppointmentStore, MemoryAppointmentStore};

/// Spins up the full router over a fresh in-memory store.
pub fn test_server() -> TestServer {
    server_with_store(Arc::new(MemoryAppointmentStore::new()))
}

/// Spins up the full router over a caller-provided store (e.g. a mock that
/// fails on demand).
pub fn server_with_store(store: Arc<dyn AppointmentStore>) -> TestServer {
    let state = Arc::new(ApiState {
        store,
        date_locks: DateLocks::new(),
    });
    TestServer::new(app(state)).expect("Failed to build test server")
}

/// JSON payload for a create request on the shared test date.
pub fn create_payload(
    name: &str,
    date: &str,
    start: &str,
    end: &str,
    title: &str,
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "date": date,
        "start_time": start,
        "end_time": end,
        "title": title,
    })
}
