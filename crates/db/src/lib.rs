//! Persistence layer for RoomBook.
//!
//! The booking core talks to a single [`store::AppointmentStore`] interface;
//! this crate ships two interchangeable adapters, a Postgres one for real
//! deployments and an in-memory one for tests and database-less runs.

pub mod locks;
pub mod mock;
pub mod models;
pub mod schema;
pub mod store;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
