pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use roombook_core::models::appointment::Appointment;
use uuid::Uuid;

pub use memory::MemoryAppointmentStore;
pub use postgres::PgAppointmentStore;

/// The four operations the booking core needs from persistence.
///
/// Ordering contract: `find_by_date` returns appointments sorted by
/// `start_time` ascending (ties in insertion order); `find_all` sorts by
/// `(date, start_time)`. `delete_by_id` reports how many rows were removed
/// (0 or 1) so callers can distinguish a missing id without a prior lookup.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Appointment>>;

    async fn find_all(&self) -> Result<Vec<Appointment>>;

    async fn insert(&self, appointment: &Appointment) -> Result<()>;

    async fn delete_by_id(&self, id: Uuid) -> Result<u64>;

    /// Cheap reachability probe used by the health endpoint.
    async fn ping(&self) -> Result<()>;
}
