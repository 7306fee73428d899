use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use mockall::mock;
use roombook_core::models::appointment::Appointment;
use uuid::Uuid;

use crate::store::AppointmentStore;

// Mock store for testing error paths the memory adapter cannot produce
mock! {
    pub Store {}

    #[async_trait]
    impl AppointmentStore for Store {
        async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Appointment>>;

        async fn find_all(&self) -> Result<Vec<Appointment>>;

        async fn insert(&self, appointment: &Appointment) -> Result<()>;

        async fn delete_by_id(&self, id: Uuid) -> Result<u64>;

        async fn ping(&self) -> Result<()>;
    }
}
