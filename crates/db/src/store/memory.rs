use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use roombook_core::models::appointment::Appointment;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::AppointmentStore;

/// In-process adapter holding appointments in a `Vec`. Used by tests and by
/// database-less deployments; nothing survives a restart.
#[derive(Default)]
pub struct MemoryAppointmentStore {
    records: RwLock<Vec<Appointment>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        let records = self.records.read().await;
        let mut matching: Vec<Appointment> = records
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal start times
        matching.sort_by_key(|a| a.start_time);
        Ok(matching)
    }

    async fn find_all(&self) -> Result<Vec<Appointment>> {
        let records = self.records.read().await;
        let mut all: Vec<Appointment> = records.clone();
        all.sort_by_key(|a| (a.date, a.start_time));
        Ok(all)
    }

    async fn insert(&self, appointment: &Appointment) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(appointment.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|a| a.id != id);
        Ok((before - records.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
