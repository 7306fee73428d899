use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use roombook_core::models::appointment::Appointment;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub title: String,
    pub participants: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbAppointment> for Appointment {
    fn from(row: DbAppointment) -> Self {
        Appointment {
            id: row.id,
            name: row.name,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            title: row.title,
            participants: row.participants,
            created_at: row.created_at,
        }
    }
}
