use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use roombook_core::models::appointment::Appointment;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbAppointment;
use crate::store::AppointmentStore;

/// Relational adapter backed by a Postgres pool.
pub struct PgAppointmentStore {
    pool: Pool<Postgres>,
}

impl PgAppointmentStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        tracing::debug!("Fetching appointments for date: {}", date);

        let rows = sqlx::query_as::<_, DbAppointment>(
            r#"
            SELECT id, name, date, start_time, end_time, title, participants, created_at
            FROM appointments
            WHERE date = $1
            ORDER BY start_time ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<Appointment>> {
        tracing::debug!("Fetching all appointments");

        let rows = sqlx::query_as::<_, DbAppointment>(
            r#"
            SELECT id, name, date, start_time, end_time, title, participants, created_at
            FROM appointments
            ORDER BY date ASC, start_time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn insert(&self, appointment: &Appointment) -> Result<()> {
        tracing::debug!(
            "Inserting appointment: id={}, date={}, start={}, end={}",
            appointment.id,
            appointment.date,
            appointment.start_time,
            appointment.end_time
        );

        sqlx::query(
            r#"
            INSERT INTO appointments (id, name, date, start_time, end_time, title, participants, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(appointment.id)
        .bind(&appointment.name)
        .bind(appointment.date)
        .bind(appointment.start_time)
        .bind(appointment.end_time)
        .bind(&appointment.title)
        .bind(&appointment.participants)
        .bind(appointment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64> {
        tracing::debug!("Deleting appointment: id={}", id);

        let result = sqlx::query(
            r#"
            DELETE FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
