use crate::db::DbPool;
use crate::error::Result;
use crate::models::{NewReading, Reading};
use crate::repositories::ReadingStore;
use async_trait::async_trait;

#[derive(Clone)]
pub struct ReadingRepository {
    pool: DbPool,
}

impl ReadingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingStore for ReadingRepository {
    async fn find_by_panel(&self, serial: &str) -> Result<Vec<Reading>> {
        let readings = sqlx::query_as::<_, Reading>(
            r#"
            SELECT id, panel_serial, kilo_watt, ts
            FROM panel_reading
            WHERE panel_serial = $1
            "#,
        )
        .bind(serial)
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }

    async fn insert(&self, serial: &str, reading: &NewReading) -> Result<Reading> {
        let stored = sqlx::query_as::<_, Reading>(
            r#"
            INSERT INTO panel_reading (panel_serial, kilo_watt, ts)
            VALUES ($1, $2, $3)
            RETURNING id, panel_serial, kilo_watt, ts
            "#,
        )
        .bind(serial)
        .bind(reading.kilo_watt)
        .bind(reading.ts)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}
