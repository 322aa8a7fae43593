use crate::db::DbPool;
use crate::error::Result;
use crate::models::{NewPanel, Panel};
use crate::repositories::PanelStore;
use async_trait::async_trait;

#[derive(Clone)]
pub struct PanelRepository {
    pool: DbPool,
}

impl PanelRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PanelStore for PanelRepository {
    async fn insert(&self, panel: &NewPanel) -> Result<Panel> {
        let stored = sqlx::query_as::<_, Panel>(
            r#"
            INSERT INTO panel (brand, serial, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING id, brand, serial, latitude, longitude
            "#,
        )
        .bind(&panel.brand)
        .bind(&panel.serial)
        .bind(panel.latitude)
        .bind(panel.longitude)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_by_serial(&self, serial: &str) -> Result<Option<Panel>> {
        let panel = sqlx::query_as::<_, Panel>(
            r#"
            SELECT id, brand, serial, latitude, longitude
            FROM panel
            WHERE serial = $1
            "#,
        )
        .bind(serial)
        .fetch_optional(&self.pool)
        .await?;

        Ok(panel)
    }

    async fn exists(&self, serial: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM panel WHERE serial = $1)")
                .bind(serial)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
