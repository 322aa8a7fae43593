use crate::error::{AppError, Result};
use crate::models::{DailySummary, NewReading, Reading};
use crate::repositories::{PanelStore, ReadingStore};
use crate::services::aggregate;
use std::sync::Arc;

#[derive(Clone)]
pub struct AnalyticsService {
    panels: Arc<dyn PanelStore>,
    readings: Arc<dyn ReadingStore>,
}

impl AnalyticsService {
    pub fn new(panels: Arc<dyn PanelStore>, readings: Arc<dyn ReadingStore>) -> Self {
        Self { panels, readings }
    }

    /// Raw hourly readings for a registered panel.
    pub async fn list_for_panel(&self, serial: &str) -> Result<Vec<Reading>> {
        if !self.panels.exists(serial).await? {
            return Err(AppError::NotFound(format!(
                "Panel {} is not registered",
                serial
            )));
        }

        self.readings.find_by_panel(serial).await
    }

    /// One summary per distinct calendar date present in the panel's
    /// readings, ordered by ascending date. A serial with no readings yields
    /// an empty sequence, not an error.
    pub async fn summarize_by_day(&self, serial: &str) -> Result<Vec<DailySummary>> {
        let readings = self.readings.find_by_panel(serial).await?;
        Ok(aggregate::summarize_by_day(&readings))
    }

    /// Stores a reading, but only for a registered panel. An unknown serial
    /// is rejected with NotFound and nothing is written.
    pub async fn record_reading(&self, serial: &str, reading: NewReading) -> Result<Reading> {
        if !self.panels.exists(serial).await? {
            return Err(AppError::NotFound(format!(
                "Panel {} is not registered",
                serial
            )));
        }

        self.readings.insert(serial, &reading).await
    }
}
