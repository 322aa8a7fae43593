pub mod analytics;
pub mod panel;

pub use analytics::ReadingRepository;
pub use panel::PanelRepository;

use crate::error::Result;
use crate::models::{NewPanel, NewReading, Panel, Reading};
use async_trait::async_trait;

/// Registered panels. Insertion of readings is gated on `exists`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PanelStore: Send + Sync {
    async fn insert(&self, panel: &NewPanel) -> Result<Panel>;
    async fn find_by_serial(&self, serial: &str) -> Result<Option<Panel>>;
    async fn exists(&self, serial: &str) -> Result<bool>;
}

/// Raw hourly readings for a panel. `find_by_panel` makes no ordering
/// guarantee and returns an empty vector for a serial with no readings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReadingStore: Send + Sync {
    async fn find_by_panel(&self, serial: &str) -> Result<Vec<Reading>>;
    async fn insert(&self, serial: &str, reading: &NewReading) -> Result<Reading>;
}
