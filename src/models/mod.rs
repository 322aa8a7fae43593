pub mod analytics;
pub mod panel;

pub use analytics::{DailySummary, NewReading, Reading, ReadingListResponse};
pub use panel::{NewPanel, Panel};
