pub mod aggregate;
pub mod analytics;
pub mod panel;

pub use analytics::AnalyticsService;
pub use panel::PanelService;
