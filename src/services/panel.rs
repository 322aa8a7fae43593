use crate::error::{AppError, Result};
use crate::models::{NewPanel, Panel};
use crate::repositories::PanelStore;
use std::sync::Arc;

const MAX_SERIAL_LEN: usize = 16;

#[derive(Clone)]
pub struct PanelService {
    panels: Arc<dyn PanelStore>,
}

impl PanelService {
    pub fn new(panels: Arc<dyn PanelStore>) -> Self {
        Self { panels }
    }

    pub async fn register(&self, panel: NewPanel) -> Result<Panel> {
        self.validate(&panel)?;

        if self.panels.exists(&panel.serial).await? {
            return Err(AppError::Validation(format!(
                "Panel {} is already registered",
                panel.serial
            )));
        }

        self.panels.insert(&panel).await
    }

    pub async fn get(&self, serial: &str) -> Result<Panel> {
        self.panels
            .find_by_serial(serial)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Panel {} is not registered", serial)))
    }

    fn validate(&self, panel: &NewPanel) -> Result<()> {
        if panel.brand.trim().is_empty() {
            return Err(AppError::Validation("Brand must not be empty".to_string()));
        }

        if panel.serial.trim().is_empty() {
            return Err(AppError::Validation("Serial must not be empty".to_string()));
        }

        if panel.serial.len() > MAX_SERIAL_LEN {
            return Err(AppError::Validation(format!(
                "Serial must be at most {} characters",
                MAX_SERIAL_LEN
            )));
        }

        if !(-90.0..=90.0).contains(&panel.latitude) {
            return Err(AppError::Validation(
                "Latitude must be between -90 and 90".to_string(),
            ));
        }

        if !(-180.0..=180.0).contains(&panel.longitude) {
            return Err(AppError::Validation(
                "Longitude must be between -180 and 180".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockPanelStore;

    fn new_panel() -> NewPanel {
        NewPanel {
            brand: "Areva".to_string(),
            serial: "0123456789ABCDEF".to_string(),
            latitude: 12.345678,
            longitude: 98.7655432,
        }
    }

    fn service_with_empty_store() -> PanelService {
        let mut panels = MockPanelStore::new();
        panels.expect_exists().returning(|_| Ok(false));
        panels.expect_insert().returning(|panel| {
            Ok(Panel {
                id: 1,
                brand: panel.brand.clone(),
                serial: panel.serial.clone(),
                latitude: panel.latitude,
                longitude: panel.longitude,
            })
        });
        PanelService::new(Arc::new(panels))
    }

    #[tokio::test]
    async fn test_register_valid_panel() {
        let service = service_with_empty_store();
        let panel = service.register(new_panel()).await.unwrap();

        assert_eq!(panel.id, 1);
        assert_eq!(panel.serial, "0123456789ABCDEF");
        assert_eq!(panel.brand, "Areva");
    }

    #[tokio::test]
    async fn test_register_rejects_overlong_serial() {
        let service = service_with_empty_store();
        let result = service
            .register(NewPanel {
                serial: "0123456789ABCDEF0".to_string(),
                ..new_panel()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_brand() {
        let service = service_with_empty_store();
        let result = service
            .register(NewPanel {
                brand: "  ".to_string(),
                ..new_panel()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_out_of_range_coordinates() {
        let service = service_with_empty_store();

        let result = service
            .register(NewPanel {
                latitude: 90.5,
                ..new_panel()
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = service
            .register(NewPanel {
                longitude: -180.5,
                ..new_panel()
            })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_serial() {
        let mut panels = MockPanelStore::new();
        panels.expect_exists().returning(|_| Ok(true));
        panels.expect_insert().never();

        let service = PanelService::new(Arc::new(panels));
        let result = service.register(new_panel()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_unknown_serial_is_not_found() {
        let mut panels = MockPanelStore::new();
        panels.expect_find_by_serial().returning(|_| Ok(None));

        let service = PanelService::new(Arc::new(panels));
        let result = service.get("no-such-panel").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
