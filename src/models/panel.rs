use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Panel {
    pub id: i32,
    pub brand: String,
    pub serial: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Registration payload; the id is assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPanel {
    pub brand: String,
    pub serial: String,
    pub latitude: f64,
    pub longitude: f64,
}
