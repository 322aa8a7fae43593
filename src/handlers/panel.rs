use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::Result;
use crate::models::{NewPanel, Panel};
use crate::routes::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<NewPanel>,
) -> Result<(StatusCode, Json<Panel>)> {
    let panel = state.panels.register(payload).await?;
    Ok((StatusCode::CREATED, Json(panel)))
}

pub async fn get_by_serial(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Result<Json<Panel>> {
    let panel = state.panels.get(&serial).await?;
    Ok(Json(panel))
}
