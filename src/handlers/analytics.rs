use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::Result;
use crate::models::{DailySummary, NewReading, Reading, ReadingListResponse};
use crate::routes::AppState;

pub async fn list(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Result<Json<ReadingListResponse>> {
    let data = state.analytics.list_for_panel(&serial).await?;
    Ok(Json(ReadingListResponse { data }))
}

pub async fn record(
    State(state): State<AppState>,
    Path(serial): Path<String>,
    Json(payload): Json<NewReading>,
) -> Result<(StatusCode, Json<Reading>)> {
    let reading = state.analytics.record_reading(&serial, payload).await?;
    Ok((StatusCode::CREATED, Json(reading)))
}

pub async fn day_summaries(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Result<Json<Vec<DailySummary>>> {
    let summaries = state.analytics.summarize_by_day(&serial).await?;
    Ok(Json(summaries))
}
