use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::handlers::{SeasonQuery, DEFAULT_SEASON};
use crate::models::error::ApiError;
use crate::utils::{state::AppState, stats};

pub async fn pole_positions(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<Value>, ApiError> {
    let season = params.season.unwrap_or_else(|| DEFAULT_SEASON.to_string());
    let races = state.ergast.season_qualifying(&season).await?;
    Ok(Json(Value::Object(stats::pole_positions(&races))))
}

pub async fn fastest_laps(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<Value>, ApiError> {
    let season = params.season.unwrap_or_else(|| DEFAULT_SEASON.to_string());
    let races = state.ergast.season_results(&season).await?;
    Ok(Json(Value::Object(stats::fastest_laps(&races))))
}
