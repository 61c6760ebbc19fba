use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::handlers::{SeasonQuery, DEFAULT_SEASON};
use crate::models::error::ApiError;
use crate::utils::{state::AppState, stats};

pub async fn wins_by_driver(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<Value>, ApiError> {
    let season = params.season.unwrap_or_else(|| DEFAULT_SEASON.to_string());
    let standings = state.ergast.driver_standings(&season).await?;
    let wins = stats::driver_wins(&standings)?;
    Ok(Json(Value::Object(wins)))
}

pub async fn constructor_standings(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<Value>, ApiError> {
    let season = params.season.unwrap_or_else(|| DEFAULT_SEASON.to_string());
    let standings = state.ergast.constructor_standings(&season).await?;
    let wins = stats::constructor_wins(&standings)?;
    Ok(Json(Value::Object(wins)))
}
