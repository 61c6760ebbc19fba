use axum::{extract::State, Json};

use crate::models::error::ApiError;
use crate::models::response::{LatestRace, RaceResultRow};
use crate::utils::{state::AppState, stats};

pub async fn latest_results(State(state): State<AppState>) -> Result<Json<LatestRace>, ApiError> {
    let race = state.ergast.latest_race().await?;

    let results = race
        .results
        .iter()
        .map(|result| RaceResultRow {
            position: result.position.clone(),
            driver: stats::full_name(&result.driver),
            code: stats::driver_code(&result.driver),
            constructor: result.constructor.name.clone(),
            time: stats::display_time(result),
        })
        .collect();

    Ok(Json(LatestRace {
        grand_prix: race.race_name,
        results,
    }))
}
