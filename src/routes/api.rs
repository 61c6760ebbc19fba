use axum::{routing::get, Router};

use crate::{
    handlers::{
        races::latest_results,
        spotlight::{constructor_spotlight, driver_spotlight},
        standings::{constructor_standings, wins_by_driver},
        tallies::{fastest_laps, pole_positions},
    },
    utils::state::AppState,
};

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/wins-by-driver", get(wins_by_driver))
        .route("/constructor-standings", get(constructor_standings))
        .route("/pole-positions", get(pole_positions))
        .route("/fastest-laps", get(fastest_laps))
        .route("/latest-results", get(latest_results))
        .route("/driver-spotlight", get(driver_spotlight))
        .route("/constructor-spotlight", get(constructor_spotlight))
        .with_state(state)
}
