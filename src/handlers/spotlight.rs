use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::handlers::SeasonQuery;
use crate::models::ergast::{Driver, DriverStanding};
use crate::models::error::ApiError;
use crate::models::response::{ConstructorSpotlight, DriverSpotlight};
use crate::utils::{state::AppState, stats};

/// How many championship leaders the landing page features.
const SPOTLIGHT_SIZE: usize = 3;

pub async fn driver_spotlight(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<Vec<DriverSpotlight>>, ApiError> {
    let season = params.season.unwrap_or_else(stats::current_season);
    let standings = state.ergast.driver_standings(&season).await?;
    let profiles = state.ergast.season_drivers(&season).await?;

    let profiles_by_id: HashMap<&str, &Driver> = profiles
        .iter()
        .map(|driver| (driver.driver_id.as_str(), driver))
        .collect();

    let mut cards = Vec::with_capacity(SPOTLIGHT_SIZE);
    for entry in standings.iter().take(SPOTLIGHT_SIZE) {
        // Drivers missing from the season list (mid-season entries,
        // stale caches upstream) get one direct lookup before we give
        // up on enrichment.
        let profile = match profiles_by_id.get(entry.driver.driver_id.as_str()) {
            Some(profile) => Some((*profile).clone()),
            None => state.ergast.driver_by_id(&entry.driver.driver_id).await?,
        };
        cards.push(driver_card(entry, profile.as_ref())?);
    }

    Ok(Json(cards))
}

fn driver_card(
    entry: &DriverStanding,
    profile: Option<&Driver>,
) -> Result<DriverSpotlight, ApiError> {
    let constructor = entry
        .constructors
        .first()
        .map(|constructor| constructor.name.clone())
        .ok_or_else(|| {
            ApiError::missing(format!(
                "standings entry for {} has no constructor",
                entry.driver.driver_id
            ))
        })?;

    let nationality = profile.and_then(|profile| profile.nationality.clone());
    let age = profile
        .and_then(|profile| profile.date_of_birth.as_deref())
        .and_then(|dob| stats::age_on(dob, Utc::now().date_naive()));

    Ok(DriverSpotlight {
        name: stats::full_name(&entry.driver),
        constructor,
        points: entry.points.clone(),
        nationality,
        age,
        driver_id: entry.driver.driver_id.clone(),
    })
}

pub async fn constructor_spotlight(
    State(state): State<AppState>,
    Query(params): Query<SeasonQuery>,
) -> Result<Json<Vec<ConstructorSpotlight>>, ApiError> {
    let season = params.season.unwrap_or_else(stats::current_season);
    let standings = state.ergast.constructor_standings(&season).await?;

    let cards = standings
        .iter()
        .take(SPOTLIGHT_SIZE)
        .map(|entry| ConstructorSpotlight {
            name: entry.constructor.name.clone(),
            points: entry.points.clone(),
            wins: entry.wins.clone(),
            logo: stats::team_logo(&entry.constructor.name).to_string(),
        })
        .collect();

    Ok(Json(cards))
}
