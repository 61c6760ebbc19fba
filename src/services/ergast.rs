use reqwest::Client;
use tracing::{debug, warn};

use crate::models::ergast::{
    ConstructorStanding, Driver, DriverStanding, MrData, MrResponse, Race, StandingsList,
};
use crate::models::error::ApiError;

/// Pagination cap for the season-wide scans. One page covers a full season
/// of qualifying or race results.
const UPSTREAM_PAGE_LIMIT: u32 = 1000;

/// Thin client for the Ergast-compatible statistics API. Every method is a
/// single GET plus envelope unwrapping; callers do the aggregation.
#[derive(Clone)]
pub struct ErgastClient {
    http: Client,
    base_url: String,
}

impl ErgastClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        ErgastClient {
            http,
            base_url: base_url.into(),
        }
    }

    /// Driver standings for one season. A season with no standings list is
    /// an error: the dashboard has nothing to render without one.
    pub async fn driver_standings(&self, season: &str) -> Result<Vec<DriverStanding>, ApiError> {
        let data = self
            .fetch(&format!("{season}/driverstandings/?format=json"))
            .await?;
        let list = first_standings_list(data, season, "driver")?;
        Ok(list.driver_standings)
    }

    pub async fn constructor_standings(
        &self,
        season: &str,
    ) -> Result<Vec<ConstructorStanding>, ApiError> {
        let data = self
            .fetch(&format!("{season}/constructorstandings/?format=json"))
            .await?;
        let list = first_standings_list(data, season, "constructor")?;
        Ok(list.constructor_standings)
    }

    /// All races of a season with their qualifying lists.
    pub async fn season_qualifying(&self, season: &str) -> Result<Vec<Race>, ApiError> {
        let data = self
            .fetch(&format!(
                "{season}/qualifying/?format=json&limit={UPSTREAM_PAGE_LIMIT}"
            ))
            .await?;
        races_from(data)
    }

    /// All races of a season with their finishing results.
    pub async fn season_results(&self, season: &str) -> Result<Vec<Race>, ApiError> {
        let data = self
            .fetch(&format!(
                "{season}/results/?format=json&limit={UPSTREAM_PAGE_LIMIT}"
            ))
            .await?;
        races_from(data)
    }

    /// The most recently completed race, with results.
    pub async fn latest_race(&self) -> Result<Race, ApiError> {
        let data = self.fetch("current/last/results/?format=json").await?;
        let mut races = races_from(data)?;
        if races.is_empty() {
            return Err(ApiError::missing("no completed race available"));
        }
        Ok(races.remove(0))
    }

    /// Full driver profile list for one season, used by the spotlight
    /// enrichment.
    pub async fn season_drivers(&self, season: &str) -> Result<Vec<Driver>, ApiError> {
        let data = self
            .fetch(&format!(
                "{season}/drivers/?format=json&limit={UPSTREAM_PAGE_LIMIT}"
            ))
            .await?;
        data.driver_table
            .map(|table| table.drivers)
            .ok_or_else(|| ApiError::missing("no driver list in upstream response"))
    }

    /// Per-driver fallback lookup for drivers absent from the season list.
    /// An unknown id is a miss, not a failure.
    pub async fn driver_by_id(&self, driver_id: &str) -> Result<Option<Driver>, ApiError> {
        let data = self
            .fetch(&format!("drivers/{driver_id}/?format=json"))
            .await?;
        let driver = data
            .driver_table
            .and_then(|table| table.drivers.into_iter().next());
        Ok(driver)
    }

    async fn fetch(&self, path_and_query: &str) -> Result<MrData, ApiError> {
        let url = format!("{}/{}", self.base_url, path_and_query);
        debug!("fetching {url}");

        let response = self.http.get(&url).send().await.map_err(|err| {
            warn!("request to {url} failed: {err}");
            ApiError::upstream("upstream request failed", err)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{url} answered {status}");
            return Err(ApiError::upstream(
                "upstream returned an error status",
                format!("{url} answered {status}"),
            ));
        }

        let envelope: MrResponse = response.json().await.map_err(|err| {
            warn!("undecodable body from {url}: {err}");
            ApiError::upstream("failed to decode upstream response", err)
        })?;

        Ok(envelope.mr_data)
    }
}

fn first_standings_list(
    data: MrData,
    season: &str,
    kind: &str,
) -> Result<StandingsList, ApiError> {
    let mut lists = data
        .standings_table
        .map(|table| table.standings_lists)
        .unwrap_or_default();
    if lists.is_empty() {
        return Err(ApiError::missing(format!(
            "no {kind} standings found for season {season}"
        )));
    }
    Ok(lists.remove(0))
}

fn races_from(data: MrData) -> Result<Vec<Race>, ApiError> {
    data.race_table
        .map(|table| table.races)
        .ok_or_else(|| ApiError::missing("no race data in upstream response"))
}
