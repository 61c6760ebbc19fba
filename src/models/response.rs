//! Response shapes served to the dashboard. Key spellings (`grandPrix`,
//! `driverID`) are what the frontend renders from and must not drift.

use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct LatestRace {
    #[serde(rename = "grandPrix")]
    pub grand_prix: String,
    pub results: Vec<RaceResultRow>,
}

#[derive(Debug, Serialize, Clone)]
pub struct RaceResultRow {
    pub position: String,
    pub driver: String,
    pub code: String,
    pub constructor: String,
    /// Elapsed time, else race status, else "N/A".
    pub time: String,
}

/// Top-3 driver card. `nationality` and `age` are null when the profile
/// lookup and its per-driver fallback both come up empty.
#[derive(Debug, Serialize, Clone)]
pub struct DriverSpotlight {
    pub name: String,
    pub constructor: String,
    pub points: String,
    pub nationality: Option<String>,
    pub age: Option<i32>,
    #[serde(rename = "driverID")]
    pub driver_id: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ConstructorSpotlight {
    pub name: String,
    pub points: String,
    pub wins: String,
    pub logo: String,
}
