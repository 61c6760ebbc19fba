//! Raw wire types for the Ergast-compatible statistics API. Field names
//! mirror the upstream JSON keys via serde renames; numeric statistics stay
//! strings because that is how the upstream sends them.

use serde::Deserialize;

/// Top-level envelope. Every upstream route wraps its payload in `MRData`.
#[derive(Debug, Deserialize, Clone)]
pub struct MrResponse {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

/// Exactly one of the tables is populated depending on the route queried.
#[derive(Debug, Deserialize, Clone)]
pub struct MrData {
    #[serde(rename = "StandingsTable")]
    pub standings_table: Option<StandingsTable>,
    #[serde(rename = "RaceTable")]
    pub race_table: Option<RaceTable>,
    #[serde(rename = "DriverTable")]
    pub driver_table: Option<DriverTable>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StandingsTable {
    pub season: Option<String>,
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

/// One standings snapshot. A season query returns at most one of these;
/// an out-of-range season yields an empty `StandingsLists` array instead.
#[derive(Debug, Deserialize, Clone)]
pub struct StandingsList {
    pub season: Option<String>,
    pub round: Option<String>,
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<ConstructorStanding>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DriverStanding {
    pub position: Option<String>,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<Constructor>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConstructorStanding {
    pub position: Option<String>,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Driver {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub code: Option<String>,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Constructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: Option<String>,
    pub name: String,
    pub nationality: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RaceTable {
    pub season: Option<String>,
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

/// A race carries `QualifyingResults` on the qualifying route and `Results`
/// on the results routes; the unused list deserializes empty.
#[derive(Debug, Deserialize, Clone)]
pub struct Race {
    pub season: Option<String>,
    pub round: Option<String>,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "QualifyingResults", default)]
    pub qualifying_results: Vec<QualifyingResult>,
    #[serde(rename = "Results", default)]
    pub results: Vec<RaceResult>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QualifyingResult {
    pub position: Option<String>,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RaceResult {
    pub position: String,
    pub status: Option<String>,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
    /// Absent for lapped and retired drivers; `status` explains why.
    #[serde(rename = "Time")]
    pub time: Option<RaceTime>,
    #[serde(rename = "FastestLap")]
    pub fastest_lap: Option<FastestLap>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RaceTime {
    pub millis: Option<String>,
    pub time: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FastestLap {
    pub rank: Option<String>,
    pub lap: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DriverTable {
    pub season: Option<String>,
    #[serde(rename = "Drivers", default)]
    pub drivers: Vec<Driver>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn driver_standings_payload_parses() {
        let payload = json!({
            "MRData": {
                "xmlns": "http://ergast.com/mrd/1.5",
                "series": "f1",
                "limit": "30",
                "offset": "0",
                "total": "22",
                "StandingsTable": {
                    "season": "2023",
                    "StandingsLists": [{
                        "season": "2023",
                        "round": "22",
                        "DriverStandings": [{
                            "position": "1",
                            "positionText": "1",
                            "points": "575",
                            "wins": "19",
                            "Driver": {
                                "driverId": "max_verstappen",
                                "permanentNumber": "33",
                                "code": "VER",
                                "givenName": "Max",
                                "familyName": "Verstappen",
                                "dateOfBirth": "1997-09-30",
                                "nationality": "Dutch"
                            },
                            "Constructors": [{
                                "constructorId": "red_bull",
                                "name": "Red Bull",
                                "nationality": "Austrian"
                            }]
                        }]
                    }]
                }
            }
        });

        let parsed: MrResponse = serde_json::from_value(payload).unwrap();
        let table = parsed.mr_data.standings_table.unwrap();
        let list = &table.standings_lists[0];
        let entry = &list.driver_standings[0];
        assert_eq!(entry.wins, "19");
        assert_eq!(entry.driver.driver_id, "max_verstappen");
        assert_eq!(entry.driver.code.as_deref(), Some("VER"));
        assert_eq!(entry.constructors[0].name, "Red Bull");
        assert!(list.constructor_standings.is_empty());
    }

    #[test]
    fn race_results_payload_parses_with_and_without_time() {
        let payload = json!({
            "MRData": {
                "RaceTable": {
                    "season": "2023",
                    "Races": [{
                        "season": "2023",
                        "round": "1",
                        "raceName": "Bahrain Grand Prix",
                        "Results": [
                            {
                                "position": "1",
                                "points": "25",
                                "status": "Finished",
                                "Driver": {
                                    "driverId": "max_verstappen",
                                    "code": "VER",
                                    "givenName": "Max",
                                    "familyName": "Verstappen"
                                },
                                "Constructor": {"constructorId": "red_bull", "name": "Red Bull"},
                                "Time": {"millis": "5636736", "time": "1:33:56.736"},
                                "FastestLap": {"rank": "2", "lap": "44"}
                            },
                            {
                                "position": "18",
                                "points": "0",
                                "status": "Gearbox",
                                "Driver": {
                                    "driverId": "ocon",
                                    "code": "OCO",
                                    "givenName": "Esteban",
                                    "familyName": "Ocon"
                                },
                                "Constructor": {"constructorId": "alpine", "name": "Alpine F1 Team"}
                            }
                        ]
                    }]
                }
            }
        });

        let parsed: MrResponse = serde_json::from_value(payload).unwrap();
        let races = parsed.mr_data.race_table.unwrap().races;
        let results = &races[0].results;
        assert_eq!(races[0].race_name, "Bahrain Grand Prix");
        assert_eq!(results[0].time.as_ref().unwrap().time, "1:33:56.736");
        assert_eq!(results[0].fastest_lap.as_ref().unwrap().rank.as_deref(), Some("2"));
        assert!(results[1].time.is_none());
        assert!(results[1].fastest_lap.is_none());
        assert!(races[0].qualifying_results.is_empty());
    }

    #[test]
    fn driver_table_payload_parses_without_optional_fields() {
        let payload = json!({
            "MRData": {
                "DriverTable": {
                    "season": "2023",
                    "Drivers": [{
                        "driverId": "zhou",
                        "givenName": "Guanyu",
                        "familyName": "Zhou"
                    }]
                }
            }
        });

        let parsed: MrResponse = serde_json::from_value(payload).unwrap();
        let drivers = parsed.mr_data.driver_table.unwrap().drivers;
        assert_eq!(drivers[0].driver_id, "zhou");
        assert!(drivers[0].code.is_none());
        assert!(drivers[0].date_of_birth.is_none());
        assert!(parsed.mr_data.race_table.is_none());
    }
}
