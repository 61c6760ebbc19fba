use chrono::{Datelike, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::models::ergast::{ConstructorStanding, Driver, DriverStanding, Race, RaceResult};
use crate::models::error::ApiError;

/// Display name used as the key of every aggregate mapping. Recomputed per
/// response; there is no canonical identity table behind it.
pub fn full_name(driver: &Driver) -> String {
    format!("{} {}", driver.given_name, driver.family_name)
}

/// {driver name: win count} in upstream standings order.
pub fn driver_wins(standings: &[DriverStanding]) -> Result<Map<String, Value>, ApiError> {
    let mut wins = Map::new();
    for entry in standings {
        let count = parse_wins(&entry.wins)?;
        wins.insert(full_name(&entry.driver), Value::from(count));
    }
    Ok(wins)
}

/// {constructor name: win count} in upstream standings order.
pub fn constructor_wins(standings: &[ConstructorStanding]) -> Result<Map<String, Value>, ApiError> {
    let mut wins = Map::new();
    for entry in standings {
        let count = parse_wins(&entry.wins)?;
        wins.insert(entry.constructor.name.clone(), Value::from(count));
    }
    Ok(wins)
}

fn parse_wins(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|err| {
        ApiError::upstream(
            "unexpected wins value in upstream standings",
            format!("'{raw}': {err}"),
        )
    })
}

/// Credits the first-listed qualifier of each race with one pole. Races with
/// an empty qualifying list are skipped, so the counts sum to the number of
/// races that actually ran qualifying.
pub fn pole_positions(races: &[Race]) -> Map<String, Value> {
    let mut poles = Map::new();
    for race in races {
        let Some(fastest) = race.qualifying_results.first() else {
            continue;
        };
        credit(&mut poles, full_name(&fastest.driver));
    }
    poles
}

/// Credits every result whose fastest-lap rank is exactly the string "1".
pub fn fastest_laps(races: &[Race]) -> Map<String, Value> {
    let mut laps = Map::new();
    for race in races {
        for result in &race.results {
            if has_fastest_lap(result) {
                credit(&mut laps, full_name(&result.driver));
            }
        }
    }
    laps
}

fn has_fastest_lap(result: &RaceResult) -> bool {
    // The upstream sends rank as a string; the comparison stays a string
    // comparison on purpose.
    result
        .fastest_lap
        .as_ref()
        .and_then(|lap| lap.rank.as_deref())
        == Some("1")
}

fn credit(tally: &mut Map<String, Value>, name: String) {
    let counter = tally.entry(name).or_insert_with(|| Value::from(0u64));
    let bumped = counter.as_u64().unwrap_or(0) + 1;
    *counter = Value::from(bumped);
}

/// Elapsed time, else race status, else "N/A". Empty strings count as
/// absent so a blank upstream field cannot surface in the table.
pub fn display_time(result: &RaceResult) -> String {
    let elapsed = result
        .time
        .as_ref()
        .map(|time| time.time.as_str())
        .filter(|time| !time.is_empty());
    let status = result.status.as_deref().filter(|status| !status.is_empty());

    elapsed.or(status).unwrap_or("N/A").to_string()
}

/// The upstream 3-letter code when present, else the first three characters
/// of the family name upper-cased. The fallback can collide and can differ
/// from official codes; it matches the original dashboard's behavior.
pub fn driver_code(driver: &Driver) -> String {
    match driver.code.as_deref() {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => driver
            .family_name
            .chars()
            .take(3)
            .collect::<String>()
            .to_uppercase(),
    }
}

/// Full calendar years between `date_of_birth` ("YYYY-MM-DD") and `today`,
/// minus one if the birthday has not yet occurred in `today`'s year. Returns
/// None for unparseable input.
pub fn age_on(date_of_birth: &str, today: NaiveDate) -> Option<i32> {
    let born = NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d").ok()?;
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    Some(age)
}

/// Season used by the spotlight endpoints when no `season` parameter is
/// given: the current calendar year.
pub fn current_season() -> String {
    Utc::now().year().to_string()
}

/// Static constructor logo filenames served by the dashboard. Unmapped
/// names fall back to the placeholder image.
pub fn team_logo(constructor: &str) -> &'static str {
    match constructor {
        "Red Bull" => "red-bull-racing-logo.png",
        "McLaren" => "mclaren-logo.png",
        "Ferrari" => "ferrari-logo.png",
        "Mercedes" => "mercedes-logo.png",
        "Aston Martin" => "aston-martin-logo.png",
        "Williams" => "williams-logo.png",
        "Haas F1 Team" => "haas-logo.png",
        "Alpine F1 Team" => "alpine-logo.png",
        "Sauber" => "kick-sauber-logo.png",
        "RB F1 Team" => "racing-bulls-logo.png",
        _ => "default.png",
    }
}
