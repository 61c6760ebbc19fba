pub mod races;
pub mod spotlight;
pub mod standings;
pub mod tallies;

use serde::Deserialize;

/// Season assumed by the standings and tally endpoints when the dashboard
/// does not send one. The spotlight endpoints default to the current
/// calendar year instead.
pub const DEFAULT_SEASON: &str = "2023";

/// Query string accepted by the season-scoped endpoints. The value is
/// forwarded into the upstream URL as-is; a nonsense season simply yields
/// whatever the upstream answers for it.
#[derive(Deserialize)]
pub struct SeasonQuery {
    pub season: Option<String>,
}
