use crate::services::ergast::ErgastClient;
use crate::utils::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub ergast: ErgastClient,
    pub config: Config,
}
