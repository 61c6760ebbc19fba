/// Runtime settings, all optional with defaults so the service starts with
/// an empty environment.
///
/// - `ERGAST_BASE_URL`: upstream statistics API root, no trailing slash.
/// - `UPSTREAM_TIMEOUT_SECS`: total per-request timeout for upstream calls.
#[derive(Debug, Clone)]
pub struct Config {
    pub ergast_base_url: String,
    pub upstream_timeout_secs: u64,
}

const DEFAULT_ERGAST_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

impl Config {
    pub fn init() -> Self {
        let ergast_base_url = std::env::var("ERGAST_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_ERGAST_BASE_URL.to_string());
        let upstream_timeout_secs = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Config {
            ergast_base_url,
            upstream_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_falls_back_to_defaults() {
        std::env::remove_var("ERGAST_BASE_URL");
        std::env::remove_var("UPSTREAM_TIMEOUT_SECS");
        let config = Config::init();
        assert_eq!(config.ergast_base_url, DEFAULT_ERGAST_BASE_URL);
        assert_eq!(config.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);

        // An unparseable timeout counts as unset.
        std::env::set_var("UPSTREAM_TIMEOUT_SECS", "soon");
        let config = Config::init();
        assert_eq!(config.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
        std::env::remove_var("UPSTREAM_TIMEOUT_SECS");
    }
}
