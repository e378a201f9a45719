use std::time::Duration;

use cryptodash_data::SourcesConfig;
use cryptodash_data::config::{DEFAULT_COINS, DEFAULT_TIMEOUT};
use cryptodash_util::{ConfigContext, ConfigError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub refresh_interval: Duration,
    pub sources: SourcesConfig,
}

pub fn config_with_prefix(prefix: &str) -> Result<ApiConfig, ConfigError> {
    let config = ConfigContext::new(prefix);

    let host = config.var_or("HOST", DEFAULT_HOST)?;
    let port = config.parse_or("PORT", DEFAULT_PORT)?;
    let refresh_interval = config.duration_or("REFRESH_INTERVAL", DEFAULT_REFRESH_INTERVAL)?;

    let sources = SourcesConfig {
        coins: config.list_or("COINS", DEFAULT_COINS)?,
        timeout: config.duration_or("HTTP_TIMEOUT", DEFAULT_TIMEOUT)?,
        ..SourcesConfig::default()
    };

    info!("Listening on {}:{}; refreshing every {:?} for {} coin(s)",
          host, port, refresh_interval, sources.coins.len());

    Ok(ApiConfig {
        host,
        port,
        refresh_interval,
        sources,
    })
}

#[cfg(test)]
mod tests {
    use std::env;
    use super::*;

    #[test]
    fn unset_environment_gives_defaults() {
        let config = config_with_prefix("CRYPTODASH_API_TEST_UNSET").unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(config.sources.timeout, Duration::from_secs(10));
        assert_eq!(config.sources.coins.len(), DEFAULT_COINS.len());
    }

    #[test]
    fn environment_overrides_apply() {
        env::set_var("CRYPTODASH_API_TEST_SET_HOST", "127.0.0.1");
        env::set_var("CRYPTODASH_API_TEST_SET_PORT", "8080");
        env::set_var("CRYPTODASH_API_TEST_SET_REFRESH_INTERVAL", "1m");
        env::set_var("CRYPTODASH_API_TEST_SET_HTTP_TIMEOUT", "3s");
        env::set_var("CRYPTODASH_API_TEST_SET_COINS", "bitcoin,monero");

        let config = config_with_prefix("CRYPTODASH_API_TEST_SET").unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.sources.timeout, Duration::from_secs(3));
        assert_eq!(config.sources.coins, vec!["bitcoin".to_string(), "monero".to_string()]);
    }

    #[test]
    fn bad_port_is_rejected() {
        env::set_var("CRYPTODASH_API_TEST_BAD_PORT", "99999");
        assert!(config_with_prefix("CRYPTODASH_API_TEST_BAD").is_err());
    }
}
