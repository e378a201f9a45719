use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::{warn, error};
use snafu::{Snafu, ResultExt};

pub fn init_logging(default_filters: &str) {
    let log_env_raw = env::var("RUST_LOG");
    let log_env = log_env_raw.clone().ok()
        .filter(|env| !env.is_empty())
        .unwrap_or(default_filters.into());

    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&log_env)
        .init();

    match &log_env_raw {
        Err(env::VarError::NotUnicode(..)) =>
            error!("Failed to read 'RUST_LOG' due to invalid Unicode. Using default instead: '{}'", default_filters),

        Err(env::VarError::NotPresent) =>
            warn!("Missing 'RUST_LOG'. Using default instead: '{}'", default_filters),

        Ok(s) if s.is_empty() =>
            warn!("Got empty 'RUST_LOG'. Using default instead: '{}'", default_filters),

        Ok(_) => (),
    }
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum ConfigError {
    #[snafu(display("'{}' missing or unset in '.env' file: {}", name, source))]
    BadVariable {
        name: String,
        source: env::VarError,
    },

    #[snafu(display("'{}' has an invalid value '{}': {}", name, input, reason))]
    InvalidValue {
        name: String,
        input: String,
        reason: String,
    },
}

/// Reads variables named `{PREFIX}_{NAME}` from the process environment.
pub struct ConfigContext {
    prefix: String,
}

impl ConfigContext {
    pub fn new(prefix: impl AsRef<str>) -> ConfigContext {
        ConfigContext {
            prefix: prefix.as_ref().to_owned(),
        }
    }

    pub fn name_of(&self, name: impl AsRef<str>) -> String {
        format!("{}_{}", self.prefix, name.as_ref())
    }

    pub fn var(&self, name: impl AsRef<str>) -> Result<String, ConfigError> {
        let full_name = self.name_of(name.as_ref());
        env::var(&full_name)
            .context(BadVariable { name: full_name })
    }

    /// Unset or empty variables yield `None`. Non-unicode values are an error.
    pub fn var_opt(&self, name: impl AsRef<str>) -> Result<Option<String>, ConfigError> {
        match self.var(name) {
            Ok(s) if s.trim().is_empty() => Ok(None),
            Ok(s) => Ok(Some(s)),
            Err(ConfigError::BadVariable { source: env::VarError::NotPresent, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn var_or(&self, name: impl AsRef<str>, default: impl Into<String>) -> Result<String, ConfigError> {
        Ok(self.var_opt(name)?.unwrap_or_else(|| default.into()))
    }

    pub fn parse_or<T>(&self, name: impl AsRef<str>, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let input = match self.var_opt(name.as_ref())? {
            None => return Ok(default),
            Some(x) => x,
        };

        input.trim().parse::<T>()
            .map_err(|e| ConfigError::InvalidValue {
                name: self.name_of(name.as_ref()),
                input: input.clone(),
                reason: e.to_string(),
            })
    }

    /// Durations such as `5m` or `30 seconds`. Unparseable input is logged and
    /// replaced by `default`.
    pub fn duration_or(&self, name: impl AsRef<str>, default: Duration) -> Result<Duration, ConfigError> {
        let input = match self.var_opt(name.as_ref())? {
            None => return Ok(default),
            Some(x) => x,
        };

        match parse_duration::parse(&input) {
            Err(err) => {
                warn!("Failed to parse '{}'. Using default value instead of '{:#?}'. Cause: {}",
                      self.name_of(name.as_ref()), default, err);
                Ok(default)
            }
            Ok(dur) => Ok(dur),
        }
    }

    /// Comma-separated values, trimmed, empty entries dropped.
    pub fn list_or(&self, name: impl AsRef<str>, default: &[&str]) -> Result<Vec<String>, ConfigError> {
        let input = match self.var_opt(name)? {
            None => return Ok(default.iter().map(|s| s.to_string()).collect()),
            Some(x) => x,
        };

        Ok(input.split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_owned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_of_joins_prefix() {
        let config = ConfigContext::new("CRYPTODASH");
        assert_eq!(config.name_of("PORT"), "CRYPTODASH_PORT");
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = ConfigContext::new("CRYPTODASH_TEST_MISSING");
        assert_eq!(config.var_or("HOST", "127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(config.parse_or("PORT", 5000u16).unwrap(), 5000);
        assert_eq!(config.duration_or("INTERVAL", Duration::from_secs(300)).unwrap(), Duration::from_secs(300));
        assert_eq!(config.list_or("COINS", &["bitcoin"]).unwrap(), vec!["bitcoin".to_string()]);
    }

    #[test]
    fn invalid_number_is_an_error() {
        env::set_var("CRYPTODASH_TEST_INVALID_PORT", "not-a-port");
        let config = ConfigContext::new("CRYPTODASH_TEST_INVALID");
        let result = config.parse_or("PORT", 5000u16);
        match result {
            Err(ConfigError::InvalidValue { name, input, .. }) => {
                assert_eq!(name, "CRYPTODASH_TEST_INVALID_PORT");
                assert_eq!(input, "not-a-port");
            }
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn durations_parse_or_fall_back() {
        env::set_var("CRYPTODASH_TEST_DUR_GOOD", "90s");
        env::set_var("CRYPTODASH_TEST_DUR_BAD", "soon");
        let config = ConfigContext::new("CRYPTODASH_TEST_DUR");
        let default = Duration::from_secs(10);
        assert_eq!(config.duration_or("GOOD", default).unwrap(), Duration::from_secs(90));
        assert_eq!(config.duration_or("BAD", default).unwrap(), default);
    }

    #[test]
    fn lists_are_trimmed() {
        env::set_var("CRYPTODASH_TEST_LIST_COINS", " bitcoin, ,ethereum ,");
        let config = ConfigContext::new("CRYPTODASH_TEST_LIST");
        assert_eq!(
            config.list_or("COINS", &[]).unwrap(),
            vec!["bitcoin".to_string(), "ethereum".to_string()]);
    }
}
