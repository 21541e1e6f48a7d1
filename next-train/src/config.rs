//! Service configuration.
//!
//! Read once from the environment at startup and passed down explicitly.
//!
//! | Variable          | Meaning                              | Default               |
//! |-------------------|--------------------------------------|-----------------------|
//! | `id`              | PTV developer id                     | required              |
//! | `key`             | PTV signing key                      | required              |
//! | `endpoint`        | PTV API host                         | required              |
//! | `log`             | `high` enables trace output          | off                   |
//! | `stops`           | stop catalog JSON file               | `stops.json`          |
//! | `seed_stop`       | catalog key the nearest-stop scan starts from | `McKinnon`   |
//! | `timezone`        | IANA zone for displayed times        | `Australia/Melbourne` |
//! | `max_distance_km` | service radius                       | `100`                 |
//! | `max_results`     | departures requested per board       | `2`                   |
//! | `bind`            | listen address                       | `127.0.0.1:3000`      |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::handler::DEFAULT_MAX_DISTANCE_KM;
use crate::ptv::{Credentials, PtvConfig, SignError};

const DEFAULT_CATALOG_PATH: &str = "stops.json";
const DEFAULT_SEED_STOP: &str = "McKinnon";

/// Default zone for displayed times.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Australia::Melbourne;

/// Errors building the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A PTV credential is absent or empty
    #[error(transparent)]
    Credential(#[from] SignError),

    /// A variable is present but unusable
    #[error("invalid {name} {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the service needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream API access
    pub ptv: PtvConfig,
    /// Stop catalog location
    pub catalog_path: PathBuf,
    /// Catalog key of the stop the nearest-stop scan is seeded with
    pub seed_stop: String,
    /// Zone departure times are shown in
    pub timezone: Tz,
    /// Service radius in kilometres
    pub max_distance_km: f64,
    /// Trace-level diagnostics
    pub verbose: bool,
    /// Listen address
    pub bind: SocketAddr,
}

impl AppConfig {
    /// Create a config with the given credentials and defaults elsewhere.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            ptv: PtvConfig::new(credentials),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            seed_stop: DEFAULT_SEED_STOP.to_string(),
            timezone: DEFAULT_TIMEZONE,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            verbose: false,
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let credential = |name: &'static str| lookup(name).ok_or(SignError::MissingCredential(name));
        let credentials =
            Credentials::new(credential("id")?, credential("key")?, credential("endpoint")?)?;

        let mut config = Self::new(credentials);

        if let Some(path) = lookup("stops") {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(seed) = lookup("seed_stop") {
            config.seed_stop = seed;
        }
        if let Some(zone) = lookup("timezone") {
            config.timezone = parse("timezone", &zone)?;
        }
        if let Some(km) = lookup("max_distance_km") {
            config.max_distance_km = parse("max_distance_km", &km)?;
        }
        if let Some(n) = lookup("max_results") {
            config.ptv = config.ptv.with_max_results(parse("max_results", &n)?);
        }
        if let Some(addr) = lookup("bind") {
            config.bind = parse("bind", &addr)?;
        }
        config.verbose = lookup("log").is_some_and(|level| level == "high");

        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_distance_km.is_nan() || self.max_distance_km <= 0.0 {
            return Err(ConfigError::Invalid {
                name: "max_distance_km",
                value: self.max_distance_km.to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.ptv.max_results == 0 {
            return Err(ConfigError::Invalid {
                name: "max_results",
                value: "0".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.seed_stop.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "seed_stop",
                value: self.seed_stop.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "next_train=trace"
        } else {
            "next_train=info"
        }
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("id", "3000165"),
        ("key", "secret"),
        ("endpoint", "timetableapi.ptv.vic.gov.au"),
    ];

    #[test]
    fn defaults() {
        let config = AppConfig::from_lookup(env(&CREDENTIALS)).unwrap();

        assert_eq!(config.ptv.credentials.dev_id(), "3000165");
        assert_eq!(config.ptv.credentials.endpoint(), "timetableapi.ptv.vic.gov.au");
        assert_eq!(config.ptv.max_results, 2);
        assert_eq!(config.catalog_path, PathBuf::from("stops.json"));
        assert_eq!(config.seed_stop, "McKinnon");
        assert_eq!(config.timezone, chrono_tz::Australia::Melbourne);
        assert_eq!(config.max_distance_km, 100.0);
        assert!(!config.verbose);
        assert_eq!(config.bind, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_filter(), "next_train=info");
    }

    #[test]
    fn overrides() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.extend([
            ("log", "high"),
            ("stops", "/data/stops.json"),
            ("seed_stop", "Flinders Street"),
            ("timezone", "Australia/Sydney"),
            ("max_distance_km", "25.5"),
            ("max_results", "3"),
            ("bind", "0.0.0.0:8080"),
        ]);
        let config = AppConfig::from_lookup(env(&pairs)).unwrap();

        assert!(config.verbose);
        assert_eq!(config.log_filter(), "next_train=trace");
        assert_eq!(config.catalog_path, PathBuf::from("/data/stops.json"));
        assert_eq!(config.seed_stop, "Flinders Street");
        assert_eq!(config.timezone, chrono_tz::Australia::Sydney);
        assert_eq!(config.max_distance_km, 25.5);
        assert_eq!(config.ptv.max_results, 3);
        assert_eq!(config.bind.port(), 8080);
    }

    #[test]
    fn log_levels_other_than_high_are_quiet() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("log", "low"));
        let config = AppConfig::from_lookup(env(&pairs)).unwrap();
        assert!(!config.verbose);
    }

    #[test]
    fn missing_credentials() {
        let err = AppConfig::from_lookup(env(&[("id", "1"), ("endpoint", "host")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Credential(SignError::MissingCredential("key"))
        ));

        let err = AppConfig::from_lookup(env(&[("id", ""), ("key", "k"), ("endpoint", "h")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "missing credential: id");
    }

    #[test]
    fn invalid_values() {
        for (name, value) in [
            ("timezone", "Mars/Olympus_Mons"),
            ("max_distance_km", "far"),
            ("max_distance_km", "-1"),
            ("max_results", "0"),
            ("max_results", "300"),
            ("bind", "localhost"),
            ("seed_stop", " "),
        ] {
            let mut pairs = CREDENTIALS.to_vec();
            pairs.push((name, value));
            let err = AppConfig::from_lookup(env(&pairs)).unwrap_err();
            assert!(
                matches!(&err, ConfigError::Invalid { name: n, .. } if *n == name),
                "{name}={value}: {err}"
            );
        }
    }
}
