use dotenv::dotenv;
use std::env;

use crate::utils::errors::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MODE: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub server_port: u16,
    pub app_mode: String,
    /// `None` leaves the worker count to actix (one per physical core).
    pub workers: Option<usize>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok(); // loads `.env` file automatically
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let app_mode = lookup("APP_MODE")
            .unwrap_or_else(|| DEFAULT_MODE.into())
            .to_lowercase();

        let workers = match lookup("WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
            None => None,
        };

        Ok(Self {
            host,
            server_port,
            app_mode,
            workers,
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_mode == "development"
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            server_port: DEFAULT_PORT,
            app_mode: DEFAULT_MODE.into(),
            workers: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let s = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(s, Settings::default());
        assert!(s.is_development());
    }

    #[test]
    fn reads_overrides() {
        let s = Settings::from_lookup(lookup_in(&[
            ("HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
            ("APP_MODE", "PRODUCTION"),
            ("WORKERS", "2"),
        ]))
        .unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.server_port, 9000);
        assert_eq!(s.app_mode, "production");
        assert!(!s.is_development());
        assert_eq!(s.workers, Some(2));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Settings::from_lookup(lookup_in(&[("SERVER_PORT", "70000")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("70000".into()));
    }

    #[test]
    fn rejects_zero_workers() {
        let err = Settings::from_lookup(lookup_in(&[("WORKERS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWorkers("0".into()));
    }
}
