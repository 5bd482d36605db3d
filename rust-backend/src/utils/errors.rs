// src/utils/errors.rs

use thiserror::Error;

/// Errors raised while reading process settings from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SERVER_PORT must be a valid u16 (got {0:?})")]
    InvalidPort(String),
    #[error("WORKERS must be a positive integer (got {0:?})")]
    InvalidWorkers(String),
}

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;

    fn load(port: &str) -> Result<Settings, ServerError> {
        let port = port.to_string();
        Ok(Settings::from_lookup(move |key| (key == "SERVER_PORT").then(|| port.clone()))?)
    }

    #[test]
    fn settings_failure_surfaces_as_config_error() {
        match load("not-a-port") {
            Err(ServerError::Config(ConfigError::InvalidPort(raw))) => assert_eq!(raw, "not-a-port"),
            other => panic!("expected config error, got {other:?}"),
        }
        assert_eq!(load("9090").unwrap().server_port, 9090);
    }
}
