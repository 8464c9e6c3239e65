//! Configuration loading from disk and the environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: &'static str, message: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, message } => write!(f, "Invalid {}: {}", var, message),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration: defaults, then the optional TOML file, then the
/// process environment. The result is validated.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with(path, |var| std::env::var(var).ok())
}

fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_file(path)?,
        None => AppConfig::default(),
    };
    apply_env(&mut config, lookup)?;

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Recognised variables: `MONGO_CONNECTION_STRING`, `MONGO_DB_NAME`, `PORT`,
/// `CLIENT_ORIGIN_URL` (comma separated) and `LOG_LEVEL`.
pub fn apply_env<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(uri) = lookup("MONGO_CONNECTION_STRING") {
        config.database.connection_string = uri;
    }
    if let Some(name) = lookup("MONGO_DB_NAME") {
        config.database.database_name = name;
    }

    if let Some(port) = lookup("PORT") {
        let port: u16 = port.trim().parse().map_err(|_| ConfigError::Env {
            var: "PORT",
            message: format!("'{}' is not a port number", port),
        })?;
        let mut addr: SocketAddr = config
            .listener
            .bind_address
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], port)));
        addr.set_port(port);
        config.listener.bind_address = addr.to_string();
    }

    if let Some(origins) = lookup("CLIENT_ORIGIN_URL") {
        config.cors.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Some(level) = lookup("LOG_LEVEL") {
        config.observability.log_level = level;
    }

    normalize_origins(config);
    Ok(())
}

/// Browsers send `Origin` without a trailing slash.
fn normalize_origins(config: &mut AppConfig) {
    for origin in &mut config.cors.allowed_origins {
        if origin != "*" {
            while origin.ends_with('/') {
                origin.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        apply_env(
            &mut config,
            env(&[
                ("MONGO_CONNECTION_STRING", "mongodb://db:27017"),
                ("MONGO_DB_NAME", "shop"),
                ("PORT", "9000"),
                ("CLIENT_ORIGIN_URL", "https://a.example.com/, http://localhost:3000"),
            ]),
        )
        .unwrap();

        assert_eq!(config.database.connection_string, "mongodb://db:27017");
        assert_eq!(config.database.database_name, "shop");
        assert_eq!(config.listener.bind_address, "0.0.0.0:9000");
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_no_env_keeps_defaults() {
        let mut config = AppConfig::default();
        apply_env(&mut config, env(&[])).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
        assert_eq!(config.database.connection_string, "mongodb://localhost:27017");
    }

    #[test]
    fn test_bad_port() {
        let mut config = AppConfig::default();
        let err = apply_env(&mut config, env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "PORT", .. }));
    }

    #[test]
    fn test_wildcard_origin_kept() {
        let mut config = AppConfig::default();
        apply_env(&mut config, env(&[("CLIENT_ORIGIN_URL", "*")])).unwrap();
        assert!(config.cors.allows_any());
    }

    #[test]
    fn test_load_file_then_env() {
        let path = std::env::temp_dir().join(format!("trendify-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[listener]\nbind_address = \"127.0.0.1:7000\"\n\n[timeouts]\nrequest_secs = 5\n",
        )
        .unwrap();

        let config = load_with(Some(&path), env(&[])).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:7000");
        assert_eq!(config.timeouts.request_secs, 5);

        let config = load_with(Some(&path), env(&[("PORT", "7100")])).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:7100");

        fs::write(&path, "[timeouts]\nrequest_secs = 0\n").unwrap();
        assert!(matches!(load_with(Some(&path), env(&[])), Err(ConfigError::Validation(_))));

        fs::write(&path, "[timeouts\n").unwrap();
        assert!(matches!(load_with(Some(&path), env(&[])), Err(ConfigError::Parse(_))));

        std::fs::remove_file(&path).unwrap_or_default();
    }
}
