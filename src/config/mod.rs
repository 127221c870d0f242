mod types;

pub use types::*;

use crate::{Error, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const ENV_FILE: &str = ".env";

pub async fn load() -> Result<Config> {
    let env_file = read_env_file(Path::new(ENV_FILE))?;
    let lookup = layered_lookup(&env_file, |key| env::var(key).ok());

    let explicit_path = lookup("CONFIG_PATH");
    load_from(explicit_path.as_deref(), DEFAULT_CONFIG_PATH, lookup).await
}

/// Reads the YAML at `explicit_path`, or at `default_path` when none is given,
/// then applies overrides from `lookup`. Only the default file may be absent.
pub async fn load_from<F>(
    explicit_path: Option<&str>,
    default_path: &str,
    lookup: F,
) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = explicit_path.unwrap_or(default_path);

    debug!("Loading configuration from: {}", config_path);

    let mut config = match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => from_yaml_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit_path.is_none() => {
            debug!("No {} found, using defaults", config_path);
            Config::default()
        }
        Err(e) => {
            return Err(Error::config(format!(
                "Failed to read {}: {}",
                config_path, e
            )));
        }
    };

    config.apply_overrides(lookup)?;

    Ok(config)
}

pub fn from_yaml_str(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Parses a dotenv file. A missing file yields no variables.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let invalid = |e: dotenvy::Error| Error::config(format!("Invalid {}: {}", path.display(), e));

    match dotenvy::from_path_iter(path) {
        Ok(entries) => entries.map(|entry| entry.map_err(invalid)).collect(),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(invalid(e)),
    }
}

/// Values from the env file win over `fallback` (the process environment).
pub fn layered_lookup<'a, F>(
    env_file: &'a HashMap<String, String>,
    fallback: F,
) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'a,
{
    move |key| env_file.get(key).cloned().or_else(|| fallback(key))
}

impl Config {
    /// Applies `ENV`, `MODEL_PATH`, `HOST`, `PORT` and `RUST_LOG` on top of
    /// the file values.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("ENV") {
            self.model.env = RunMode::parse(&mode);
        }
        if let Some(path) = lookup("MODEL_PATH") {
            self.model.path = path;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
        }
        if let Some(level) = lookup("RUST_LOG") {
            self.server.logs.level = level;
        }
        if self.server.inference_workers == 0 {
            return Err(Error::config("server.inference_workers must be at least 1"));
        }
        Ok(())
    }
}
