use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// JSON catalog loaded by the memory backend, see [`StoreConfig::seed_file`]
    pub seed_path: Option<String>,
    pub database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            seed_path: None,
            database_url: None,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

impl StoreConfig {
    /// Seed location, with a relative `seed_path` taken from `config_dir`.
    pub fn seed_file(&self, config_dir: &Path) -> Option<PathBuf> {
        let path = Path::new(self.seed_path.as_deref()?);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(config_dir.join(path))
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionConfig {
    /// Upper bound for each store call made while building suggestions; 0 disables it.
    #[serde(default = "default_store_timeout")]
    pub store_timeout_ms: u64,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: default_store_timeout(),
            algorithm: default_algorithm(),
        }
    }
}

fn default_max_connections() -> u32 { 5 }
fn default_acquire_timeout() -> u64 { 3 }
fn default_store_timeout() -> u64 { 2000 }
fn default_algorithm() -> String { "comprehensive-v1".to_string() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg.. `ROAMY__STORE__BACKEND=postgres`
            .add_source(config::Environment::with_prefix("ROAMY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.max_connections, 5);
        assert_eq!(config.suggestions.store_timeout_ms, 2000);
        assert_eq!(config.suggestions.algorithm, "comprehensive-v1");
    }

    #[test]
    fn test_postgres_backend_parses() {
        let config: Config = serde_json::from_str(
            r#"{"store": {"backend": "postgres", "database_url": "postgres://localhost/roamy"}}"#,
        )
        .unwrap();
        assert_eq!(config.store.backend, StoreBackend::Postgres);
        assert_eq!(config.store.database_url.as_deref(), Some("postgres://localhost/roamy"));
        assert_eq!(config.store.acquire_timeout_secs, 3);
    }

    #[test]
    fn test_relative_seed_path_follows_config_dir() {
        let mut store = StoreConfig { seed_path: Some("seed.json".to_string()), ..StoreConfig::default() };
        assert_eq!(store.seed_file(Path::new("/etc/roamy")), Some(PathBuf::from("/etc/roamy/seed.json")));

        store.seed_path = Some("/var/lib/roamy/catalog.json".to_string());
        assert_eq!(store.seed_file(Path::new("/etc/roamy")), Some(PathBuf::from("/var/lib/roamy/catalog.json")));

        store.seed_path = None;
        assert_eq!(store.seed_file(Path::new("config")), None);
    }

    #[test]
    fn test_default_file_loads_with_bundled_seed() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config");
        let config = Config::load_from(dir.to_str().expect("utf-8 path")).expect("default config loads");
        let seed = config.store.seed_file(&dir).expect("seed configured");
        assert!(seed.exists(), "{} missing", seed.display());
    }
}
