use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Request body limit for uploads, in megabytes
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub status_file: String,
    pub documents_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Shared secret of engineer mode
    pub admin_secret: String,
    #[serde(default = "default_token_lifetime_hours")]
    pub token_lifetime_hours: i64,
}

fn default_max_upload_mb() -> usize {
    25
}

fn default_token_lifetime_hours() -> i64 {
    12
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
max_upload_mb = 25

[storage]
status_file = "data/status_matrix.csv"
documents_dir = "data/documents"

[auth]
admin_secret = "site-engineer"
token_lifetime_hours = 12
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve a configured path; relative paths are taken from the executable directory
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(configured)
}

impl Config {
    pub fn status_file_path(&self) -> PathBuf {
        resolve_path(&self.storage.status_file)
    }

    pub fn documents_dir_path(&self) -> PathBuf {
        resolve_path(&self.storage.documents_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.status_file, "data/status_matrix.csv");
        assert_eq!(config.auth.token_lifetime_hours, 12);
    }

    #[test]
    fn test_optional_fields_have_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080
            [storage]
            status_file = "/srv/site/status.csv"
            documents_dir = "/srv/site/documents"
            [auth]
            admin_secret = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.max_upload_mb, 25);
        assert_eq!(config.auth.token_lifetime_hours, 12);
        assert_eq!(
            config.status_file_path(),
            PathBuf::from("/srv/site/status.csv")
        );
    }
}
