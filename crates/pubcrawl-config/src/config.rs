use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://pubcrawlapi.appspot.com/pubcache/";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub area: AreaConfig,
}

/// Where and as whom to query the pubcache endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Search area: a centre point and a radius in degrees
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_deg")]
    pub deg: f64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_id() -> String {
    "mike".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

// Victoria, London
fn default_latitude() -> f64 {
    51.496466
}

fn default_longitude() -> f64 {
    -0.141499
}

fn default_deg() -> f64 {
    0.003
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: default_user_id(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            deg: default_deg(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, or defaults when it does not exist yet
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path.display(), e))
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("api.base_url cannot be empty"));
        }
        if self.api.user_id.trim().is_empty() {
            return Err(anyhow::anyhow!("api.user_id cannot be empty"));
        }
        if self.api.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("api.timeout_seconds must be greater than zero"));
        }
        if !(-90.0..=90.0).contains(&self.area.latitude) {
            return Err(anyhow::anyhow!("area.latitude must be within [-90, 90], got {}", self.area.latitude));
        }
        if !(-180.0..=180.0).contains(&self.area.longitude) {
            return Err(anyhow::anyhow!("area.longitude must be within [-180, 180], got {}", self.area.longitude));
        }
        if !(self.area.deg > 0.0) {
            return Err(anyhow::anyhow!("area.deg must be positive, got {}", self.area.deg));
        }
        Ok(())
    }
}
