use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub risk: RiskConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_groups")]
    pub groups: Vec<CatalogGroup>,
    #[serde(
        default = "default_request_timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub request_timeout: Duration,
    /// Pause between consecutive group downloads
    #[serde(
        default = "default_request_delay",
        deserialize_with = "deserialize_duration"
    )]
    pub request_delay: Duration,
    #[serde(default)]
    pub tle_folder: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            groups: default_groups(),
            request_timeout: default_request_timeout(),
            request_delay: default_request_delay(),
            tle_folder: None,
        }
    }
}

/// One CelesTrak GP selection, e.g. `GROUP=active` or `SPECIAL=DECAYING`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogGroup {
    pub name: String,
    pub query: String,
}

fn default_base_url() -> String {
    "https://celestrak.org/NORAD/elements/gp.php".to_string()
}

fn default_groups() -> Vec<CatalogGroup> {
    [
        ("active", "GROUP=active"),
        ("stations", "GROUP=stations"),
        ("rocket-bodies", "GROUP=rocket-bodies"),
        ("cosmos-1408-debris", "GROUP=cosmos-1408-debris"),
        ("iridium-33-debris", "GROUP=iridium-33-debris"),
        ("cosmos-2251-debris", "GROUP=cosmos-2251-debris"),
        ("fengyun-1c-debris", "GROUP=fengyun-1c-debris"),
        ("dmsp-f13-debris", "GROUP=dmsp-f13-debris"),
        ("breeze-m-debris", "GROUP=breeze-m-debris"),
        ("debris", "GROUP=DEBRIS"),
        ("decaying", "SPECIAL=DECAYING"),
    ]
    .into_iter()
    .map(|(name, query)| CatalogGroup {
        name: name.to_string(),
        query: query.to_string(),
    })
    .collect()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(90)
}

fn default_request_delay() -> Duration {
    Duration::from_secs(1)
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    #[serde(default = "default_relative_velocity")]
    pub default_relative_velocity_km_s: f64,
    #[serde(default = "default_corridor_radius")]
    pub default_corridor_radius_m: f64,
    #[serde(default = "default_time_step")]
    pub time_step_seconds: i64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            default_relative_velocity_km_s: default_relative_velocity(),
            default_corridor_radius_m: default_corridor_radius(),
            time_step_seconds: default_time_step(),
        }
    }
}

fn default_relative_velocity() -> f64 {
    12.5
}

fn default_corridor_radius() -> f64 {
    50_000.0
}

fn default_time_step() -> i64 {
    crate::risk::DEFAULT_TIME_STEP_SECONDS
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}
