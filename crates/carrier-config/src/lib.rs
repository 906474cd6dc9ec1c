use serde::{Deserialize, Serialize};
use std::{env, fmt};

pub const DEFAULT_DATA_PATH: &str = "data/shipments.json";
pub const DEFAULT_ARC_SEGMENTS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Dev,
    Test,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "dev" | "development" => Self::Dev,
            "test" | "testing" => Self::Test,
            "staging" => Self::Staging,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Prod => "prod",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub environment: Environment,
    pub bind_addr: String,
    pub metrics_addr: Option<String>,
    pub log_level: String,
    /// JSON dataset loaded once at startup.
    pub data_path: String,
}

impl ServiceConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        Self::from_lookup(default_service_name, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(default_service_name: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service_name: lookup("CARRIER_SERVICE_NAME")
                .unwrap_or_else(|| default_service_name.to_string()),
            environment: Environment::from_env(
                &lookup("CARRIER_ENV").unwrap_or_else(|| "local".to_string()),
            ),
            bind_addr: lookup("CARRIER_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            metrics_addr: lookup("CARRIER_METRICS_ADDR").filter(|value| !value.trim().is_empty()),
            log_level: lookup("CARRIER_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            data_path: lookup("CARRIER_DATA_PATH").unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
        }
    }
}

/// Map presentation defaults. Backend and projection stay as raw names here;
/// the service parses them and falls back to its own defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub backend: String,
    pub projection: String,
    pub arc_segments: usize,
}

impl MapConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            backend: lookup("CARRIER_MAP_BACKEND").unwrap_or_else(|| "leaflet".to_string()),
            projection: lookup("CARRIER_MAPBOX_PROJECTION")
                .unwrap_or_else(|| "mercator".to_string()),
            arc_segments: parse_usize(lookup("CARRIER_ARC_SEGMENTS"), DEFAULT_ARC_SEGMENTS).max(1),
        }
    }
}

fn parse_usize(value: Option<String>, default: usize) -> usize {
    value
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(default)
}
