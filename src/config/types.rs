// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub site: SiteConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Minimum level written: error, warn, info or debug
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
    /// Seconds to wait for open connections after a shutdown signal
    pub shutdown_timeout: u64,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Published site inventory used by the sitemap and robots.txt
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    /// Absolute origin prepended to every sitemap path
    pub base_url: String,
    /// Page paths in publication order; `""` is the site root
    #[serde(default = "default_static_paths")]
    pub static_paths: Vec<String>,
    /// Service slugs published under `/services/<slug>`
    #[serde(default = "default_service_slugs")]
    pub service_slugs: Vec<String>,
}

pub fn default_static_paths() -> Vec<String> {
    ["", "/about", "/services", "/projects", "/contact", "/careers"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_service_slugs() -> Vec<String> {
    [
        "ndt",
        "solar-installation",
        "wind-energy",
        "energy-audits",
        "maintenance",
        "consulting",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.example-energy.com".to_string(),
            static_paths: default_static_paths(),
            service_slugs: default_service_slugs(),
        }
    }
}
