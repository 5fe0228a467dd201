//! Configuration schema definitions.
//!
//! This module defines the declarative landing page document together with
//! the ambient server and observability sections. All types derive Serde
//! traits for deserialization from config files, and every field falls back
//! to an empty default when missing.

use serde::{Deserialize, Serialize};

/// Root configuration for the landing page.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Page title.
    pub title: String,

    /// Name of the active environment (selects the badge color).
    pub environment: String,

    /// Root domain that shard, tenant and tab host labels are built against.
    pub fqdn: String,

    /// Known environments, in display order.
    pub environments: Vec<EnvironmentLink>,

    /// Path items applied to every shard.
    pub shards: ShardTemplate,

    /// Customer tenants grouped by the shard they live on.
    pub customers: Vec<CustomerGroup>,

    /// Navigation tabs, in display order.
    pub tabs: Vec<Tab>,

    /// HTTP server settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// An environment entry in the environment switcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentLink {
    pub name: String,
    pub url: String,

    /// Hex color, e.g. `#15803d`.
    pub color: String,
}

/// The flat list of shard-relative items.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ShardTemplate {
    pub items: Vec<Item>,
}

/// A navigation entry.
///
/// Tab items use `url`, shard items use `path`. The two are exclusive by
/// convention only.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Item {
    pub name: String,
    pub url: String,
    pub path: String,
    pub icon: String,
}

/// A top-level navigation tab.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Tab {
    pub name: String,
    pub items: Vec<Item>,
}

/// Tenants hosted on one shard.
///
/// The same shard may appear in several groups.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerGroup {
    pub shard: String,
    pub tenants: Vec<String>,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Directory served under `/resources/`.
    pub resources_dir: String,

    /// Directory of `*.html` templates. The embedded template is used when unset.
    pub templates_dir: Option<String>,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            resources_dir: "resources".to_string(),
            templates_dir: None,
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
