//! Expansion engine.
//!
//! Turns the declarative [`Config`] into the display-ready view the page is
//! rendered from.
//!
//! # Data Flow
//! ```text
//! Config
//!     → finalize()            (environment color, tab index + URL fixups)
//!     → ResolvedConfig
//!     → expand_shards()       (inferred shards × shard items)
//!     → expand_customers()    (customer groups × tenants)
//!     → PageView              (computed once, shared read-only)
//! ```
//!
//! # Design Decisions
//! - Every step is a pure function over in-memory data; nothing here does I/O
//! - Fixups build a new value instead of mutating the loaded config
//! - The shard list is derived from customer groups on demand, never stored

pub mod customers;
pub mod environment;
pub mod shards;
pub mod tabs;

use serde::Serialize;

use crate::config::{Config, CustomerGroup, EnvironmentLink, ShardTemplate};

pub use customers::{
    expand_customers, CustomerShardGroup, ExpandedCustomer, CUSTOMER_LINK_ICON, CUSTOMER_LINK_PATH,
};
pub use environment::{active_environment, resolve_env_color, DEFAULT_ENV_COLOR};
pub use shards::{
    base_domain, expand_shards, infer_shards, ExpandedShardItem, ShardGroup, ROUTING_PREFIX,
};
pub use tabs::{build_url, resolve_tabs, ResolvedTab};

/// The page config with startup fixups applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub title: String,
    pub environment: String,
    pub fqdn: String,
    pub environments: Vec<EnvironmentLink>,

    /// Badge color of the active environment.
    pub env_color: String,

    pub shards: ShardTemplate,
    pub customers: Vec<CustomerGroup>,
    pub tabs: Vec<ResolvedTab>,
}

impl ResolvedConfig {
    /// Distinct shards referenced by the customer groups.
    pub fn shard_names(&self) -> Vec<&str> {
        infer_shards(&self.customers)
    }
}

/// Apply the one-time fixups. Server and observability settings are dropped.
pub fn finalize(config: Config) -> ResolvedConfig {
    let Config {
        title,
        environment,
        fqdn,
        environments,
        shards,
        customers,
        tabs,
        ..
    } = config;

    let env_color = resolve_env_color(&environments, &environment);
    let tabs = resolve_tabs(tabs, &fqdn);

    ResolvedConfig {
        title,
        environment,
        fqdn,
        environments,
        env_color,
        shards,
        customers,
        tabs,
    }
}

/// Everything the page template needs, computed once at startup.
///
/// Serializes flat: the config fields sit at the top level next to the
/// expanded collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    #[serde(flatten)]
    pub config: ResolvedConfig,
    pub expanded_shards: Vec<ShardGroup>,
    pub expanded_customers: Vec<CustomerShardGroup>,
}

impl PageView {
    /// Finalize the config and expand shards and customers.
    pub fn build(config: Config) -> Self {
        let config = finalize(config);
        let expanded_shards = expand_shards(&config.customers, &config.shards.items, &config.fqdn);
        let expanded_customers = expand_customers(&config.customers, &config.fqdn);

        tracing::debug!(
            shards = expanded_shards.len(),
            customer_groups = expanded_customers.len(),
            tabs = config.tabs.len(),
            env_color = %config.env_color,
            "Landing page expanded"
        );

        Self {
            config,
            expanded_shards,
            expanded_customers,
        }
    }

    /// Total number of tenants across all customer groups.
    pub fn tenant_count(&self) -> usize {
        self.expanded_customers
            .iter()
            .map(|group| group.customers.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Item, Tab};

    fn sample_config() -> Config {
        Config {
            title: "Landing".into(),
            environment: "staging".into(),
            fqdn: "pfn.example.com".into(),
            environments: vec![
                EnvironmentLink {
                    name: "prod".into(),
                    url: "https://prod.example.com".into(),
                    color: "#b91c1c".into(),
                },
                EnvironmentLink {
                    name: "staging".into(),
                    url: "https://staging.example.com".into(),
                    color: "#15803d".into(),
                },
            ],
            shards: ShardTemplate {
                items: vec![Item {
                    name: "Dashboard".into(),
                    path: "dash".into(),
                    icon: "dash.svg".into(),
                    ..Default::default()
                }],
            },
            customers: vec![
                CustomerGroup {
                    shard: "US East".into(),
                    tenants: vec!["acme".into(), "globex".into()],
                },
                CustomerGroup {
                    shard: "eu".into(),
                    tenants: vec!["initech".into()],
                },
            ],
            tabs: vec![Tab {
                name: "Tools".into(),
                items: vec![Item {
                    name: "Grafana".into(),
                    url: "grafana".into(),
                    icon: "grafana.svg".into(),
                    ..Default::default()
                }],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_finalize_applies_fixups() {
        let resolved = finalize(sample_config());

        assert_eq!(resolved.env_color, "#15803d");
        assert_eq!(resolved.tabs[0].index, 0);
        assert_eq!(resolved.tabs[0].items[0].url, "https://grafana.pfn.example.com");
        assert_eq!(resolved.shard_names(), vec!["US East", "eu"]);
    }

    #[test]
    fn test_finalize_unknown_environment_uses_default() {
        let mut config = sample_config();
        config.environment = "qa".into();

        assert_eq!(finalize(config).env_color, DEFAULT_ENV_COLOR);
    }

    #[test]
    fn test_page_view_build() {
        let view = PageView::build(sample_config());

        assert_eq!(view.expanded_shards.len(), 2);
        assert_eq!(view.expanded_shards[0].data_shard, "us-east");
        assert_eq!(view.expanded_shards[1].items[0].url, "https://eu.example.com/dash");
        assert_eq!(view.expanded_customers.len(), 2);
        assert_eq!(view.tenant_count(), 3);
        assert_eq!(
            view.expanded_customers[1].customers[0].links[0].url,
            "https://initech.example.com/wanda"
        );
    }

    #[test]
    fn test_page_view_empty_customers() {
        let mut config = sample_config();
        config.customers.clear();
        let view = PageView::build(config);

        assert!(view.expanded_shards.is_empty());
        assert!(view.expanded_customers.is_empty());
        assert_eq!(view.tenant_count(), 0);
    }

    #[test]
    fn test_page_view_serializes_flat() {
        let view = PageView::build(sample_config());
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["title"], "Landing");
        assert_eq!(value["env_color"], "#15803d");
        assert_eq!(value["tabs"][0]["index"], 0);
        assert_eq!(value["expanded_shards"][0]["shard_name"], "US East");
        assert_eq!(value["expanded_customers"][0]["customers"][1]["name"], "globex");
        assert!(value.get("config").is_none());
    }
}
