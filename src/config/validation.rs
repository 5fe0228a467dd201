//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic checks on a parsed document (serde handles syntax)
//! - Flag entries that will render oddly (empty labels, missing colors)
//! - Flag absolute-looking tab URLs that do not parse
//!
//! # Design Decisions
//! - Returns all findings, not just the first
//! - Validation is a pure function: &Config → Vec<ConfigWarning>
//! - Findings are warnings only; an unparsable document is the sole fatal case

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::Config;
use crate::expansion::environment::active_environment;
use crate::expansion::tabs::is_absolute;

/// A non-fatal finding about a config document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("environment '{0}' has no entry in environments, using the default color")]
    UnknownEnvironment(String),

    #[error("environment '{0}' has no color, using the default color")]
    MissingEnvironmentColor(String),

    #[error("environment '{0}' is listed more than once")]
    DuplicateEnvironment(String),

    #[error("fqdn is empty, generated links will have no domain")]
    EmptyFqdn,

    #[error("customer group #{0} has an empty shard")]
    EmptyShard(usize),

    #[error("customer group for shard '{0}' has no tenants")]
    NoTenants(String),

    #[error("tab '{tab}' item '{item}' has no url")]
    EmptyTabUrl { tab: String, item: String },

    #[error("tab '{tab}' item '{item}' sets both url and path, path is ignored")]
    TabItemHasPath { tab: String, item: String },

    #[error("tab '{tab}' item '{item}' url '{url}' is not a valid URL")]
    InvalidTabUrl { tab: String, item: String, url: String },
}

/// Run every semantic check against the config.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match active_environment(&config.environments, &config.environment) {
        None => warnings.push(ConfigWarning::UnknownEnvironment(config.environment.clone())),
        Some(env) if env.color.is_empty() => {
            warnings.push(ConfigWarning::MissingEnvironmentColor(env.name.clone()))
        }
        Some(_) => {}
    }

    let mut seen = HashSet::new();
    for env in &config.environments {
        if !seen.insert(env.name.as_str()) {
            warnings.push(ConfigWarning::DuplicateEnvironment(env.name.clone()));
        }
    }

    if config.fqdn.is_empty() {
        warnings.push(ConfigWarning::EmptyFqdn);
    }

    for (i, group) in config.customers.iter().enumerate() {
        if group.shard.is_empty() {
            warnings.push(ConfigWarning::EmptyShard(i));
        }
        if group.tenants.is_empty() {
            warnings.push(ConfigWarning::NoTenants(group.shard.clone()));
        }
    }

    for tab in &config.tabs {
        for item in &tab.items {
            if item.url.is_empty() {
                warnings.push(ConfigWarning::EmptyTabUrl {
                    tab: tab.name.clone(),
                    item: item.name.clone(),
                });
            } else if is_absolute(&item.url) && url::Url::parse(&item.url).is_err() {
                warnings.push(ConfigWarning::InvalidTabUrl {
                    tab: tab.name.clone(),
                    item: item.name.clone(),
                    url: item.url.clone(),
                });
            }

            if !item.path.is_empty() {
                warnings.push(ConfigWarning::TabItemHasPath {
                    tab: tab.name.clone(),
                    item: item.name.clone(),
                });
            }
        }
    }

    warnings
}
