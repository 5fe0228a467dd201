//! Per-tenant link expansion.
//!
//! Unlike shards, tenants do not use the shard item template: each tenant
//! gets exactly one link to a fixed endpoint.

use serde::Serialize;

use crate::config::CustomerGroup;
use crate::expansion::shards::{base_domain, subdomain_url, ExpandedShardItem};

/// Path of the single per-tenant link.
pub const CUSTOMER_LINK_PATH: &str = "wanda";

/// Icon of the single per-tenant link.
pub const CUSTOMER_LINK_ICON: &str = "fish.svg";

/// A tenant and its links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedCustomer {
    pub name: String,
    pub links: Vec<ExpandedShardItem>,
}

/// Tenants of one customer group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerShardGroup {
    pub shard_name: String,
    pub customers: Vec<ExpandedCustomer>,
}

/// Expand every customer group in config order. Groups sharing a shard are
/// kept separate.
pub fn expand_customers(customers: &[CustomerGroup], fqdn: &str) -> Vec<CustomerShardGroup> {
    let base = base_domain(fqdn);

    customers
        .iter()
        .map(|group| CustomerShardGroup {
            shard_name: group.shard.clone(),
            customers: group
                .tenants
                .iter()
                .map(|tenant| ExpandedCustomer {
                    name: tenant.clone(),
                    links: vec![ExpandedShardItem {
                        name: tenant.clone(),
                        url: subdomain_url(tenant, base, CUSTOMER_LINK_PATH),
                        icon: CUSTOMER_LINK_ICON.to_string(),
                    }],
                })
                .collect(),
        })
        .collect()
}
