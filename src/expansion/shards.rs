//! Shard inference and per-shard link expansion.
//!
//! There is no shard declaration list. The shards are whatever the customer
//! groups reference, in first-seen order, and every shard receives the same
//! set of path items.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::{CustomerGroup, Item};

/// FQDN prefix that must not leak into shard and tenant subdomains.
pub const ROUTING_PREFIX: &str = "pfn.";

/// A fully resolved link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedShardItem {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// All expanded items of one shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardGroup {
    pub shard_name: String,
    pub items: Vec<ExpandedShardItem>,

    /// Lowercased, hyphenated shard name used as the `data-shard` attribute.
    pub data_shard: String,
}

/// Distinct shard identifiers referenced by the customer groups, in
/// first-occurrence order.
pub fn infer_shards(customers: &[CustomerGroup]) -> Vec<&str> {
    let mut seen = HashSet::new();
    customers
        .iter()
        .map(|group| group.shard.as_str())
        .filter(|shard| seen.insert(*shard))
        .collect()
}

/// Domain that shard and tenant subdomains hang off.
pub fn base_domain(fqdn: &str) -> &str {
    fqdn.strip_prefix(ROUTING_PREFIX).unwrap_or(fqdn)
}

/// `https://{host}.{base}/{path}`. The host label is used verbatim.
pub fn subdomain_url(host: &str, base: &str, path: &str) -> String {
    format!("https://{host}.{base}/{path}")
}

/// `data-shard` slug: lowercase with spaces replaced by hyphens.
pub fn shard_slug(shard: &str) -> String {
    shard.replace(' ', "-").to_lowercase()
}

/// Apply the shard item template to every inferred shard.
pub fn expand_shards(customers: &[CustomerGroup], items: &[Item], fqdn: &str) -> Vec<ShardGroup> {
    let base = base_domain(fqdn);

    infer_shards(customers)
        .into_iter()
        .map(|shard| ShardGroup {
            shard_name: shard.to_string(),
            items: items
                .iter()
                .map(|item| ExpandedShardItem {
                    name: item.name.clone(),
                    url: subdomain_url(shard, base, &item.path),
                    icon: item.icon.clone(),
                })
                .collect(),
            data_shard: shard_slug(shard),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(shard: &str, tenants: &[&str]) -> CustomerGroup {
        CustomerGroup {
            shard: shard.to_string(),
            tenants: tenants.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn path_item(name: &str, path: &str) -> Item {
        Item {
            name: name.to_string(),
            path: path.to_string(),
            icon: format!("{path}.svg"),
            ..Default::default()
        }
    }

    #[test]
    fn test_infer_shards_first_occurrence_order() {
        let customers = vec![group("b", &[]), group("a", &[]), group("b", &[]), group("c", &[])];
        assert_eq!(infer_shards(&customers), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_infer_shards_empty() {
        assert!(infer_shards(&[]).is_empty());
    }

    #[test]
    fn test_base_domain() {
        assert_eq!(base_domain("pfn.example.com"), "example.com");
        assert_eq!(base_domain("example.com"), "example.com");
        // Only a leading prefix is stripped, and only once.
        assert_eq!(base_domain("pfn.pfn.example.com"), "pfn.example.com");
        assert_eq!(base_domain("app.pfn.example.com"), "app.pfn.example.com");
    }

    #[test]
    fn test_shard_url() {
        let customers = vec![group("us-east", &["acme"])];
        let groups = expand_shards(&customers, &[path_item("Dashboard", "dash")], "example.com");

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items[0].url, "https://us-east.example.com/dash");
        assert_eq!(groups[0].items[0].name, "Dashboard");
        assert_eq!(groups[0].items[0].icon, "dash.svg");
    }

    #[test]
    fn test_shard_url_strips_routing_prefix() {
        let customers = vec![group("eu", &[])];
        let groups = expand_shards(&customers, &[path_item("Logs", "logs")], "pfn.example.com");

        assert_eq!(groups[0].items[0].url, "https://eu.example.com/logs");
    }

    #[test]
    fn test_shard_slug() {
        assert_eq!(shard_slug("US East 1"), "us-east-1");
        assert_eq!(shard_slug("eu-west"), "eu-west");
    }

    #[test]
    fn test_every_shard_gets_every_item_in_order() {
        let customers = vec![group("b", &[]), group("a", &[]), group("b", &[])];
        let items = vec![path_item("One", "one"), path_item("Two", "two")];
        let groups = expand_shards(&customers, &items, "example.com");

        let names: Vec<_> = groups.iter().map(|g| g.shard_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);

        for g in &groups {
            let urls: Vec<_> = g.items.iter().map(|i| i.url.clone()).collect();
            assert_eq!(
                urls,
                vec![
                    format!("https://{}.example.com/one", g.shard_name),
                    format!("https://{}.example.com/two", g.shard_name),
                ]
            );
        }
    }

    #[test]
    fn test_no_customers_no_groups() {
        let groups = expand_shards(&[], &[path_item("Dashboard", "dash")], "example.com");
        assert!(groups.is_empty());
    }

    #[test]
    fn test_shard_without_items_still_grouped() {
        let groups = expand_shards(&[group("us-east", &[])], &[], "example.com");
        assert_eq!(groups.len(), 1);
        assert!(groups[0].items.is_empty());
        assert_eq!(groups[0].data_shard, "us-east");
    }
}
