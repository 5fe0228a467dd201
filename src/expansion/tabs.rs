//! Tab indexing and tab item URL resolution.

use serde::Serialize;

use crate::config::{Item, Tab};

/// A tab with its position and fully qualified item URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTab {
    pub index: usize,
    pub name: String,
    pub items: Vec<Item>,
}

/// True when `url` starts with an `http://` or `https://` scheme.
pub fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Absolute URLs pass through. Anything else is a host label expanded to
/// `https://{label}.{fqdn}`.
pub fn build_url(fqdn: &str, url: &str) -> String {
    if is_absolute(url) {
        url.to_string()
    } else {
        format!("https://{url}.{fqdn}")
    }
}

/// Number the tabs and qualify every item URL against the full FQDN.
pub fn resolve_tabs(tabs: Vec<Tab>, fqdn: &str) -> Vec<ResolvedTab> {
    tabs.into_iter()
        .enumerate()
        .map(|(index, tab)| ResolvedTab {
            index,
            name: tab.name,
            items: tab
                .items
                .into_iter()
                .map(|item| Item {
                    url: build_url(fqdn, &item.url),
                    ..item
                })
                .collect(),
        })
        .collect()
}
