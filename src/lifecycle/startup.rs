//! Startup orchestration.
//!
//! # Responsibilities
//! - Report config warnings
//! - Finalize and expand the config into the page view
//! - Load page templates
//!
//! # Design Decisions
//! - Runs once, sequentially, before any listener is bound
//! - Warnings are logged, never fatal; template errors are fatal

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{validate_config, Config, ConfigError, ObservabilityConfig, ServerConfig};
use crate::expansion::PageView;
use crate::render::{PageRenderer, RenderError};

/// Error type for startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load templates: {0}")]
    Render(#[from] RenderError),
}

/// Everything the server needs, computed once.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
    pub view: Arc<PageView>,
    pub renderer: PageRenderer,
}

/// Validate, expand and load templates for a parsed config.
pub fn prepare(config: Config) -> Result<Prepared, StartupError> {
    for warning in validate_config(&config) {
        tracing::warn!(%warning, "Configuration warning");
    }

    let server = config.server.clone();
    let observability = config.observability.clone();

    let view = PageView::build(config);
    tracing::info!(
        title = %view.config.title,
        environment = %view.config.environment,
        env_color = %view.config.env_color,
        shards = view.expanded_shards.len(),
        tenants = view.tenant_count(),
        tabs = view.config.tabs.len(),
        "Configuration expanded"
    );

    let renderer = match &server.templates_dir {
        Some(dir) => PageRenderer::from_dir(Path::new(dir))?,
        None => PageRenderer::embedded()?,
    };

    Ok(Prepared {
        server,
        observability,
        view: Arc::new(view),
        renderer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, ConfigFormat};

    #[test]
    fn test_prepare_with_embedded_templates() {
        let config = parse_config(
            "fqdn: example.com\ncustomers:\n  - shard: us-east\n    tenants: [acme]\n",
            ConfigFormat::Yaml,
        )
        .unwrap();

        let prepared = prepare(config).unwrap();
        assert_eq!(prepared.view.expanded_shards[0].shard_name, "us-east");
        assert_eq!(prepared.server.bind_address, "0.0.0.0:8080");
        assert!(prepared.renderer.render_page(&prepared.view).is_ok());
    }

    #[test]
    fn test_prepare_missing_templates_dir() {
        let mut config = Config::default();
        config.server.templates_dir = Some("/nonexistent/templates".into());

        assert!(matches!(prepare(config), Err(StartupError::Render(RenderError::Io { .. }))));
    }
}
