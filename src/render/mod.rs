//! Page rendering.
//!
//! # Responsibilities
//! - Register page templates (embedded or from a directory)
//! - Render the precomputed [`PageView`] to HTML
//!
//! # Design Decisions
//! - Handlebars in strict mode so a template typo fails loudly
//! - HTML escaping stays on; config values are never trusted as markup
//! - Templates are registered once at startup and shared read-only

use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use thiserror::Error;

use crate::expansion::PageView;

/// Name of the page template.
pub const INDEX_TEMPLATE: &str = "index.html";

const EMBEDDED_INDEX: &str = include_str!("../../templates/index.html");

/// Error type for template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error reading templates from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template {0} not found")]
    MissingTemplate(String),

    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Renders the landing page from a [`PageView`].
#[derive(Debug, Clone)]
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    fn empty() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        Self { registry }
    }

    /// Renderer using the template compiled into the binary.
    pub fn embedded() -> Result<Self, RenderError> {
        let mut renderer = Self::empty();
        renderer.register(INDEX_TEMPLATE, EMBEDDED_INDEX)?;
        Ok(renderer)
    }

    /// Renderer using every `*.html` file in `dir`, registered by file name.
    pub fn from_dir(dir: &Path) -> Result<Self, RenderError> {
        let io_err = |source| RenderError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut renderer = Self::empty();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let source = fs::read_to_string(&path).map_err(|source| RenderError::Io {
                path: path.clone(),
                source,
            })?;
            renderer.register(name, &source)?;
        }

        if !renderer.registry.has_template(INDEX_TEMPLATE) {
            return Err(RenderError::MissingTemplate(INDEX_TEMPLATE.to_string()));
        }

        tracing::info!(
            dir = %dir.display(),
            templates = renderer.registry.get_templates().len(),
            "Templates loaded"
        );
        Ok(renderer)
    }

    /// Register (or replace) a template. Other templates can include it as a
    /// partial by its name without the `.html` suffix.
    pub fn register(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.registry.register_template_string(name, source)?;
        let partial = name.strip_suffix(".html").unwrap_or(name);
        self.registry.register_partial(partial, source)?;
        Ok(())
    }

    /// Render the index page.
    pub fn render_page(&self, view: &PageView) -> Result<String, RenderError> {
        Ok(self.registry.render(INDEX_TEMPLATE, view)?)
    }
}
