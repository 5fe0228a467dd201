//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, warnings only)
//!     → Config (raw, immutable)
//!     → expansion::PageView (finalized + expanded, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError, ConfigFormat};
pub use schema::{
    Config, CustomerGroup, EnvironmentLink, Item, ObservabilityConfig, ServerConfig, ShardTemplate,
    Tab,
};
pub use validation::{validate_config, ConfigWarning};
