//! Landing page server library.
//!
//! Expands a declarative config (environments, shard items, customer
//! tenants, tabs) into a fully resolved page view and serves it over HTTP.

pub mod config;
pub mod expansion;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;

pub use config::schema::Config;
pub use expansion::PageView;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use render::PageRenderer;
