//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup and request handling produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (request counters, render latency)
//!
//! Consumers:
//!     → stderr (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event
//! - Request ID flows from the request-ID layer into the trace span
//! - Metrics are cheap and become no-ops when no recorder is installed

pub mod logging;
pub mod metrics;
