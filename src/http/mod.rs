//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → request.rs (assign x-request-id)
//!     → server.rs (Axum router)
//!         /            → render PageView with PageRenderer
//!         /resources/* → static files
//!         /healthz     → JSON status
//!         anything else → index page
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{request_id, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
