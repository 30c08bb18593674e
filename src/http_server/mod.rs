//! HTTP server
//!
//! Axum router, handlers, response envelopes, and error mapping for the
//! cupcake API.

pub mod config;
pub mod cupcake_routes;
pub mod errors;
pub mod response;
pub mod server;

pub use config::ServerConfig;
pub use cupcake_routes::{cupcake_routes, ApiState};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
