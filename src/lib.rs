//! cupcakes - a minimal JSON REST service for managing cupcakes
//!
//! One resource, one table, five endpoints: list, fetch-by-id, create,
//! partial-update, delete. The HTTP layer is axum, persistence is SeaORM
//! over SQLite (or whatever `DATABASE_URL` points at).

pub mod cli;
pub mod http_server;
pub mod model;
pub mod store;
