//! stockroom-server: inventory tracking over HTTP
//!
//! Exposes supplier and item CRUD backed by a SQLite database file.
//! The binary crate (`stockroom-cli`) wires config, pool, and schema
//! setup together and starts the server.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ApiError, ServerConfig};
