//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Small connection pool; one scoped connection per request
//! - List operations use JOINs - no N+1 queries
//! - Single-statement autocommit writes - no multi-step transactions

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
