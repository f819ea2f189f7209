//! Repository implementations for database access
//!
//! Each repository borrows one scoped connection for the duration of a
//! request and issues single-statement reads and writes. List operations
//! use JOINs - no N+1 queries.

pub mod items;
pub mod suppliers;

pub use items::{ItemRepo, ItemWithSupplier, NewItem};
pub use suppliers::{NewSupplier, Supplier, SupplierRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}
