//! Request-shape helpers shared across routes

pub mod pagination;

pub use pagination::ListParams;
