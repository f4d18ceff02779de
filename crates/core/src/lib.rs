//! Domain logic shared by the API server and the database layer.
//!
//! Everything in here is pure: no I/O, no async, no database access.

pub mod error;
pub mod metadata;
pub mod roles;
pub mod slug;
pub mod types;
