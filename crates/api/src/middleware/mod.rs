//! Session and role extractors.
//!
//! - [`session::Session`] -- The current session, read from the Bearer token on
//!   every request. Rejects with 401 when there is none.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role (case-insensitive).

pub mod rbac;
pub mod session;
