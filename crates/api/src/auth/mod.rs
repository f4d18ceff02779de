//! Session token primitives.
//!
//! - [`session`] -- validation (and test-side issuance) of the signed session
//!   tokens minted by the external identity service.

pub mod session;
