pub mod catalog;
pub mod checkout;
pub mod diagnostics;
pub mod metadata;
pub mod session;
pub mod waitlist;
