//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table, plus a `Deserialize` create DTO where this service inserts rows.

pub mod consultation;
pub mod product;
pub mod product_size;
pub mod product_type;
pub mod waitlist;
