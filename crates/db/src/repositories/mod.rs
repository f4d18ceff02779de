//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod consultation_repo;
pub mod product_repo;
pub mod product_size_repo;
pub mod product_type_repo;
pub mod waitlist_repo;

pub use consultation_repo::ConsultationRepo;
pub use product_repo::ProductRepo;
pub use product_size_repo::ProductSizeRepo;
pub use product_type_repo::ProductTypeRepo;
pub use waitlist_repo::WaitlistRepo;
