//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every mutation is a single
//! statement, so it either fully applies or not at all.

pub mod admin_user_repo;
pub mod page_section_repo;
pub mod product_repo;
pub mod settings_repo;
pub mod testimonial_repo;

pub use admin_user_repo::AdminUserRepo;
pub use page_section_repo::PageSectionRepo;
pub use product_repo::ProductRepo;
pub use settings_repo::SettingsRepo;
pub use testimonial_repo::TestimonialRepo;
