//! Testimonial model and DTOs.

use jennskin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub text: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for creating a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    #[serde(default)]
    pub role: String,
}

/// DTO for updating a testimonial. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: Option<String>,
    pub role: Option<String>,
}
