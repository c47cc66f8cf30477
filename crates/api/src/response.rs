//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "success": true }` body returned by deletes and logout.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
