//! Shared HTTP response shapes.

use serde::Serialize;
use utoipa::ToSchema;

/// Status + message acknowledgement, used by delete endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusMessage {
    #[schema(example = "success")]
    pub status: &'static str,
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}
