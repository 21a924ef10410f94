use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteMessage {
    pub message: String,
}

impl DeleteMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
