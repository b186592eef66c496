//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
///
/// Every endpoint replies with `{success, message, ...}`; the payload fields
/// of `T` are flattened into the top-level object on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,

    /// Response payload, flattened into the top-level object
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a successful response with no payload
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the payload, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
