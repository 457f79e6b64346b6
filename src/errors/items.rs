use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Item API error types
#[derive(ApiResponse, Debug)]
pub enum ItemError {
    /// No item exists with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Missing, invalid or expired bearer token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemError {
    /// Create a NotFound error for the given item id
    pub fn not_found(id: i32) -> Self {
        ItemError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("Item {} does not exist", id),
            status_code: 404,
        }))
    }

    /// Create an Unauthorized error
    pub fn unauthorized(message: String) -> Self {
        ItemError::Unauthorized(Json(ErrorResponse {
            error: "unauthorized".to_string(),
            message,
            status_code: 401,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        ItemError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemError::NotFound(json) => json.0.message.clone(),
            ItemError::Unauthorized(json) => json.0.message.clone(),
            ItemError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
