use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::dictionary::Language;

/// Reasons a word query is rejected. Parameter checks run in variant order;
/// a malformed query string is caught before any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Unsupported language: {0}. Supported: {supported}", supported = Language::supported_list())]
    UnsupportedLanguage(String),

    /// The language is valid but its word list failed to load at startup
    #[error("Dictionary for {0} not loaded")]
    DictionaryUnavailable(Language),

    #[error("Query param \"chars\" is required (comma-separated characters)")]
    MissingCharsParam,

    #[error("Invalid \"chars\" param")]
    InvalidCharsParam,

    #[error("Invalid \"length\" param (must be a positive integer)")]
    InvalidLengthParam,

    #[error("Invalid \"limit\" param (must be a positive integer)")]
    InvalidLimitParam,

    /// The query string itself could not be decoded, e.g. a repeated key
    #[error("{0}")]
    MalformedQuery(String),
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::DictionaryUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Word query failed: {}", self);
        } else {
            tracing::debug!("Rejected word query: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
