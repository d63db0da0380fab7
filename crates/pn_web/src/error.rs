use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pn_core::Error;
use serde_json::json;
use tracing::error;

/// Wraps the crate error so handlers can use `?`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::InvalidInput(_) | Error::Serialization(_) => StatusCode::BAD_REQUEST,
            Error::NewsApi(_) | Error::Http(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Model(_) | Error::Io(_) | Error::External(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("❌ {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
