use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::services::values::ValuesError;
use thiserror::Error;
use utils::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Values(#[from] ValuesError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_type) = match &self {
            ApiError::Values(_) => (StatusCode::INTERNAL_SERVER_ERROR, "StorageFault"),
        };

        let error_message = format!("{}: {}", error_type, self);
        tracing::error!("{}", error_message);
        let response = ApiResponse::<()>::error(&error_message);
        (status_code, Json(response)).into_response()
    }
}
