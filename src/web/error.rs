use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::database::RegistryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Query parameter 'email' is required")]
    MissingEmail,

    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),

    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Path(rejection) => rejection.status(),
            AppError::Query(rejection) => rejection.status(),
            AppError::Registry(RegistryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Registry(
                RegistryError::AlreadyRegistered { .. }
                | RegistryError::CapacityExceeded { .. }
                | RegistryError::NotRegistered { .. },
            ) => StatusCode::BAD_REQUEST,
            AppError::Registry(RegistryError::InvalidSeed { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
