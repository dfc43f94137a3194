// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::website_use_case::WebsiteUseCaseError;
use crate::domain::repositories::website_repository::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 响应体统一为 `{"error": "<message>"}`
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<WebsiteUseCaseError>() {
            return match err {
                WebsiteUseCaseError::ValidationError(_) => StatusCode::BAD_REQUEST,
                WebsiteUseCaseError::NotFound => StatusCode::NOT_FOUND,
                WebsiteUseCaseError::Conflict(_) => StatusCode::CONFLICT,
                WebsiteUseCaseError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Some(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
            Some(RepositoryError::Database(_)) | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
