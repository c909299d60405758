//! # API Error Mapping
//!
//! Maps the repository's error taxonomy to HTTP responses. Store failures
//! can be reworded per operation into the user-facing messages the UI shows;
//! everything else surfaces its own description.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use ss_core::{AppError, StoreError};
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// A repository failure, optionally with friendlier wording for the
    /// permission-denied and generic-store-failure cases.
    App {
        inner: AppError,
        denied_msg: Option<&'static str>,
        failed_msg: Option<&'static str>,
    },
    /// The caller presented no identity assertion.
    Unauthenticated(&'static str),
    /// The caller is identified but not allowed to do this.
    Forbidden(&'static str),
}

impl ApiError {
    /// Wraps a repository error with operation-specific wording.
    pub fn reworded(
        inner: AppError,
        denied_msg: &'static str,
        failed_msg: Option<&'static str>,
    ) -> Self {
        ApiError::App { inner, denied_msg: Some(denied_msg), failed_msg }
    }

    fn message(&self) -> String {
        match self {
            ApiError::App { inner, denied_msg, failed_msg } => match inner {
                AppError::Store(StoreError::PermissionDenied(_)) => {
                    denied_msg.unwrap_or("permission denied").to_string()
                }
                AppError::Store(StoreError::Backend(_)) => match failed_msg {
                    Some(msg) => (*msg).to_string(),
                    None => inner.to_string(),
                },
                other => other.to_string(),
            },
            ApiError::Unauthenticated(msg) | ApiError::Forbidden(msg) => (*msg).to_string(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(inner: AppError) -> Self {
        ApiError::App { inner, denied_msg: None, failed_msg: None }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::App { inner, .. } => match inner {
                AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
                AppError::NotFound(_, _) => StatusCode::NOT_FOUND,
                AppError::Store(StoreError::PermissionDenied(_)) => StatusCode::UNAUTHORIZED,
                AppError::Store(StoreError::MissingDocument(_, _)) => StatusCode::NOT_FOUND,
                AppError::Store(StoreError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody { error: self.message() })
    }
}
