//! JSON envelope shared by every API response.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::pagination::Paginated;
use crate::services::ServiceError;

pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const CONFLICT: &str = "CONFLICT";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INVALID_REFERENCE: &str = "INVALID_REFERENCE";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub meta: Option<PageMeta>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    with_status(StatusCode::OK, data)
}

pub fn created<T: Serialize>(data: T) -> HttpResponse {
    with_status(StatusCode::CREATED, data)
}

fn with_status<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse {
        success: true,
        data: Some(data),
        meta: None,
        error: None,
    })
}

/// Successful response without a body payload.
pub fn empty() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()> {
        success: true,
        data: None,
        meta: None,
        error: None,
    })
}

pub fn page<T: Serialize>(page: Paginated<T>) -> HttpResponse {
    let meta = PageMeta {
        page: page.page,
        limit: page.limit,
        total: page.total,
        pages: page.pages,
    };

    HttpResponse::Ok().json(ApiResponse {
        success: true,
        data: Some(page.items),
        meta: Some(meta),
        error: None,
    })
}

pub fn error(status: StatusCode, code: &'static str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()> {
        success: false,
        data: None,
        meta: None,
        error: Some(ApiError {
            code,
            message: message.into(),
        }),
    })
}

/// Translate a service failure; `action` names the operation in the log line.
pub fn service_error(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => error(
            StatusCode::UNAUTHORIZED,
            UNAUTHORIZED,
            "acting user may not perform this operation",
        ),
        ServiceError::NotFound => error(StatusCode::NOT_FOUND, NOT_FOUND, "resource not found"),
        ServiceError::Conflict(message) => error(StatusCode::CONFLICT, CONFLICT, message),
        ServiceError::Form(message) => {
            error(StatusCode::UNPROCESSABLE_ENTITY, VALIDATION_ERROR, message)
        }
        ServiceError::InvalidReference(message) => {
            error(StatusCode::UNPROCESSABLE_ENTITY, INVALID_REFERENCE, message)
        }
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR,
                "internal server error",
            )
        }
    }
}

fn payload_error<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let response = error(
        StatusCode::UNPROCESSABLE_ENTITY,
        VALIDATION_ERROR,
        err.to_string(),
    );
    InternalError::from_response(err, response).into()
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    payload_error(err)
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    payload_error(err)
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    let response = error(StatusCode::NOT_FOUND, NOT_FOUND, message);
    InternalError::from_response(err, response).into()
}
