use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::{auth::AuthError, storage::StorageError, CmsError};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Unauthorized: {0}")]
    Unauthorized(AuthError),
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("Forbidden: `{0}`")]
    Forbidden(String),
    #[error("Conflict: `{0}`")]
    Conflict(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("DBError: `{0}`")]
    StorageError(StorageError),
}

impl From<AuthError> for WebError {
    fn from(e: AuthError) -> Self {
        WebError::Unauthorized(e)
    }
}

impl From<StorageError> for WebError {
    fn from(e: StorageError) -> Self {
        if e.is_unique_violation() {
            return WebError::Conflict(e.to_string());
        }
        match e {
            StorageError::EntityNotFound(msg) => WebError::NotFound(msg),
            StorageError::InvalidArgument(msg) => WebError::BadRequest(msg),
            other => WebError::StorageError(other),
        }
    }
}

impl From<sea_orm::DbErr> for WebError {
    fn from(e: sea_orm::DbErr) -> Self {
        WebError::from(StorageError::DBError(e))
    }
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<CmsError> for WebError {
    fn from(e: CmsError) -> Self {
        match e {
            CmsError::StorageError(e) => WebError::from(e),
            CmsError::WebError(e) => e,
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.to_string()
        });
        match self {
            WebError::Unauthorized(reason) => {
                body["error"] = json!("Unauthorized");
                body["reason"] = json!(reason.code());
                HttpResponse::Unauthorized().json(body)
            }
            WebError::BadRequest(_) => {
                body["error"] = json!("Bad Request");
                HttpResponse::BadRequest().json(body)
            }
            WebError::NotFound(_) => {
                body["error"] = json!("Not Found");
                HttpResponse::NotFound().json(body)
            }
            WebError::Forbidden(_) => {
                body["error"] = json!("Forbidden");
                HttpResponse::Forbidden().json(body)
            }
            WebError::Conflict(_) => {
                body["error"] = json!("Conflict");
                HttpResponse::Conflict().json(body)
            }
            WebError::InternalError(_) => {
                body["error"] = json!("Internal Server Error");
                HttpResponse::InternalServerError().json(body)
            }
            WebError::StorageError(_) => {
                body["error"] = json!("Storage Error");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}
