use std::collections::BTreeMap;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// Record `message` against `field` when a validator reported a problem.
    pub fn check(&mut self, field: &str, message: Option<String>) {
        if let Some(m) = message {
            self.add(field, m);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() { Ok(()) } else { Err(AppError::Validation(self)) }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Hash error: {0}")]
    Hash(String),
    #[error("Session error: {0}")]
    Session(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Validation failed")]
    Validation(FieldErrors),
    #[error("Not authenticated")]
    Unauthorized,
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a single-field validation failure.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        AppError::Validation(errors)
    }
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    message: &'static str,
    errors: &'a FieldErrors,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::Validation(errors) => HttpResponse::build(status).json(ValidationBody {
                message: "The given data was invalid.",
                errors,
            }),
            _ => {
                if status.is_server_error() {
                    log::error!("{self}");
                }
                HttpResponse::build(status).json(serde_json::json!({ "error": self.to_string() }))
            }
        }
    }
}
