use actix_web::HttpResponse;
use diesel::result::DatabaseErrorKind;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown {field}")]
    ConstraintViolation { field: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::InvalidInput(msg) => AppError::InvalidInput(msg),
            DomainError::ConstraintViolation { field } => AppError::ConstraintViolation { field },
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::NotFound => AppError::NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                let field = info
                    .column_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        field_from_constraint(
                            info.constraint_name().unwrap_or("foreign key"),
                            info.table_name(),
                        )
                    });
                AppError::ConstraintViolation { field }
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Name the offending column from the violated constraint's structured
/// metadata: Postgres names FK constraints `<table>_<column>_fkey`, so
/// `products_seller_id_fkey` on table `products` yields `seller_id`.
/// Only constraint/table identifiers are used, never the message text.
fn field_from_constraint(constraint: &str, table: Option<&str>) -> String {
    let mut field = constraint.strip_suffix("_fkey").unwrap_or(constraint);
    if let Some(rest) = table
        .and_then(|t| field.strip_prefix(t))
        .and_then(|r| r.strip_prefix('_'))
    {
        field = rest;
    }
    field.to_string()
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::InvalidInput(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::ConstraintViolation { field } => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": self.to_string(),
                    "field": field
                }))
            }
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}
