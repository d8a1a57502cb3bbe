//! Unified error handling for the persistence services.
//!
//! Provides a single application error type that validation, image
//! normalization, and storage failures all funnel into, so callers see one
//! `AppResult` surface.

use domain::{DomainError, FieldErrors};
use thiserror::Error;

/// Image normalization failures, classified by stage.
///
/// The decode path distinguishes data that is not an image at all from a
/// recognized container that fails to decode, so callers can report the
/// difference instead of receiving a raw decoder failure.
#[derive(Error, Debug, Clone)]
pub enum MediaError {
    /// The bytes are neither a known raster format nor a still-photo container
    #[error("Unrecognized image data: {0}")]
    UnrecognizedFormat(String),

    /// A recognized still-photo container but no fallback decoder is available
    #[error("Unsupported image container: {0}")]
    UnsupportedContainer(String),

    /// A recognized container whose payload fails to decode
    #[error("Corrupt image data: {0}")]
    CorruptImage(String),

    /// Decoded fine but could not be re-encoded
    #[error("Image encoding failed: {0}")]
    Encode(String),
}

/// Application error types with support for every persist-path failure.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    // Image normalization
    #[error(transparent)]
    Media(#[from] MediaError),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Media(_) => "MEDIA_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(errors) => errors.to_string(),
            AppError::Conflict(msg) => {
                if msg.ends_with("already exists") {
                    msg.clone()
                } else {
                    format!("{} already exists", msg)
                }
            }
            AppError::Media(err) => err.to_string(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::NotFound(_) => AppError::NotFound,
            DomainError::Conflict(msg) => AppError::Conflict(msg),
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("code", "Country code must be 5 characters or less.");
        let err = AppError::from(errors);

        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(
            err.user_message(),
            "code: Country code must be 5 characters or less."
        );
    }

    #[test]
    fn test_media_error_keeps_classification() {
        let err = AppError::from(MediaError::UnrecognizedFormat("not an image".to_string()));
        assert_eq!(err.code(), "MEDIA_ERROR");
        assert!(matches!(
            err,
            AppError::Media(MediaError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("connection pool exhausted");
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
