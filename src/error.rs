use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type ResourceResult<T> = Result<T, ResourceError>;

/// Failures of the resource gateway.
///
/// Validation failures are always client-caused and never touch the
/// filesystem. Every read failure collapses into `NotFound` so that a missing
/// file and an unreadable one look the same from outside.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A segment contains a traversal sequence or a separator, is empty, or
    /// is not valid percent-encoded UTF-8
    #[error("Invalid path")]
    InvalidPathSegment,

    /// The filename does not end in `.pdf`
    #[error("Invalid file type")]
    InvalidFileType,

    #[error("File not found")]
    NotFound(#[source] std::io::Error),
}

impl ResourceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::InvalidPathSegment | ResourceError::InvalidFileType => {
                StatusCode::BAD_REQUEST
            }
            ResourceError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Get the client-facing message. Never includes filesystem details.
    pub fn user_message(&self) -> &'static str {
        match self {
            ResourceError::InvalidPathSegment => "Invalid path",
            ResourceError::InvalidFileType => "Invalid file type",
            ResourceError::NotFound(_) => "File not found",
        }
    }

    /// Get error code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ResourceError::InvalidPathSegment => "INVALID_PATH",
            ResourceError::InvalidFileType => "INVALID_FILE_TYPE",
            ResourceError::NotFound(_) => "NOT_FOUND",
        }
    }

    /// Log this error with appropriate level and context.
    ///
    /// Read failures are already logged with their location by the gateway.
    pub fn log(&self) {
        match self {
            ResourceError::NotFound(cause) => {
                tracing::debug!(
                    error = %cause,
                    error_code = %self.error_code(),
                    "Resource not found"
                );
            }
            _ => {
                tracing::debug!(
                    error = %self,
                    error_code = %self.error_code(),
                    "Rejected resource request"
                );
            }
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        self.log();

        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.user_message(),
        )
            .into_response()
    }
}
