use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use porto_service::ServiceError;

/// Application-level error type for HTTP handlers.
///
/// Which status a [`ServiceError`] produces depends on the operation, so the
/// handler picks the variant: mutations wrap failures in
/// [`AppError::Rejected`], reads and deletes in [`AppError::Failed`].
/// Storage failures on create or update therefore surface as 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body or path could not be decoded. 400, empty body.
    #[error("Malformed request: {0}")]
    Decode(String),

    /// A create or update was refused. 400 with the failure text as body.
    #[error(transparent)]
    Rejected(ServiceError),

    /// A read or delete failed. 500, empty body.
    #[error(transparent)]
    Failed(ServiceError),

    /// A page could not be rendered. 500 with the failure text as body.
    #[error("{0}")]
    Render(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Decode(msg) => {
                tracing::warn!(error = %msg, "Rejecting undecodable request");
                StatusCode::BAD_REQUEST.into_response()
            }
            AppError::Rejected(err) => {
                tracing::warn!(error = %err, rejection = err.is_rejection(), "Mutation refused");
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            AppError::Failed(err) => {
                tracing::error!(error = %err, "Service call failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Render(msg) => {
                tracing::error!(error = %msg, "Page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}
