use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Every storage failure collapses into this variant: connect, lookup,
    /// insert, begin and commit alike.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The request body could not be extracted; keeps the extractor's status.
    #[error("Rejected request: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Rejected { status, .. } => *status,
            Self::Database(_) | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            // Ingestion already logged the failing stage at error level.
            Self::Database(ref e) => {
                tracing::debug!("Database error: {}", e);
                "Database error"
            }
            Self::NotFound(ref msg) => msg.as_str(),
            Self::Rejected { ref message, .. } => message.as_str(),
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {}", e);
                "An unexpected error occurred"
            }
        };

        // Causes stay in the log; clients only ever see the short message.
        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Renders the response with an info-level subscriber and returns what it logged.
    fn logged_at_info(err: AppError) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = err.into_response();
        });

        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_database_error_is_generic() {
        let err = AppError::from(sea_orm::DbErr::Custom("table reviews is locked".into()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Database error" }));
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("Artist not found".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Artist not found");
    }

    #[tokio::test]
    async fn test_other_error_hides_cause() {
        let response = AppError::from(anyhow::anyhow!("secret detail")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "An unexpected error occurred");
    }

    #[test]
    fn test_database_error_is_not_logged_again_at_error_level() {
        let logged = logged_at_info(AppError::from(sea_orm::DbErr::Custom("boom".into())));
        assert!(logged.is_empty(), "unexpected log output: {logged}");
    }

    #[test]
    fn test_other_error_is_logged() {
        let logged = logged_at_info(AppError::from(anyhow::anyhow!("secret detail")));
        assert!(logged.contains("secret detail"), "{logged}");
    }

    #[tokio::test]
    async fn test_rejection_keeps_status_and_uses_json_shape() {
        let response = AppError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `artist_name`".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "missing field `artist_name`" }));
    }
}
