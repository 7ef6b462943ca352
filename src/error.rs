use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Generic message returned on any 500; the real cause only goes to the log.
const INTERNAL_MESSAGE: &str = "Terjadi kesalahan pada server";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Database error")]
    Db(#[from] sea_orm::DbErr),

    #[error("Serialization error")]
    Serde(#[from] serde_json::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Db(err) => {
                tracing::error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
            AppError::Serde(err) => {
                tracing::error!(error = %err, "serialization error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
        };

        let body = ErrorBody { error: message };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_rule_message() {
        let response = AppError::Validation("Format email tidak valid".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Format email tidak valid");
    }

    #[tokio::test]
    async fn internal_errors_map_to_500_with_generic_message() {
        let response =
            AppError::Internal(anyhow::anyhow!("connection pool exhausted")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
