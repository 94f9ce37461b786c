use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kingdom_order::CheckoutError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    PaymentProviderError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn from_checkout(err: CheckoutError) -> Self {
        match err {
            CheckoutError::EmptyOrder => AppError::ValidationError(err.to_string()),
            CheckoutError::Payment(_) => AppError::PaymentProviderError(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::PaymentProviderError(msg) => {
                tracing::error!("Payment provider failure: {}", msg);
                (StatusCode::BAD_GATEWAY, "Payment provider unavailable".to_string())
            },
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
