use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use kingdom_order::{CheckoutOutcome, SelectionState};
use kingdom_shared::Masked;
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub selection: SelectionState,
    /// Prefilled on the hosted checkout form
    pub customer_email: Option<Masked<String>>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/checkout", post(checkout))
}

/// POST /v1/checkout
/// Opens a hosted checkout for the selection's total and returns a cleared selection
async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutOutcome>, AppError> {
    let outcome = state
        .checkout
        .submit(&req.selection, &state.catalogs, req.customer_email)
        .await
        .map_err(AppError::from_checkout)?;

    tracing::info!(event = ?outcome.event, "checkout requested");

    Ok(Json(outcome))
}
