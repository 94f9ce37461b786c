use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use kingdom_catalog::{Bundle, CatalogItem, Catalogs};
use kingdom_order::{OrderPricingCalculator, Quote, SelectionState};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub selection: SelectionState,
}

#[derive(Debug, Deserialize)]
pub struct SelectionMutationRequest {
    #[serde(default)]
    pub selection: SelectionState,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub selection: SelectionState,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct BundleResponse {
    #[serde(flatten)]
    pub bundle: Bundle,
    /// Member bots that exist in the item catalog
    pub items: Vec<CatalogItem>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/catalog", get(get_catalog))
        .route("/v1/catalog/bundles/{id}", get(get_bundle))
        .route("/v1/selection/items/toggle", post(toggle_item))
        .route("/v1/selection/add-ons/toggle", post(toggle_add_on))
        .route("/v1/selection/bundle", post(select_bundle))
        .route("/v1/selection/clear", post(clear_selection))
        .route("/v1/quote", post(quote))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/catalog
async fn get_catalog(State(state): State<AppState>) -> Json<Catalogs> {
    Json(state.catalogs.as_ref().clone())
}

/// GET /v1/catalog/bundles/{id}
async fn get_bundle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BundleResponse>, AppError> {
    let bundle = state
        .catalogs
        .bundle(&id)
        .ok_or_else(|| AppError::NotFoundError(format!("Bundle not found: {}", id)))?;

    let items = bundle
        .member_item_ids
        .iter()
        .filter_map(|member| state.catalogs.item(member))
        .cloned()
        .collect();

    Ok(Json(BundleResponse {
        bundle: bundle.clone(),
        items,
    }))
}

/// POST /v1/selection/items/toggle
async fn toggle_item(
    State(state): State<AppState>,
    Json(req): Json<SelectionMutationRequest>,
) -> Json<SelectionResponse> {
    let mut selection = req.selection;
    selection.toggle_item(&req.id);
    respond(&state, selection)
}

/// POST /v1/selection/add-ons/toggle
async fn toggle_add_on(
    State(state): State<AppState>,
    Json(req): Json<SelectionMutationRequest>,
) -> Json<SelectionResponse> {
    let mut selection = req.selection;
    selection.toggle_add_on(&req.id);
    respond(&state, selection)
}

/// POST /v1/selection/bundle
/// Replaces any individually chosen bots with the bundle's members
async fn select_bundle(
    State(state): State<AppState>,
    Json(req): Json<SelectionMutationRequest>,
) -> Json<SelectionResponse> {
    let mut selection = req.selection;
    selection.select_bundle(&req.id, &state.catalogs);
    respond(&state, selection)
}

/// POST /v1/selection/clear
async fn clear_selection(
    State(state): State<AppState>,
    Json(req): Json<SelectionRequest>,
) -> Json<SelectionResponse> {
    let mut selection = req.selection;
    selection.clear();
    respond(&state, selection)
}

/// POST /v1/quote
async fn quote(
    State(state): State<AppState>,
    Json(req): Json<SelectionRequest>,
) -> Json<Quote> {
    Json(OrderPricingCalculator::new(&state.catalogs).quote(&req.selection))
}

fn respond(state: &AppState, selection: SelectionState) -> Json<SelectionResponse> {
    let total = OrderPricingCalculator::new(&state.catalogs).compute_total(&selection);
    Json(SelectionResponse { selection, total })
}
