//! Card and catalog handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState, SuccessResponse};
use cardwise_core::{catalog, models::parse_reward_rate, Card, CardKind, Category, NewCard};

/// Card creation request. Rate, bonus, and kind arrive as the free text the
/// UI collected; the rate degrades to the default on malformed input while
/// bonus/kind are rejected with a 400.
#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub name: String,
    pub bank: String,
    pub reward_rate: Option<String>,
    pub bonus_category: Option<String>,
    pub kind: Option<String>,
}

/// GET /api/cards - List owned cards
pub async fn list_cards(State(state): State<Arc<AppState>>) -> Json<Vec<Card>> {
    let store = state.store.read().unwrap();
    Json(store.list().to_vec())
}

/// POST /api/cards - Add a card to the wallet
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCardRequest>,
) -> Result<Json<Card>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Card name is required"));
    }
    let bank = request.bank.trim();
    if bank.is_empty() {
        return Err(AppError::bad_request("Bank name is required"));
    }

    let bonus_category = match request.bonus_category.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(
            raw.parse::<Category>()
                .map_err(|e| AppError::bad_request(&e))?,
        ),
        _ => None,
    };

    let kind = match request.kind.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw
            .parse::<CardKind>()
            .map_err(|e| AppError::bad_request(&e))?,
        _ => CardKind::default(),
    };

    let new_card = NewCard {
        name: name.to_string(),
        bank: bank.to_string(),
        reward_rate: parse_reward_rate(request.reward_rate.as_deref()),
        bonus_category,
        kind,
    };

    let mut store = state.store.write().unwrap();
    Ok(Json(store.add(new_card)))
}

/// GET /api/cards/:id - Get a single card
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Card>, AppError> {
    let store = state.store.read().unwrap();
    store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("Card not found"))
}

/// DELETE /api/cards/:id - Remove a card from the wallet
pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut store = state.store.write().unwrap();
    store
        .remove(id)
        .map_err(|_| AppError::not_found("Card not found"))?;
    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/catalog - Preset card catalog
pub async fn list_catalog() -> Json<Vec<NewCard>> {
    Json(catalog::preset_cards())
}
