//! Recommendation handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState};
use cardwise_core::{Category, Error, PurchaseQuery, Recommendation};

/// Recommendation request. When `category` is omitted it is detected from
/// `merchant`; failing that the request is rejected so the client can ask
/// the user to pick manually.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub amount: f64,
    pub category: Option<String>,
    pub merchant: Option<String>,
}

/// POST /api/recommend - Rank owned cards for a purchase
pub async fn recommend_card(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Recommendation>, AppError> {
    let merchant = request
        .merchant
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let category = match request.category.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw
            .parse::<Category>()
            .map_err(|e| AppError::bad_request(&e))?,
        _ => match merchant {
            Some(text) => state.classifier.detect_category(text).ok_or_else(|| {
                AppError::bad_request(&format!(
                    "No category detected for '{}' - select a category manually",
                    text
                ))
            })?,
            None => {
                return Err(AppError::bad_request(
                    "Provide a category or merchant text",
                ))
            }
        },
    };

    let query = PurchaseQuery {
        amount: request.amount,
        category,
        merchant_text: merchant.map(str::to_string),
    };

    let store = state.store.read().unwrap();
    match state.engine.recommend(&query, store.list()) {
        Ok(recommendation) => Ok(Json(recommendation)),
        Err(Error::NoCards) => Err(AppError::conflict(
            "No cards in the wallet - add a card before requesting a recommendation",
        )),
        Err(err @ Error::InvalidAmount(_)) => Err(AppError::bad_request(&err.to_string())),
        Err(err) => Err(err.into()),
    }
}
