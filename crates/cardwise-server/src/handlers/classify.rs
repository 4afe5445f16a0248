//! Classification and category handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;
use cardwise_core::{suggested_amounts, Category, Detection};

/// Classification request
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub input: String,
}

/// Category info for UI pickers
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub suggested_amounts: [f64; 4],
}

/// GET /api/categories - All categories with labels and quick-pick amounts
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    let categories = Category::ALL
        .iter()
        .map(|category| CategoryInfo {
            value: category.as_str(),
            label: category.label(),
            suggested_amounts: suggested_amounts(*category),
        })
        .collect();
    Json(categories)
}

/// POST /api/classify - Detect a category from merchant text
///
/// Always succeeds: unmatched input returns a null category for the client
/// to fall back to manual selection.
pub async fn classify_merchant(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClassifyRequest>,
) -> Json<Detection> {
    Json(state.classifier.detect(&request.input))
}
