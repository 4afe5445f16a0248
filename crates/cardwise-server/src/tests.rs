//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use cardwise_core::models::{CardKind, Category, NewCard};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn seeded_store() -> CardStore {
    let mut store = CardStore::new();
    store.add(NewCard {
        name: "Card A".to_string(),
        bank: "Harbor Bank".to_string(),
        reward_rate: 1.0,
        bonus_category: Some(Category::Dining),
        kind: CardKind::Cashback,
    });
    store.add(NewCard {
        name: "Card B".to_string(),
        bank: "First National".to_string(),
        reward_rate: 2.0,
        bonus_category: Some(Category::General),
        kind: CardKind::Points,
    });
    store
}

fn setup_test_app() -> Router {
    create_router(
        seeded_store(),
        CategoryClassifier::new(),
        None,
        ServerConfig::default(),
    )
}

fn empty_app() -> Router {
    create_router(
        CardStore::new(),
        CategoryClassifier::new(),
        None,
        ServerConfig::default(),
    )
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[test]
fn test_parse_allowed_origins() {
    assert!(parse_allowed_origins("").is_empty());
    assert_eq!(
        parse_allowed_origins("https://a.example, https://b.example ,"),
        vec!["https://a.example".to_string(), "https://b.example".to_string()]
    );
}

// ========== Card API Tests ==========

#[tokio::test]
async fn test_list_cards() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cards")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let cards = json.as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["name"], "Card A");
    assert_eq!(cards[1]["bonus_category"], "general");
}

#[tokio::test]
async fn test_create_card() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "name": "Wanderer Travel Elite",
        "bank": "Meridian Trust",
        "reward_rate": "3.0",
        "bonus_category": "travel",
        "kind": "travel"
    });

    let response = app.oneshot(post_json("/api/cards", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["name"], "Wanderer Travel Elite");
    assert_eq!(json["reward_rate"], 3.0);
    assert_eq!(json["bonus_category"], "travel");
    assert_eq!(json["id"], 3);
}

#[tokio::test]
async fn test_create_card_malformed_rate_defaults() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "name": "Mystery Card",
        "bank": "Harbor Bank",
        "reward_rate": "two percent"
    });

    let response = app.oneshot(post_json("/api/cards", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["reward_rate"], 1.0);
    assert_eq!(json["kind"], "cashback");
    assert!(json["bonus_category"].is_null());
}

#[tokio::test]
async fn test_create_card_rejects_unknown_bonus() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "name": "Bad Bonus",
        "bank": "Harbor Bank",
        "bonus_category": "petcare"
    });

    let response = app.oneshot(post_json("/api/cards", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_card_requires_name() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "name": "   ",
        "bank": "Harbor Bank"
    });

    let response = app.oneshot(post_json("/api/cards", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_card_not_found() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cards/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_card() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/cards/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["success"], true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cards")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_catalog() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert!(!json.as_array().unwrap().is_empty());
}

// ========== Category & Classification Tests ==========

#[tokio::test]
async fn test_list_categories() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let categories = json.as_array().unwrap();
    assert_eq!(categories.len(), 7);

    let travel = categories
        .iter()
        .find(|c| c["value"] == "travel")
        .unwrap();
    assert_eq!(
        travel["suggested_amounts"],
        serde_json::json!([100.0, 200.0, 500.0, 1000.0])
    );
}

#[tokio::test]
async fn test_classify_merchant() {
    let app = setup_test_app();

    let body = serde_json::json!({ "input": "Starbucks Coffee #4521" });
    let response = app.oneshot(post_json("/api/classify", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["category"], "dining");
    assert!(json["confidence"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_classify_unknown_merchant() {
    let app = setup_test_app();

    let body = serde_json::json!({ "input": "zxqvy 123" });
    let response = app.oneshot(post_json("/api/classify", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json["category"].is_null());
    assert_eq!(json["confidence"], 0.0);
}

// ========== Recommendation Tests ==========

#[tokio::test]
async fn test_recommend_prefers_bonus_card() {
    let app = setup_test_app();

    let body = serde_json::json!({ "amount": 100.0, "category": "dining" });
    let response = app
        .oneshot(post_json("/api/recommend", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["card"]["name"], "Card A");
    assert_eq!(results[0]["reward_amount"], 2.5);
    assert_eq!(results[0]["bonus_applied"], true);
    assert_eq!(results[1]["card"]["name"], "Card B");
    assert_eq!(results[1]["reward_amount"], 2.0);
    assert!(json["reasoning"].as_str().unwrap().contains("Card A"));
}

#[tokio::test]
async fn test_recommend_detects_category_from_merchant() {
    let app = setup_test_app();

    let body = serde_json::json!({ "amount": 50.0, "merchant": "Starbucks Coffee" });
    let response = app
        .oneshot(post_json("/api/recommend", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["results"][0]["card"]["name"], "Card A");
    assert!(json["reasoning"]
        .as_str()
        .unwrap()
        .contains("Starbucks Coffee"));
}

#[tokio::test]
async fn test_recommend_undetectable_merchant_is_rejected() {
    let app = setup_test_app();

    let body = serde_json::json!({ "amount": 50.0, "merchant": "zxqvy 123" });
    let response = app
        .oneshot(post_json("/api/recommend", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_requires_category_or_merchant() {
    let app = setup_test_app();

    let body = serde_json::json!({ "amount": 50.0 });
    let response = app
        .oneshot(post_json("/api/recommend", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_unknown_category_is_rejected() {
    let app = setup_test_app();

    let body = serde_json::json!({ "amount": 50.0, "category": "petcare" });
    let response = app
        .oneshot(post_json("/api/recommend", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_rejects_non_positive_amount() {
    let app = setup_test_app();

    let body = serde_json::json!({ "amount": 0.0, "category": "dining" });
    let response = app
        .oneshot(post_json("/api/recommend", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recommend_with_empty_wallet_conflicts() {
    let app = empty_app();

    let body = serde_json::json!({ "amount": 50.0, "category": "dining" });
    let response = app
        .oneshot(post_json("/api/recommend", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
