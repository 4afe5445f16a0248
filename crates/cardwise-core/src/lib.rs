//! CardWise Core Library
//!
//! Shared functionality for the CardWise card recommendation tool:
//! - Domain models (cards, categories, purchase queries)
//! - Merchant text classifier with fixed keyword tables and user rules
//! - Card recommendation engine (reward ranking plus reasoning)
//! - In-memory session card store
//! - Preset card catalog
//!
//! Everything here is synchronous and pure: no storage, no network, no
//! ambient state. Storage and transport live in the CLI and server crates.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod models;
pub mod recommend;
pub mod store;

pub use classify::{
    suggested_amounts, CategoryClassifier, Detection, MerchantRule, PatternType,
};
pub use error::{Error, Result};
pub use models::{
    parse_reward_rate, Card, CardKind, Category, NewCard, PurchaseQuery, DEFAULT_REWARD_RATE,
};
pub use recommend::{Recommendation, RecommendationEngine, RankedResult, BONUS_MULTIPLIER};
pub use store::CardStore;
