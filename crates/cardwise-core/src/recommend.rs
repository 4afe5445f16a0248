//! Card recommendation engine
//!
//! Ranks a user's owned cards by expected reward for a purchase and
//! generates a one-line justification for the top pick. Pure and
//! deterministic: no hidden state, no randomness, no I/O.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Card, Category, PurchaseQuery, DEFAULT_REWARD_RATE};

/// Multiplier applied to a card's base rate when the purchase category
/// matches its bonus category. A product heuristic, not scraped from real
/// card terms.
pub const BONUS_MULTIPLIER: f64 = 2.5;

/// A card annotated with its computed reward for one purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub card: Card,
    /// Effective rate used, after any bonus multiplier
    pub reward_rate: f64,
    /// Computed payout, kept at full precision; callers round for display
    pub reward_amount: f64,
    pub bonus_applied: bool,
}

/// Ranked results plus the justification for the top pick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub results: Vec<RankedResult>,
    pub reasoning: String,
}

/// Reward ranking engine over plain card data
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Rank `cards` best-first by expected reward for a purchase.
    ///
    /// The sort is stable: cards with equal rewards keep their input order,
    /// so callers feeding wallet order see wallet order on ties. Fails fast
    /// on an empty card list or a non-positive amount rather than returning
    /// an empty result.
    pub fn rank(
        &self,
        amount: f64,
        category: Category,
        cards: &[Card],
    ) -> Result<Vec<RankedResult>> {
        if cards.is_empty() {
            return Err(Error::NoCards);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        let mut results: Vec<RankedResult> = cards
            .iter()
            .map(|card| {
                let base = if card.reward_rate.is_finite() && card.reward_rate >= 0.0 {
                    card.reward_rate
                } else {
                    warn!(card = %card.name, rate = card.reward_rate, "Malformed reward rate, using default");
                    DEFAULT_REWARD_RATE
                };

                let bonus_applied = card.bonus_category == Some(category);
                let reward_rate = if bonus_applied {
                    base * BONUS_MULTIPLIER
                } else {
                    base
                };

                RankedResult {
                    reward_rate,
                    reward_amount: amount * reward_rate / 100.0,
                    bonus_applied,
                    card: card.clone(),
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.reward_amount
                .partial_cmp(&a.reward_amount)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            amount,
            category = %category,
            top = %results[0].card.name,
            "Ranked {} cards",
            results.len()
        );

        Ok(results)
    }

    /// One-line justification for a top-ranked result.
    ///
    /// Pure string templating over its inputs; supplying the same arguments
    /// always yields the same text.
    pub fn explain(
        &self,
        top: &RankedResult,
        category: Category,
        merchant_text: Option<&str>,
    ) -> String {
        let mut reason = if top.bonus_applied {
            format!(
                "{} offers a {}x bonus on {} purchases, earning an effective {:.1}% in {}",
                top.card.name,
                BONUS_MULTIPLIER,
                category.label(),
                top.reward_rate,
                top.card.kind.reward_unit()
            )
        } else {
            format!(
                "{} has the highest base reward rate ({:.1}% in {}) among your cards",
                top.card.name,
                top.reward_rate,
                top.card.kind.reward_unit()
            )
        };

        if let Some(merchant) = merchant_text.map(str::trim).filter(|m| !m.is_empty()) {
            reason.push_str(&format!(" for this purchase at {}", merchant));
        }

        reason
    }

    /// Rank plus reasoning for one purchase query
    pub fn recommend(&self, query: &PurchaseQuery, cards: &[Card]) -> Result<Recommendation> {
        let results = self.rank(query.amount, query.category, cards)?;
        let top = results.first().ok_or(Error::NoCards)?;
        let reasoning = self.explain(top, query.category, query.merchant_text.as_deref());

        Ok(Recommendation { reasoning, results })
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
