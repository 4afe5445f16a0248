//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `cards` - Card wallet commands (list, add, remove, catalog, adopt)
//! - `classify` - Detection commands (detect, suggest, rules)
//! - `recommend` - Recommendation command
//! - `serve` - Web server command

pub mod cards;
pub mod classify;
pub mod recommend;
pub mod serve;

// Re-export command functions for main.rs
pub use cards::*;
pub use classify::*;
pub use recommend::*;
pub use serve::*;

use cardwise_core::Card;

/// One-line card summary for list output
pub fn format_card(card: &Card) -> String {
    let bonus = card
        .bonus_category
        .map(|c| format!(" (bonus: {})", c.label()))
        .unwrap_or_default();
    format!(
        "[{}] {} - {} - {:.1}% {}{}",
        card.id,
        card.name,
        card.bank,
        card.reward_rate,
        card.kind.reward_unit(),
        bonus
    )
}

/// Quick-pick amounts as "$15, $30, ..."
pub fn format_amounts(amounts: &[f64; 4]) -> String {
    amounts
        .iter()
        .map(|a| format!("${:.0}", a))
        .collect::<Vec<_>>()
        .join(", ")
}
