//! Preset card catalog
//!
//! A fixed list of representative cards for quick wallet setup, mirrored by
//! the CLI's `cards catalog` / `cards adopt` and the API's `/api/catalog`.
//! Rates and bonus tiers are illustrative defaults the user can edit.

use crate::models::{CardKind, Category, NewCard};

/// The preset catalog, in display order
pub fn preset_cards() -> Vec<NewCard> {
    vec![
        NewCard {
            name: "Everyday Cash".to_string(),
            bank: "Harbor Bank".to_string(),
            reward_rate: 2.0,
            bonus_category: None,
            kind: CardKind::Cashback,
        },
        NewCard {
            name: "Dining Rewards Plus".to_string(),
            bank: "First National".to_string(),
            reward_rate: 1.5,
            bonus_category: Some(Category::Dining),
            kind: CardKind::Points,
        },
        NewCard {
            name: "Roadtrip Fuel Card".to_string(),
            bank: "Harbor Bank".to_string(),
            reward_rate: 1.0,
            bonus_category: Some(Category::Gas),
            kind: CardKind::Cashback,
        },
        NewCard {
            name: "Wanderer Travel Elite".to_string(),
            bank: "Meridian Trust".to_string(),
            reward_rate: 2.0,
            bonus_category: Some(Category::Travel),
            kind: CardKind::Travel,
        },
        NewCard {
            name: "Homefront Grocery".to_string(),
            bank: "First National".to_string(),
            reward_rate: 1.0,
            bonus_category: Some(Category::Groceries),
            kind: CardKind::Cashback,
        },
        NewCard {
            name: "Cart Smart Online".to_string(),
            bank: "Meridian Trust".to_string(),
            reward_rate: 1.0,
            bonus_category: Some(Category::Online),
            kind: CardKind::Cashback,
        },
        NewCard {
            name: "Launchpad Business".to_string(),
            bank: "Harbor Bank".to_string(),
            reward_rate: 1.5,
            bonus_category: None,
            kind: CardKind::Business,
        },
    ]
}
