//! In-memory session card store
//!
//! The engine's "source of Card records" collaborator: holds the cards a
//! user owns for the duration of a session and assigns stable ids. There is
//! no persistence here; owners that want durability (the CLI's wallet file)
//! serialize the card list themselves.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::{Card, NewCard};

/// Session collection of owned cards, in insertion order
#[derive(Debug, Default, Clone)]
pub struct CardStore {
    cards: Vec<Card>,
    next_id: i64,
}

impl CardStore {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            next_id: 1,
        }
    }

    /// Restore a store from previously saved cards, keeping their ids
    pub fn with_cards(cards: Vec<Card>) -> Self {
        let next_id = cards.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self { cards, next_id }
    }

    /// Add a card, assigning the next session id
    pub fn add(&mut self, new: NewCard) -> Card {
        let card = Card {
            id: self.next_id,
            name: new.name,
            bank: new.bank,
            reward_rate: new.reward_rate,
            bonus_category: new.bonus_category,
            kind: new.kind,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.cards.push(card.clone());
        card
    }

    /// Owned cards in insertion order. Feeding this straight into
    /// `RecommendationEngine::rank` makes tie stability match wallet order.
    pub fn list(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: i64) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Remove a card by id, returning it
    pub fn remove(&mut self, id: i64) -> Result<Card> {
        match self.cards.iter().position(|c| c.id == id) {
            Some(index) => Ok(self.cards.remove(index)),
            None => Err(Error::NotFound(format!("No card with id {}", id))),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
