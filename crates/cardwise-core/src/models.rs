//! Domain models for CardWise

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback base reward percentage when a card's rate is missing or
/// unparseable. Upstream card data is user-entered free text, so malformed
/// rates degrade to this default instead of erroring.
pub const DEFAULT_REWARD_RATE: f64 = 1.0;

/// A user-owned credit card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub name: String,
    pub bank: String,
    /// Base reward percentage (2.0 = 2%)
    pub reward_rate: f64,
    /// Purchases in this category earn the bonus multiplier
    pub bonus_category: Option<Category>,
    pub kind: CardKind,
    pub created_at: DateTime<Utc>,
}

/// A new card to be added to the wallet (before id assignment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCard {
    pub name: String,
    pub bank: String,
    pub reward_rate: f64,
    pub bonus_category: Option<Category>,
    pub kind: CardKind,
}

/// Reward unit kind - affects display labels only, never scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    #[default]
    Cashback,
    Points,
    Travel,
    BalanceTransfer,
    Business,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cashback => "cashback",
            Self::Points => "points",
            Self::Travel => "travel",
            Self::BalanceTransfer => "balance-transfer",
            Self::Business => "business",
        }
    }

    /// Human label for the reward unit, used in explanations
    pub fn reward_unit(&self) -> &'static str {
        match self {
            Self::Cashback => "cash back",
            Self::Points => "points",
            Self::Travel => "travel rewards",
            Self::BalanceTransfer => "rewards",
            Self::Business => "business rewards",
        }
    }
}

impl std::str::FromStr for CardKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cashback" | "cash-back" => Ok(Self::Cashback),
            "points" => Ok(Self::Points),
            "travel" => Ok(Self::Travel),
            "balance-transfer" | "balance_transfer" => Ok(Self::BalanceTransfer),
            "business" => Ok(Self::Business),
            _ => Err(format!("Unknown card kind: {}", s)),
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spending categories
///
/// "No category detected" is represented as `Option<Category>::None` by the
/// classifier, never as a variant. General has no detection keywords and is
/// only ever chosen explicitly (or as a bonus tag on a card).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dining,
    Gas,
    Groceries,
    Travel,
    Online,
    Streaming,
    General,
}

impl Category {
    /// All categories, in classifier table order
    pub const ALL: [Category; 7] = [
        Category::Dining,
        Category::Gas,
        Category::Groceries,
        Category::Travel,
        Category::Online,
        Category::Streaming,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dining => "dining",
            Self::Gas => "gas",
            Self::Groceries => "groceries",
            Self::Travel => "travel",
            Self::Online => "online",
            Self::Streaming => "streaming",
            Self::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dining => "Dining",
            Self::Gas => "Gas",
            Self::Groceries => "Groceries",
            Self::Travel => "Travel",
            Self::Online => "Online Shopping",
            Self::Streaming => "Streaming",
            Self::General => "General",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dining" => Ok(Self::Dining),
            "gas" => Ok(Self::Gas),
            "groceries" => Ok(Self::Groceries),
            "travel" => Ok(Self::Travel),
            "online" => Ok(Self::Online),
            "streaming" => Ok(Self::Streaming),
            "general" => Ok(Self::General),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchase to get a recommendation for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseQuery {
    /// Purchase amount in currency units (must be positive)
    pub amount: f64,
    pub category: Category,
    /// Free-text merchant input, used only for classification and reasoning
    pub merchant_text: Option<String>,
}

/// Parse a user-entered reward rate, substituting [`DEFAULT_REWARD_RATE`]
/// for missing, unparseable, negative, or non-finite input.
///
/// Card data enters as free text, so this never errors.
pub fn parse_reward_rate(raw: Option<&str>) -> f64 {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => match s.parse::<f64>() {
            Ok(rate) if rate.is_finite() && rate >= 0.0 => rate,
            _ => {
                tracing::warn!(input = s, "Unparseable reward rate, using default");
                DEFAULT_REWARD_RATE
            }
        },
        None => DEFAULT_REWARD_RATE,
    }
}
