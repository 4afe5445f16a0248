//! Merchant text classification
//!
//! Maps free-text merchant/location input to a spending category using fixed
//! keyword tables, with user-defined merchant rules layered on top. No
//! network calls; every input string (including empty) produces a defined
//! result.
//!
//! Match order: user rules, then location phrases, then per-category
//! keywords. Within each table the first hit wins; table iteration order is
//! part of the contract and pinned by tests.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::Category;

/// Location phrases checked before the keyword tables.
const LOCATION_PHRASES: &[(&str, Category)] = &[
    ("restaurant", Category::Dining),
    ("cafe", Category::Dining),
    ("gas station", Category::Gas),
    ("grocery store", Category::Groceries),
    ("hotel", Category::Travel),
    ("airport", Category::Travel),
];

/// Per-category keyword tables, in detection order. General has no keywords
/// and is never auto-detected.
const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Dining,
        &[
            "restaurant",
            "cafe",
            "coffee",
            "starbucks",
            "mcdonald",
            "pizza",
            "sushi",
            "burger",
            "diner",
            "bakery",
            "bar",
        ],
    ),
    (
        Category::Gas,
        &["gas", "fuel", "shell", "chevron", "exxon", "bp", "station"],
    ),
    (
        Category::Groceries,
        &[
            "grocery",
            "supermarket",
            "market",
            "walmart",
            "costco",
            "kroger",
            "safeway",
            "whole foods",
        ],
    ),
    (
        Category::Travel,
        &[
            "hotel",
            "flight",
            "airline",
            "airbnb",
            "airport",
            "uber",
            "lyft",
            "rental car",
        ],
    ),
    (
        Category::Online,
        &["amazon", "ebay", "etsy", "online", "shop", "checkout"],
    ),
    (
        Category::Streaming,
        &[
            "netflix",
            "spotify",
            "hulu",
            "disney",
            "youtube",
            "twitch",
            "subscription",
        ],
    ),
];

/// Representative purchase amounts per category, used to pre-populate
/// quick-pick buttons. Pure lookup, no computation.
pub fn suggested_amounts(category: Category) -> [f64; 4] {
    match category {
        Category::Dining => [15.0, 30.0, 60.0, 120.0],
        Category::Gas => [25.0, 40.0, 60.0, 80.0],
        Category::Groceries => [50.0, 100.0, 150.0, 250.0],
        Category::Travel => [100.0, 200.0, 500.0, 1000.0],
        Category::Online => [25.0, 50.0, 100.0, 200.0],
        Category::Streaming => [10.0, 15.0, 20.0, 30.0],
        Category::General => [20.0, 50.0, 100.0, 200.0],
    }
}

/// How a merchant rule pattern is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    /// Case-insensitive substring; supports pipe-separated OR patterns
    Contains,
    /// Regular expression, tried against raw and uppercased input
    Regex,
    /// Case-insensitive whole-string equality
    Exact,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::Regex => "regex",
            Self::Exact => "exact",
        }
    }
}

impl std::str::FromStr for PatternType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contains" => Ok(Self::Contains),
            "regex" => Ok(Self::Regex),
            "exact" => Ok(Self::Exact),
            _ => Err(format!("Unknown pattern type: {}", s)),
        }
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-defined pattern that routes merchant text to a category ahead of
/// the built-in tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantRule {
    pub pattern: String,
    pub pattern_type: PatternType,
    pub category: Category,
}

/// A merchant rule with its regex compiled up front, so matching stays total
struct CompiledRule {
    rule: MerchantRule,
    regex: Option<Regex>,
}

/// Result of classifying one merchant input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// `None` means nothing matched; callers fall back to manual selection
    pub category: Option<Category>,
    /// Keyword-hit percentage in [0, 100]; 0 when no category was detected
    pub confidence: f64,
    /// The detected category's quick-pick amounts (General when undetected)
    pub suggested_amounts: [f64; 4],
}

/// Keyword-based merchant classifier with optional user-defined rules
#[derive(Default)]
pub struct CategoryClassifier {
    rules: Vec<CompiledRule>,
}

impl CategoryClassifier {
    /// Classifier with the built-in tables only
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with user-defined rules evaluated ahead of the built-in
    /// tables, in list order. Regex patterns are validated here so that
    /// matching never fails.
    pub fn with_rules(rules: Vec<MerchantRule>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let regex = match rule.pattern_type {
                PatternType::Regex => Some(Regex::new(&rule.pattern)?),
                _ => None,
            };
            compiled.push(CompiledRule { rule, regex });
        }
        Ok(Self { rules: compiled })
    }

    pub fn rules(&self) -> impl Iterator<Item = &MerchantRule> {
        self.rules.iter().map(|c| &c.rule)
    }

    /// First user-defined rule matching the input, in list order
    pub fn matching_rule(&self, input: &str) -> Option<&MerchantRule> {
        self.rules
            .iter()
            .find(|compiled| rule_matches(input, compiled))
            .map(|compiled| &compiled.rule)
    }

    /// Infer a spending category from merchant text.
    ///
    /// Total over all inputs: empty or unmatched text yields `None`, never
    /// an error.
    pub fn detect_category(&self, input: &str) -> Option<Category> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        // 1. User-defined rules (explicit intent outranks built-in tables)
        if let Some(rule) = self.matching_rule(input) {
            debug!(
                pattern = %rule.pattern,
                category = %rule.category,
                "Merchant rule matched"
            );
            return Some(rule.category);
        }

        // 2. Location phrases, in table order
        for (phrase, category) in LOCATION_PHRASES {
            if normalized.contains(phrase) {
                debug!(phrase, category = %category, "Location phrase matched");
                return Some(*category);
            }
        }

        // 3. Keywords, first category/keyword hit wins
        for (category, keywords) in KEYWORD_TABLE {
            for keyword in *keywords {
                if normalized.contains(keyword) {
                    debug!(keyword, category = %category, "Keyword matched");
                    return Some(*category);
                }
            }
        }

        debug!(input = %normalized, "No category detected");
        None
    }

    /// Fraction of the category's keywords present in the input, as a
    /// percentage capped at 100. A rough heuristic, not a probability:
    /// several keywords describing the same purchase each count.
    ///
    /// Categories without keywords (General) score 0.
    pub fn confidence(&self, input: &str, category: Category) -> f64 {
        let keywords = keywords_for(category);
        if keywords.is_empty() {
            return 0.0;
        }

        let normalized = input.trim().to_lowercase();
        let hits = keywords
            .iter()
            .filter(|keyword| normalized.contains(*keyword))
            .count();

        ((hits as f64 / keywords.len() as f64) * 100.0).min(100.0)
    }

    /// Bundle of category, confidence, and quick-pick amounts for one input
    pub fn detect(&self, input: &str) -> Detection {
        let category = self.detect_category(input);
        Detection {
            category,
            confidence: category
                .map(|c| self.confidence(input, c))
                .unwrap_or(0.0),
            suggested_amounts: suggested_amounts(category.unwrap_or(Category::General)),
        }
    }
}

fn keywords_for(category: Category) -> &'static [&'static str] {
    KEYWORD_TABLE
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

fn rule_matches(input: &str, compiled: &CompiledRule) -> bool {
    let input_upper = input.to_uppercase();

    match compiled.rule.pattern_type {
        PatternType::Contains => compiled
            .rule
            .pattern
            .split('|')
            .any(|p| input_upper.contains(&p.to_uppercase())),
        PatternType::Regex => compiled
            .regex
            .as_ref()
            .map(|re| re.is_match(input) || re.is_match(&input_upper))
            .unwrap_or(false),
        PatternType::Exact => input_upper == compiled.rule.pattern.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_keywords() {
        let classifier = CategoryClassifier::new();
        assert_eq!(
            classifier.detect_category("Starbucks Coffee #4521"),
            Some(Category::Dining)
        );
        assert_eq!(
            classifier.detect_category("SHELL OIL 5742"),
            Some(Category::Gas)
        );
        assert_eq!(
            classifier.detect_category("NETFLIX.COM"),
            Some(Category::Streaming)
        );
        assert_eq!(
            classifier.detect_category("AMAZON MKTP US"),
            Some(Category::Online)
        );
    }

    #[test]
    fn test_detect_is_total() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.detect_category(""), None);
        assert_eq!(classifier.detect_category("   "), None);
        assert_eq!(classifier.detect_category("!!!###"), None);
        assert_eq!(classifier.detect_category("zxqvy unknown merchant"), None);
    }

    #[test]
    fn test_location_phrases_win_over_keywords() {
        let classifier = CategoryClassifier::new();
        // "gas station" is a location phrase; it resolves before any keyword
        assert_eq!(
            classifier.detect_category("gas station fuel"),
            Some(Category::Gas)
        );
        // "airport" resolves to Travel via the location table even though
        // the text also contains the Dining keyword "coffee"
        assert_eq!(
            classifier.detect_category("coffee at the airport"),
            Some(Category::Travel)
        );
    }

    #[test]
    fn test_keyword_table_order_breaks_ties() {
        let classifier = CategoryClassifier::new();
        // Dining precedes Gas in the table, so "coffee" wins over "shell"
        assert_eq!(
            classifier.detect_category("shell coffee kiosk"),
            Some(Category::Dining)
        );
    }

    #[test]
    fn test_normalization() {
        let classifier = CategoryClassifier::new();
        assert_eq!(
            classifier.detect_category("  UBER *TRIP HELP.UBER.COM  "),
            Some(Category::Travel)
        );
    }

    #[test]
    fn test_confidence_counts_keyword_hits() {
        let classifier = CategoryClassifier::new();
        // gas, station, fuel -> 3 hits of 7 gas keywords
        let confidence = classifier.confidence("gas station fuel", Category::Gas);
        assert!((confidence - 3.0 / 7.0 * 100.0).abs() < 1e-9);

        // starbucks + coffee -> 2 hits of 11 dining keywords
        let confidence = classifier.confidence("Starbucks Coffee #4521", Category::Dining);
        assert!((confidence - 2.0 / 11.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_bounds() {
        let classifier = CategoryClassifier::new();
        for category in Category::ALL {
            for input in ["", "gas fuel shell chevron exxon bp station", "starbucks"] {
                let confidence = classifier.confidence(input, category);
                assert!((0.0..=100.0).contains(&confidence));
            }
        }
    }

    #[test]
    fn test_confidence_for_general_is_zero() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.confidence("anything at all", Category::General), 0.0);
    }

    #[test]
    fn test_suggested_amounts() {
        assert_eq!(
            suggested_amounts(Category::Travel),
            [100.0, 200.0, 500.0, 1000.0]
        );
        assert_eq!(
            suggested_amounts(Category::Streaming),
            [10.0, 15.0, 20.0, 30.0]
        );
        for category in Category::ALL {
            assert!(suggested_amounts(category).iter().all(|a| *a > 0.0));
        }
    }

    #[test]
    fn test_detect_bundle() {
        let classifier = CategoryClassifier::new();

        let detection = classifier.detect("Starbucks Coffee");
        assert_eq!(detection.category, Some(Category::Dining));
        assert!(detection.confidence > 0.0);
        assert_eq!(detection.suggested_amounts, suggested_amounts(Category::Dining));

        let detection = classifier.detect("");
        assert_eq!(detection.category, None);
        assert_eq!(detection.confidence, 0.0);
        // Unmatched input falls back to the General amounts
        assert_eq!(
            detection.suggested_amounts,
            suggested_amounts(Category::General)
        );
    }

    #[test]
    fn test_contains_rule_with_or_patterns() {
        let classifier = CategoryClassifier::with_rules(vec![MerchantRule {
            pattern: "TRADER JOE|ALDI".to_string(),
            pattern_type: PatternType::Contains,
            category: Category::Groceries,
        }])
        .unwrap();

        assert_eq!(
            classifier.detect_category("trader joe's #553"),
            Some(Category::Groceries)
        );
        assert_eq!(
            classifier.detect_category("ALDI 71012"),
            Some(Category::Groceries)
        );
        assert_eq!(classifier.detect_category("wegmans"), None);
    }

    #[test]
    fn test_rules_preempt_builtin_tables() {
        // Without rules "starbucks" is Dining; a rule can reroute it
        let classifier = CategoryClassifier::with_rules(vec![MerchantRule {
            pattern: "STARBUCKS".to_string(),
            pattern_type: PatternType::Contains,
            category: Category::General,
        }])
        .unwrap();

        assert_eq!(
            classifier.detect_category("Starbucks Coffee #4521"),
            Some(Category::General)
        );
    }

    #[test]
    fn test_regex_rule() {
        let classifier = CategoryClassifier::with_rules(vec![MerchantRule {
            pattern: r"^SQ \*".to_string(),
            pattern_type: PatternType::Regex,
            category: Category::Dining,
        }])
        .unwrap();

        assert_eq!(
            classifier.detect_category("SQ *FOOD TRUCK"),
            Some(Category::Dining)
        );
        assert_eq!(classifier.detect_category("PAYPAL *SQ"), None);
    }

    #[test]
    fn test_exact_rule() {
        let classifier = CategoryClassifier::with_rules(vec![MerchantRule {
            pattern: "costco".to_string(),
            pattern_type: PatternType::Exact,
            category: Category::Groceries,
        }])
        .unwrap();

        assert_eq!(classifier.detect_category("COSTCO"), Some(Category::Groceries));
        // Not exact -> falls through to the built-in tables, where the Gas
        // keyword resolves first
        assert_eq!(
            classifier.detect_category("COSTCO GAS"),
            Some(Category::Gas)
        );
    }

    #[test]
    fn test_invalid_regex_rejected_at_construction() {
        let result = CategoryClassifier::with_rules(vec![MerchantRule {
            pattern: "(unclosed".to_string(),
            pattern_type: PatternType::Regex,
            category: Category::Dining,
        }]);
        assert!(result.is_err());
    }
}
