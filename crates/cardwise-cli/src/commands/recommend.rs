//! Recommendation command

use std::path::Path;

use anyhow::{anyhow, bail, Result};

use cardwise_core::{Category, PurchaseQuery, RecommendationEngine};

use super::classify::classifier_from_wallet;
use crate::wallet::load_wallet;

pub fn cmd_recommend(
    wallet_path: &Path,
    amount: f64,
    category_raw: Option<&str>,
    merchant: Option<&str>,
) -> Result<()> {
    let wallet = load_wallet(wallet_path)?;
    let classifier = classifier_from_wallet(&wallet)?;

    let category = match category_raw {
        Some(raw) => raw.parse::<Category>().map_err(|e| anyhow!(e))?,
        None => match merchant {
            Some(text) => match classifier.detect_category(text) {
                Some(category) => {
                    println!(
                        "🔍 Detected category: {} ({:.0}% keyword confidence)",
                        category.label(),
                        classifier.confidence(text, category)
                    );
                    category
                }
                None => bail!(
                    "No category detected for \"{}\" - pass --category explicitly",
                    text
                ),
            },
            None => bail!("Provide --category or --merchant"),
        },
    };

    let query = PurchaseQuery {
        amount,
        category,
        merchant_text: merchant.map(str::to_string),
    };

    let engine = RecommendationEngine::new();
    let recommendation = engine.recommend(&query, &wallet.cards)?;
    let top = &recommendation.results[0];

    println!(
        "🏆 Use {} for this ${:.2} {} purchase (${:.2} back)",
        top.card.name,
        amount,
        category.label(),
        top.reward_amount
    );
    println!("   {}", recommendation.reasoning);
    println!();
    println!("📊 All cards");
    for result in &recommendation.results {
        let bonus = if result.bonus_applied {
            " (bonus applied)"
        } else {
            ""
        };
        println!(
            "   {} - ${:.2} at {:.1}%{}",
            result.card.name, result.reward_amount, result.reward_rate, bonus
        );
    }

    Ok(())
}
