//! Detection commands (detect, suggest, rules)

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use cardwise_core::{
    suggested_amounts, Category, CategoryClassifier, MerchantRule, PatternType,
};

use super::format_amounts;
use crate::wallet::{load_wallet, save_wallet, Wallet};

/// Build a classifier carrying the wallet's merchant rules
pub fn classifier_from_wallet(wallet: &Wallet) -> Result<CategoryClassifier> {
    CategoryClassifier::with_rules(wallet.rules.clone())
        .context("Invalid merchant rule in wallet")
}

pub fn cmd_detect(wallet_path: &Path, input: &str) -> Result<()> {
    let wallet = load_wallet(wallet_path)?;
    let classifier = classifier_from_wallet(&wallet)?;

    let detection = classifier.detect(input);
    match detection.category {
        Some(category) => {
            println!(
                "🔍 \"{}\" looks like {} ({:.0}% keyword confidence)",
                input,
                category.label(),
                detection.confidence
            );
        }
        None => {
            println!("🔍 No category detected for \"{}\" - pick one manually", input);
        }
    }
    println!(
        "   Quick amounts: {}",
        format_amounts(&detection.suggested_amounts)
    );

    Ok(())
}

pub fn cmd_suggest(category_raw: &str) -> Result<()> {
    // Unrecognized categories fall back to the general amounts
    let category = category_raw.parse::<Category>().unwrap_or_else(|_| {
        println!(
            "   Unknown category \"{}\", showing general amounts",
            category_raw
        );
        Category::General
    });

    println!(
        "💡 Suggested amounts for {}: {}",
        category.label(),
        format_amounts(&suggested_amounts(category))
    );

    Ok(())
}

pub fn cmd_rules_list(wallet_path: &Path) -> Result<()> {
    let wallet = load_wallet(wallet_path)?;

    if wallet.rules.is_empty() {
        println!("📐 No merchant rules");
        println!("   Add one: cardwise rules add \"TRADER JOE|ALDI\" groceries");
        return Ok(());
    }

    println!("📐 Merchant rules ({})", wallet.rules.len());
    for (i, rule) in wallet.rules.iter().enumerate() {
        println!(
            "   {}. {} \"{}\" -> {}",
            i + 1,
            rule.pattern_type,
            rule.pattern,
            rule.category.label()
        );
    }

    Ok(())
}

pub fn cmd_rules_add(
    wallet_path: &Path,
    pattern: &str,
    category_raw: &str,
    pattern_type_raw: &str,
) -> Result<()> {
    if pattern.trim().is_empty() {
        bail!("Rule pattern cannot be empty");
    }

    let category = category_raw.parse::<Category>().map_err(|e| anyhow!(e))?;
    let pattern_type = pattern_type_raw
        .parse::<PatternType>()
        .map_err(|e| anyhow!(e))?;

    let rule = MerchantRule {
        pattern: pattern.trim().to_string(),
        pattern_type,
        category,
    };

    // Validates regex patterns before the rule is saved
    CategoryClassifier::with_rules(vec![rule.clone()])?;

    let mut wallet = load_wallet(wallet_path)?;
    wallet.rules.push(rule);
    save_wallet(wallet_path, &wallet)?;

    println!(
        "✅ Added rule: {} \"{}\" -> {}",
        pattern_type,
        pattern.trim(),
        category.label()
    );
    Ok(())
}

pub fn cmd_rules_remove(wallet_path: &Path, index: usize) -> Result<()> {
    let mut wallet = load_wallet(wallet_path)?;

    if index == 0 || index > wallet.rules.len() {
        bail!(
            "No rule {} (valid range: 1-{})",
            index,
            wallet.rules.len()
        );
    }

    let removed = wallet.rules.remove(index - 1);
    save_wallet(wallet_path, &wallet)?;

    println!(
        "🗑️  Removed rule: {} \"{}\" -> {}",
        removed.pattern_type,
        removed.pattern,
        removed.category.label()
    );
    Ok(())
}

pub fn cmd_rules_test(wallet_path: &Path, input: &str) -> Result<()> {
    let wallet = load_wallet(wallet_path)?;
    let classifier = classifier_from_wallet(&wallet)?;

    match classifier.matching_rule(input) {
        Some(rule) => {
            println!(
                "📐 Rule {} \"{}\" matches -> {}",
                rule.pattern_type,
                rule.pattern,
                rule.category.label()
            );
        }
        None => {
            println!("📐 No merchant rule matches \"{}\"", input);
        }
    }

    match classifier.detect_category(input) {
        Some(category) => println!("   Final category: {}", category.label()),
        None => println!("   Final category: none"),
    }

    Ok(())
}
