//! Card wallet commands

use std::path::Path;

use anyhow::{anyhow, bail, Result};

use cardwise_core::{catalog, models::parse_reward_rate, CardKind, CardStore, Category, NewCard};

use super::format_card;
use crate::wallet::{load_wallet, save_wallet};

pub fn cmd_cards_list(wallet_path: &Path) -> Result<()> {
    let wallet = load_wallet(wallet_path)?;

    if wallet.cards.is_empty() {
        println!("💳 No cards yet");
        println!("   Add one: cardwise cards add --name \"Everyday Cash\" --bank \"Harbor Bank\" --rate 2.0");
        println!("   Or pick from the catalog: cardwise cards catalog");
        return Ok(());
    }

    println!("💳 Owned cards ({})", wallet.cards.len());
    for card in &wallet.cards {
        println!("   {}", format_card(card));
    }

    Ok(())
}

pub fn cmd_cards_add(
    wallet_path: &Path,
    name: &str,
    bank: &str,
    rate: Option<&str>,
    bonus: Option<&str>,
    kind: &str,
) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Card name cannot be empty");
    }
    if bank.trim().is_empty() {
        bail!("Bank name cannot be empty");
    }

    let bonus_category = match bonus.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Some(raw.parse::<Category>().map_err(|e| anyhow!(e))?),
        None => None,
    };
    let kind = kind.parse::<CardKind>().map_err(|e| anyhow!(e))?;

    let mut wallet = load_wallet(wallet_path)?;
    let mut store = CardStore::with_cards(std::mem::take(&mut wallet.cards));

    let card = store.add(NewCard {
        name: name.trim().to_string(),
        bank: bank.trim().to_string(),
        reward_rate: parse_reward_rate(rate),
        bonus_category,
        kind,
    });

    wallet.cards = store.list().to_vec();
    save_wallet(wallet_path, &wallet)?;

    println!("✅ Added {}", format_card(&card));
    Ok(())
}

pub fn cmd_cards_remove(wallet_path: &Path, id: i64) -> Result<()> {
    let mut wallet = load_wallet(wallet_path)?;
    let mut store = CardStore::with_cards(std::mem::take(&mut wallet.cards));

    let removed = store.remove(id)?;

    wallet.cards = store.list().to_vec();
    save_wallet(wallet_path, &wallet)?;

    println!("🗑️  Removed {}", format_card(&removed));
    Ok(())
}

pub fn cmd_cards_catalog() -> Result<()> {
    let catalog = catalog::preset_cards();

    println!("📇 Preset catalog ({} cards)", catalog.len());
    for (i, entry) in catalog.iter().enumerate() {
        let bonus = entry
            .bonus_category
            .map(|c| format!(" (bonus: {})", c.label()))
            .unwrap_or_default();
        println!(
            "   {}. {} - {} - {:.1}% {}{}",
            i + 1,
            entry.name,
            entry.bank,
            entry.reward_rate,
            entry.kind.reward_unit(),
            bonus
        );
    }
    println!();
    println!("   Adopt one: cardwise cards adopt <number>");

    Ok(())
}

pub fn cmd_cards_adopt(wallet_path: &Path, index: usize) -> Result<()> {
    let catalog = catalog::preset_cards();
    let entry = index
        .checked_sub(1)
        .and_then(|i| catalog.get(i))
        .ok_or_else(|| {
            anyhow!(
                "No catalog entry {} (valid range: 1-{})",
                index,
                catalog.len()
            )
        })?;

    let mut wallet = load_wallet(wallet_path)?;
    let mut store = CardStore::with_cards(std::mem::take(&mut wallet.cards));
    let card = store.add(entry.clone());

    wallet.cards = store.list().to_vec();
    save_wallet(wallet_path, &wallet)?;

    println!("✅ Adopted {}", format_card(&card));
    Ok(())
}
