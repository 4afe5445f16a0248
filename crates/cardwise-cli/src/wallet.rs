//! Wallet file load/save
//!
//! The wallet is a small JSON file holding the user's owned cards and
//! merchant rules between CLI invocations. Storage stays at this boundary;
//! the core library never reads it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use cardwise_core::{Card, MerchantRule};

/// On-disk wallet contents
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub rules: Vec<MerchantRule>,
}

/// Load the wallet, returning an empty one when the file does not exist yet
pub fn load_wallet(path: &Path) -> Result<Wallet> {
    if !path.exists() {
        return Ok(Wallet::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read wallet file {}", path.display()))?;
    let wallet: Wallet = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse wallet file {}", path.display()))?;

    debug!(
        cards = wallet.cards.len(),
        rules = wallet.rules.len(),
        "Loaded wallet"
    );
    Ok(wallet)
}

pub fn save_wallet(path: &Path, wallet: &Wallet) -> Result<()> {
    let raw = serde_json::to_string_pretty(wallet).context("Failed to serialize wallet")?;
    fs::write(path, raw)
        .with_context(|| format!("Failed to write wallet file {}", path.display()))
}
