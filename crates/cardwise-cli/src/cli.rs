//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CardWise - Pick the right card for every purchase
#[derive(Parser)]
#[command(name = "cardwise")]
#[command(about = "Card recommendation and spending category detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Wallet file holding owned cards and merchant rules
    #[arg(long, default_value = "wallet.json", global = true)]
    pub wallet: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage owned cards (list, add, remove, catalog, adopt)
    Cards {
        #[command(subcommand)]
        action: Option<CardsAction>,
    },

    /// Detect a spending category from merchant text
    Detect {
        /// Merchant or location text, e.g. "Starbucks Coffee #4521"
        input: Vec<String>,
    },

    /// Show suggested purchase amounts for a category
    Suggest {
        /// Category: dining, gas, groceries, travel, online, streaming, general
        category: String,
    },

    /// Recommend which owned card to use for a purchase
    Recommend {
        /// Purchase amount
        #[arg(short, long)]
        amount: f64,

        /// Spending category (detected from --merchant when omitted)
        #[arg(short, long)]
        category: Option<String>,

        /// Merchant text, used for detection and in the reasoning
        #[arg(short, long)]
        merchant: Option<String>,
    },

    /// Manage merchant rules (list, add, remove, test)
    Rules {
        #[command(subcommand)]
        action: Option<RulesAction>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CardsAction {
    /// List owned cards
    List,

    /// Add a card to the wallet
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Issuing bank
        #[arg(long)]
        bank: String,

        /// Base reward percentage; malformed input falls back to 1.0
        #[arg(long)]
        rate: Option<String>,

        /// Bonus category (dining, gas, groceries, travel, online, streaming, general)
        #[arg(long)]
        bonus: Option<String>,

        /// Reward kind: cashback, points, travel, balance-transfer, business
        #[arg(long, default_value = "cashback")]
        kind: String,
    },

    /// Remove a card by id
    Remove {
        /// Card id (see `cards list`)
        id: i64,
    },

    /// Show the preset card catalog
    Catalog,

    /// Copy a preset catalog entry into the wallet
    Adopt {
        /// 1-based catalog entry number (see `cards catalog`)
        index: usize,
    },
}

#[derive(Subcommand)]
pub enum RulesAction {
    /// List merchant rules
    List,

    /// Add a merchant rule
    Add {
        /// Pattern text; contains patterns support pipe-separated alternatives
        pattern: String,

        /// Target category
        category: String,

        /// Pattern type: contains, regex, exact
        #[arg(long, default_value = "contains")]
        pattern_type: String,
    },

    /// Remove a merchant rule by number
    Remove {
        /// 1-based rule number (see `rules list`)
        index: usize,
    },

    /// Test which category some merchant text resolves to
    Test {
        /// Merchant text to classify
        input: Vec<String>,
    },
}
