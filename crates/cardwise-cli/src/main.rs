//! CardWise CLI - card recommendations from the command line
//!
//! Usage:
//!   cardwise cards add --name "Everyday Cash" --bank "Harbor Bank" --rate 2.0
//!   cardwise detect "Starbucks Coffee #4521"
//!   cardwise recommend --amount 100 --category dining
//!   cardwise serve --port 3000

mod cli;
mod commands;
mod wallet;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Cards { action } => match action {
            None | Some(CardsAction::List) => commands::cmd_cards_list(&cli.wallet),
            Some(CardsAction::Add {
                name,
                bank,
                rate,
                bonus,
                kind,
            }) => commands::cmd_cards_add(
                &cli.wallet,
                &name,
                &bank,
                rate.as_deref(),
                bonus.as_deref(),
                &kind,
            ),
            Some(CardsAction::Remove { id }) => commands::cmd_cards_remove(&cli.wallet, id),
            Some(CardsAction::Catalog) => commands::cmd_cards_catalog(),
            Some(CardsAction::Adopt { index }) => commands::cmd_cards_adopt(&cli.wallet, index),
        },
        Commands::Detect { input } => commands::cmd_detect(&cli.wallet, &input.join(" ")),
        Commands::Suggest { category } => commands::cmd_suggest(&category),
        Commands::Recommend {
            amount,
            category,
            merchant,
        } => commands::cmd_recommend(&cli.wallet, amount, category.as_deref(), merchant.as_deref()),
        Commands::Rules { action } => match action {
            None | Some(RulesAction::List) => commands::cmd_rules_list(&cli.wallet),
            Some(RulesAction::Add {
                pattern,
                category,
                pattern_type,
            }) => commands::cmd_rules_add(&cli.wallet, &pattern, &category, &pattern_type),
            Some(RulesAction::Remove { index }) => commands::cmd_rules_remove(&cli.wallet, index),
            Some(RulesAction::Test { input }) => {
                commands::cmd_rules_test(&cli.wallet, &input.join(" "))
            }
        },
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&cli.wallet, &host, port, static_dir.as_deref()).await,
    }
}
