//! Server command implementation

use std::path::Path;

use anyhow::Result;

use cardwise_core::CardStore;

use super::classify::classifier_from_wallet;
use crate::wallet::load_wallet;

pub async fn cmd_serve(
    wallet_path: &Path,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting CardWise web server...");
    println!("   Wallet: {}", wallet_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    // Parse allowed CORS origins from environment (comma-separated)
    let allowed_origins = cardwise_server::parse_allowed_origins(
        &std::env::var("CARDWISE_ALLOWED_ORIGINS").unwrap_or_default(),
    );
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} (CARDWISE_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }

    println!();
    println!("   Press Ctrl+C to stop");

    let wallet = load_wallet(wallet_path)?;
    let classifier = classifier_from_wallet(&wallet)?;
    let store = CardStore::with_cards(wallet.cards);

    let config = cardwise_server::ServerConfig { allowed_origins };

    let static_dir_str =
        static_dir.map(|p| p.to_str().expect("static_dir path must be valid UTF-8"));
    cardwise_server::serve(store, classifier, host, port, static_dir_str, config).await?;

    Ok(())
}
