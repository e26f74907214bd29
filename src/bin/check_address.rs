//! Looks up one wallet address from the command line and prints its risk summary.
//!
//! Usage: `check_address <address>`

use rust_wallet_risk_api::config::Config;
use rust_wallet_risk_api::handlers::{lookup_address, AppState};
use rust_wallet_risk_api::risk_summary::derive_risk_summary;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_wallet_risk_api=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(address) = env::args().nth(1) else {
        anyhow::bail!("usage: check_address <address>");
    };

    let config = Config::from_env()?;
    config.require_api_key()?;
    let state = AppState::new(config)?;

    let payload = lookup_address(&state, &address).await?;

    match derive_risk_summary(&payload) {
        Some(summary) => {
            let tag = if summary.is_high_risk { "HIGH RISK" } else { "CAUTION" };
            println!("[{}] {}", tag, summary.message);
        }
        None => {
            println!("No known risk fields in response:");
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
