//! Demo 1: Market Snapshot
//!
//! Showcases: public endpoints (ticker, full depth, currency metadata)
//!
//! Run: cargo run --bin market_snapshot -- EUR
//!
//! Set GOX_BASE_URL to point at another API host.

use colored::*;
use gox_rest::{ClientConfig, ErrorKind, GoxRestClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let currency = std::env::args().nth(1).unwrap_or_else(|| "USD".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  MARKET SNAPSHOT  BTC/{}", currency).cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = GoxRestClient::with_config(ClientConfig::from_env()?)?;

    let info = client.get_currency_info(&currency).await?;
    println!(
        "  {} {} ({}), {} decimals",
        "CURRENCY:".yellow(),
        info.name,
        info.symbol,
        info.decimals().unwrap_or_default()
    );

    match client.get_ticker(&currency).await {
        Ok(ticker) => {
            println!("  {} {}", "LAST:".yellow(), ticker.last.display);
            println!("  {} {}", "BID:".yellow(), ticker.buy.display);
            println!("  {} {}", "ASK:".yellow(), ticker.sell.display);
            println!("  {} {}", "SPREAD:".green(), ticker.spread());
            println!("  {} {}", "24H VOL:".yellow(), ticker.vol.display);
        }
        Err(e) if e.kind() == ErrorKind::Protocol => {
            println!("  {} {}", "✗ server refused:".red(), e);
        }
        Err(e) => return Err(e.into()),
    }

    let depth = client.get_full_depth(&currency).await?;
    println!();
    println!(
        "  {} {} asks, {} bids",
        "DEPTH:".yellow(),
        depth.asks.len(),
        depth.bids.len()
    );
    if let (Some(bid), Some(ask)) = (depth.best_bid(), depth.best_ask()) {
        println!("  {} {} / {}", "TOP OF BOOK:".green(), bid, ask);
    }

    Ok(())
}
