//! Demo 2: Account Summary
//!
//! Showcases: signed private endpoints (account info, open orders)
//!
//! Run: GOX_API_KEY=... GOX_API_SECRET=... cargo run --bin account_summary
//!
//! Set DEMO_PLACE_ORDER=1 to also place a tiny limit bid far below market.

use colored::*;
use gox_rest::{Currency, GoxRestClient, OrderRequest, OrderSide};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = GoxRestClient::from_env()?;
    if !client.has_credentials() {
        println!("{} GOX_API_KEY and GOX_API_SECRET must be set", "✗".red());
        return Ok(());
    }

    let info = client.get_account_info().await?;
    println!("{} Logged in as {}", "✓".green(), info.login.bold());
    println!("  Rights: {}", info.rights.join(", "));
    println!("  Trade fee: {}%", info.trade_fee);
    println!();

    let mut codes: Vec<_> = info.wallets.keys().collect();
    codes.sort();
    for code in codes {
        let wallet = &info.wallets[code];
        println!("  {:<4} {}", code.yellow(), wallet.balance.display);
    }
    println!();

    let orders = client.get_open_orders().await?;
    println!("{} {} open orders", "✓".green(), orders.len());
    for order in &orders {
        let price = order
            .price
            .as_ref()
            .map_or("market".to_string(), |p| p.display.clone());
        println!(
            "  {} {} {} @ {} [{}]",
            order.oid.dimmed(),
            order.side,
            order.amount.display,
            price,
            order.status
        );
    }

    if std::env::var("DEMO_PLACE_ORDER").as_deref() == Ok("1") {
        let order = OrderRequest::limit(OrderSide::Bid, dec!(0.01), dec!(1), Currency::Usd)?;
        match client.place_order("USD", order).await {
            Ok(oid) => println!("{} Placed order {}", "✓".green(), oid),
            Err(e) => println!("{} {}", "✗".red(), e),
        }
    }

    Ok(())
}
