//! Demo 1: Portfolio Overview
//!
//! Showcases: key validation, signed GET requests, balance records
//!
//! Run: cargo run --bin portfolio

use colored::*;
use coinswitch_rest::{CoinSwitchClient, Decimal};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  PORTFOLIO OVERVIEW".cyan().bold());
    println!("{}", "  CoinSwitch PRO SDK Demo - Signed Account Data".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = CoinSwitchClient::from_env()?;

    if !client.ping().await {
        println!("{} API unreachable at {}", "✗".red(), client.base_url());
        return Ok(());
    }
    println!("{} API reachable", "✓".green());

    if !client.validate_keys().await {
        println!("{} API key rejected", "✗".red());
        return Ok(());
    }
    println!("{} API key accepted\n", "✓".green());

    let balances = client.portfolio().await?;

    println!(
        "  {:<8}  {:>16}  {:>14}  {:>14}  {:>12}",
        "COIN".white().bold(),
        "BALANCE".white().bold(),
        "INVESTED".white().bold(),
        "VALUE".white().bold(),
        "PNL".white().bold()
    );
    println!("  {}", "─".repeat(72));

    let mut invested = Decimal::ZERO;
    let mut value = Decimal::ZERO;

    for balance in &balances {
        let pnl = balance.unrealized_pnl();
        let pnl_text = format!("{:.2}", pnl);
        let pnl_text = if pnl.is_sign_negative() {
            pnl_text.red()
        } else {
            pnl_text.green()
        };

        println!(
            "  {:<8}  {:>16}  {:>14.2}  {:>14.2}  {:>12}",
            balance.currency.yellow(),
            balance.total_balance().normalize().to_string(),
            balance.invested_value,
            balance.current_value,
            pnl_text
        );

        invested += balance.invested_value;
        value += balance.current_value;
    }

    println!("  {}", "─".repeat(72));
    println!(
        "  {:<8}  {:>16}  {:>14.2}  {:>14.2}  {:>12.2}",
        "TOTAL".white().bold(),
        format!("{} coins", balances.len()),
        invested,
        value,
        value - invested
    );

    Ok(())
}
