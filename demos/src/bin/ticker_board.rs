//! Demo 3: Ticker Board
//!
//! Showcases: the blocking client and 24 hour tickers for every pair
//!
//! Run: cargo run --bin ticker_board -- [EXCHANGE]

use colored::*;
use coinswitch_rest::{BlockingClient, Exchange};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let exchange: Exchange = match std::env::args().nth(1) {
        Some(s) => s.parse()?,
        None => Exchange::CoinswitchX,
    };

    let client = BlockingClient::from_env()?;
    let tickers = client.ticker_all_pairs(exchange)?;

    let mut rows: Vec<_> = tickers.values().collect();
    rows.sort_by(|a, b| b.quote_volume.cmp(&a.quote_volume));

    println!("{}", "═".repeat(65).cyan());
    println!("{}", format!("  24H TICKERS: {} ({} pairs)", exchange, rows.len()).cyan().bold());
    println!("{}", "═".repeat(65).cyan());
    println!(
        "  {:<12}  {:>14}  {:>9}  {:>12}  {:>16}",
        "PAIR".white().bold(),
        "LAST".white().bold(),
        "CHANGE".white().bold(),
        "SPREAD".white().bold(),
        "QUOTE VOL".white().bold()
    );
    println!("  {}", "─".repeat(71));

    for ticker in rows.iter().take(25) {
        let change = format!("{:.2}%", ticker.percentage_change);
        let change = if ticker.percentage_change.is_sign_negative() {
            change.red()
        } else {
            change.green()
        };
        let spread = ticker
            .spread()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<12}  {:>14}  {:>9}  {:>12}  {:>16.0}",
            ticker.symbol.as_str().yellow(),
            ticker.last_price,
            change,
            spread,
            ticker.quote_volume
        );
    }

    Ok(())
}
