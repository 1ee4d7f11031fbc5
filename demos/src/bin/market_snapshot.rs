//! Demo 2: Market Snapshot
//!
//! Showcases: depth, recent trades, hourly candles and precision for one pair
//!
//! Run: cargo run --bin market_snapshot -- [SYMBOL] [EXCHANGE]

use chrono::{Duration, Utc};
use colored::*;
use coinswitch_rest::{CoinSwitchClient, Exchange, Side, Symbol};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let symbol: Symbol = match args.next() {
        Some(s) => s.parse()?,
        None => Symbol::from(Symbol::BTC_INR),
    };
    let exchange: Exchange = match args.next() {
        Some(s) => s.parse()?,
        None => Exchange::CoinswitchX,
    };

    println!("{}", "═".repeat(65).cyan());
    println!("{}", format!("  MARKET SNAPSHOT: {} on {}", symbol, exchange).cyan().bold());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = CoinSwitchClient::from_env()?;

    // Precision
    let precision = client.exchange_precision(exchange, Some(symbol.as_str())).await?;
    if let Some(p) = precision.get(symbol.as_str()) {
        println!(
            "  {} base {} / quote {} / limit {}",
            "Precision:".white().bold(),
            p.base,
            p.quote,
            p.limit
        );
    }

    // Depth
    let book = client.depth(exchange, &symbol).await?;
    println!("\n  {}", "ORDER BOOK (top 5)".white().bold());
    for level in book.asks.iter().take(5).rev() {
        println!("  {:>18}  {:>14}", level.price.to_string().red(), level.qty);
    }
    match (book.spread(), book.mid_price()) {
        (Some(spread), Some(mid)) => {
            println!("  {}", format!("── spread {} / mid {} ──", spread, mid).yellow())
        }
        _ => println!("  {}", "── one-sided book ──".yellow()),
    }
    for level in book.bids.iter().take(5) {
        println!("  {:>18}  {:>14}", level.price.to_string().green(), level.qty);
    }

    // Trades
    let trades = client.trades(exchange, &symbol).await?;
    println!("\n  {}", "RECENT TRADES".white().bold());
    for trade in trades.iter().take(10) {
        let side = match trade.side {
            Side::Buy => "BUY ".green(),
            Side::Sell => "SELL".red(),
        };
        println!(
            "  {}  {}  {:>14} @ {}",
            trade.event_time.format("%H:%M:%S"),
            side,
            trade.quantity,
            trade.price
        );
    }

    // Candles
    let end = Utc::now();
    let start = end - Duration::hours(6);
    let candles = client
        .candles(
            exchange,
            &symbol,
            60,
            start.timestamp_millis() as u64,
            end.timestamp_millis() as u64,
        )
        .await?;
    println!("\n  {}", "HOURLY CANDLES".white().bold());
    for candle in &candles {
        let close = if candle.is_bullish() {
            candle.close.to_string().green()
        } else {
            candle.close.to_string().red()
        };
        println!(
            "  {}  O {}  H {}  L {}  C {}",
            candle.start_time.format("%m-%d %H:%M"),
            candle.open,
            candle.high,
            candle.low,
            close
        );
    }

    Ok(())
}
