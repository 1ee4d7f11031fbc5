//! Shared fixtures for the REST integration tests
//!
//! Response bodies mirror the shapes the CoinSwitch PRO API returns.

#![allow(dead_code)]

use coinswitch_rest::{ClientConfig, CoinSwitchClient, Credentials};
use serde_json::{json, Value};
use wiremock::MockServer;

/// RFC 8032 test vector 1 secret key
pub const SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

pub const API_KEY: &str = "test-api-key";

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, SECRET).unwrap()
}

pub fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(credentials())
        .with_base_url(server.uri())
        .with_timeout(5)
}

pub fn client(server: &MockServer) -> CoinSwitchClient {
    CoinSwitchClient::with_config(config(server)).unwrap()
}

fn balance(currency: &str, name: &str, main: &str, invested: &str, current: &str) -> Value {
    json!({
        "currency": currency,
        "name": name,
        "main_balance": main,
        "blocked_balance_deposit": "0",
        "blocked_balance_withdraw": "0",
        "blocked_balance_order": "0.5",
        "blocked_balance_stake": "0",
        "blocked_balance_vault": "0",
        "buy_average_price": 0,
        "invested_value": invested,
        "invested_value_excluding_fee": invested,
        "current_value": current,
        "sell_rate": "0",
        "buy_rate": "0",
        "is_average_price_available": false,
        "is_delisted_coin": false
    })
}

pub fn portfolio_body() -> Value {
    json!({
        "data": [
            balance("INR", "Indian Rupee", "15000.25", "0", "15000.25"),
            balance("BTC", "Bitcoin", "0.0021", "4000", "4935"),
            balance("ETH", "Ethereum", "0.15", "20000", "18500"),
            balance("SHIB", "Shiba Inu", "1000000", "800", "950"),
            balance("USDT", "Tether", "12", "1000", "1001"),
            balance("DOGE", "Dogecoin", "150", "1200", "1100"),
        ]
    })
}

pub fn trades_body() -> Value {
    json!({
        "data": [
            {
                "E": 1662681600000u64,
                "S": "BUY",
                "a": "buyer-1",
                "b": "seller-1",
                "m": true,
                "p": "2350000",
                "q": "0.0002",
                "s": "BTC/INR",
                "t": "19821",
                "e": "coinswitchx"
            },
            {
                "E": 1662681601000u64,
                "S": "SELL",
                "a": "buyer-2",
                "b": "seller-2",
                "m": false,
                "p": "2349500",
                "q": "0.001",
                "s": "BTC/INR",
                "t": "19822",
                "e": "coinswitchx"
            }
        ]
    })
}

pub fn precision_coins() -> Value {
    json!({
        "coinswitchx": {
            "BTC/INR": { "base": 5, "quote": 2, "limit": 0 },
            "ETH/INR": { "base": 4, "quote": 2, "limit": 0 }
        }
    })
}

pub fn depth_body() -> Value {
    json!({
        "data": {
            "symbol": "BTC/INR",
            "timestamp": 1662681600000u64,
            "bids": [["2349000", "0.01"], ["2348000", "0.5"]],
            "asks": [["2351000", "0.02"], ["2352000", "1"]]
        }
    })
}

pub fn candles_body() -> Value {
    json!({
        "data": [
            {
                "start_time": 1662681600000u64,
                "close_time": 1662681659999u64,
                "symbol": "BTC/INR",
                "o": "2350000",
                "h": "2355000",
                "l": "2349000",
                "c": "2354000",
                "interval": "1",
                "volume": "0.75"
            }
        ]
    })
}

fn ticker(symbol: &str, last: &str, bid: &str, ask: &str) -> Value {
    let (base, quote) = symbol.split_once('/').unwrap();
    json!({
        "symbol": symbol,
        "baseAsset": base,
        "quoteAsset": quote,
        "openPrice": "2300000",
        "lowPrice": "2290000",
        "highPrice": "2360000",
        "lastPrice": last,
        "baseVolume": "12.5",
        "quoteVolume": "29000000",
        "percentageChange": "2.17",
        "bidPrice": bid,
        "askPrice": ask,
        "at": 1662681600000u64
    })
}

pub fn tickers_body() -> Value {
    json!({
        "data": {
            "BTC/INR": ticker("BTC/INR", "2350000", "2349000", "2351000"),
            "ETH/INR": ticker("ETH/INR", "150000", "", "")
        }
    })
}

pub fn single_ticker_body() -> Value {
    json!({
        "data": {
            "BTC/INR": ticker("BTC/INR", "2350000", "2349000", "2351000")
        }
    })
}
