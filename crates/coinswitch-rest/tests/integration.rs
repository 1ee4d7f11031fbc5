//! Integration tests against a mock CoinSwitch server

mod common;

use coinswitch_auth::unquote_plus;
use coinswitch_rest::{
    BlockingClient, ClientConfig, CoinSwitchClient, Exchange, RestError, Side, Symbol,
};
use common::*;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Rebuild the signature message from what the server received and verify it
fn assert_signed(request: &Request) {
    let signature = request
        .headers
        .get("X-AUTH-SIGNATURE")
        .expect("signature header")
        .to_str()
        .unwrap();

    let mut endpoint = request.url.path().to_string();
    if let Some(query) = request.url.query() {
        endpoint.push('?');
        endpoint.push_str(query);
    }
    let body = if request.body.is_empty() {
        "{}".to_string()
    } else {
        String::from_utf8(request.body.clone()).unwrap()
    };

    let message = format!("{}{}{}", request.method, unquote_plus(&endpoint), body);
    credentials()
        .verify(message.as_bytes(), signature)
        .expect("signature should verify against the received request");
}

async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

// ============================================================================
// Connectivity
// ============================================================================

#[tokio::test]
async fn test_ping_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/ping"))
        .and(header("X-AUTH-APIKEY", API_KEY))
        .and(header_exists("X-AUTH-SIGNATURE"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).ping().await);
    assert_signed(&only_request(&server).await);
}

#[tokio::test]
async fn test_ping_rejected_is_false() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/ping"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(!client(&server).ping().await);
}

#[tokio::test]
async fn test_ping_unreachable_is_false() {
    let config = ClientConfig::new(credentials())
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(2);
    let client = CoinSwitchClient::with_config(config).unwrap();

    assert!(!client.ping().await);
    assert!(!client.validate_keys().await);
}

#[tokio::test]
async fn test_validate_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/validate/keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Valid Access"})))
        .mount(&server)
        .await;

    assert!(client(&server).validate_keys().await);
    assert_signed(&only_request(&server).await);
}

#[tokio::test]
async fn test_validate_keys_forbidden_is_false() {
    let server = MockServer::start().await;
    Mock::given(path("/trade/api/v2/validate/keys"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    assert!(!client(&server).validate_keys().await);
}

// ============================================================================
// Account
// ============================================================================

#[tokio::test]
async fn test_portfolio() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/user/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(portfolio_body()))
        .mount(&server)
        .await;

    let balances = client(&server).portfolio().await.unwrap();
    assert_eq!(balances.len(), 6);

    let currencies: Vec<_> = balances.iter().map(|b| b.currency.as_str()).collect();
    assert_eq!(currencies, ["INR", "BTC", "ETH", "SHIB", "USDT", "DOGE"]);

    let btc = &balances[1];
    assert_eq!(btc.name, "Bitcoin");
    assert_eq!(btc.main_balance, dec!(0.0021));
    assert_eq!(btc.blocked_balance_order, dec!(0.5));
    assert_eq!(btc.unrealized_pnl(), dec!(935));
    assert_eq!(btc.is_delisted_coin, Some(false));

    assert_signed(&only_request(&server).await);
}

#[tokio::test]
async fn test_portfolio_server_error_names_operation() {
    let server = MockServer::start().await;
    Mock::given(path("/trade/api/v2/user/portfolio"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client(&server).portfolio().await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));
    assert!(err.to_string().contains("portfolio"));
    match err {
        RestError::Status { operation, body, .. } => {
            assert_eq!(operation, "portfolio");
            assert_eq!(body, "upstream down");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_portfolio_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(path("/trade/api/v2/user/portfolio"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid signature"})))
        .mount(&server)
        .await;

    let err = client(&server).portfolio().await.unwrap_err();
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn test_portfolio_shape_mismatch_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(path("/trade/api/v2/user/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"unexpected": 1}})))
        .mount(&server)
        .await;

    let err = client(&server).portfolio().await.unwrap_err();
    assert!(matches!(err, RestError::Json(_)));
}

// ============================================================================
// Market data
// ============================================================================

#[tokio::test]
async fn test_trades() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/trades"))
        .and(query_param("exchange", "coinswitchx"))
        .and(query_param("symbol", "BTC/INR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trades_body()))
        .mount(&server)
        .await;

    let trades = client(&server)
        .trades(Exchange::CoinswitchX, "BTC/INR")
        .await
        .unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].side, Side::Buy);
    assert_eq!(trades[0].price, dec!(2350000));
    assert_eq!(trades[0].trade_id, "19821");
    assert_eq!(trades[0].symbol, Symbol::BTC_INR);
    assert_eq!(trades[1].side, Side::Sell);
    assert!(!trades[1].is_buyer_maker);

    let request = only_request(&server).await;
    assert_eq!(
        request.url.query(),
        Some("exchange=coinswitchx&symbol=BTC%2FINR")
    );
    assert_signed(&request);
}

#[tokio::test]
async fn test_exchange_precision_bare_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/trade/api/v2/exchangePrecision"))
        .and(body_json(json!({"exchange": "coinswitchx", "symbol": "BTC/INR"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(precision_coins()))
        .mount(&server)
        .await;

    let precision = client(&server)
        .exchange_precision(Exchange::CoinswitchX, Some("BTC/INR"))
        .await
        .unwrap();

    assert_eq!(precision.exchange, Some(Exchange::CoinswitchX));
    assert_eq!(precision.len(), 2);
    let btc = precision.get("BTC/INR").unwrap();
    assert_eq!((btc.base, btc.quote, btc.limit), (5, 2, 0));

    let request = only_request(&server).await;
    assert_eq!(
        String::from_utf8(request.body.clone()).unwrap(),
        r#"{"exchange":"coinswitchx","symbol":"BTC/INR"}"#
    );
    assert_signed(&request);
}

#[tokio::test]
async fn test_exchange_precision_wrapped_shape_without_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/trade/api/v2/exchangePrecision"))
        .and(body_json(json!({"exchange": "coinswitchx"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": precision_coins()})))
        .mount(&server)
        .await;

    let precision = client(&server)
        .exchange_precision(Exchange::CoinswitchX, None)
        .await
        .unwrap();

    assert_eq!(precision.len(), 2);
    assert_eq!(precision.get("ETH/INR").unwrap().base, 4);
    assert_signed(&only_request(&server).await);
}

#[tokio::test]
async fn test_depth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/depth"))
        .and(query_param("exchange", "wazirx"))
        .and(query_param("symbol", "BTC/INR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(depth_body()))
        .mount(&server)
        .await;

    let book = client(&server)
        .depth(Exchange::Wazirx, Symbol::pair("BTC", "INR"))
        .await
        .unwrap();

    assert_eq!(book.symbol, "BTC/INR");
    assert_eq!(book.best_bid(), Some(dec!(2349000)));
    assert_eq!(book.best_ask(), Some(dec!(2351000)));
    assert_eq!(book.spread(), Some(dec!(2000)));
    assert_signed(&only_request(&server).await);
}

#[tokio::test]
async fn test_candles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/candles"))
        .and(query_param("end_time", "1662681659999"))
        .and(query_param("start_time", "1662681600000"))
        .and(query_param("symbol", "BTC/INR"))
        .and(query_param("interval", "1"))
        .and(query_param("exchange", "coinswitchx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candles_body()))
        .mount(&server)
        .await;

    let candles = client(&server)
        .candles(
            Exchange::CoinswitchX,
            "BTC/INR",
            1,
            1_662_681_600_000,
            1_662_681_659_999,
        )
        .await
        .unwrap();

    assert_eq!(candles.len(), 1);
    let candle = &candles[0];
    assert_eq!(candle.open, dec!(2350000));
    assert_eq!(candle.close, dec!(2354000));
    assert_eq!(candle.interval, 1);
    assert!(candle.is_bullish());
    assert_eq!(candle.range(), dec!(6000));
    assert_signed(&only_request(&server).await);
}

#[tokio::test]
async fn test_candles_invalid_range_sends_nothing() {
    let server = MockServer::start().await;
    let client = client(&server);

    let err = client
        .candles(Exchange::CoinswitchX, "BTC/INR", 1, 2_000, 1_000)
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::InvalidParameter(_)));

    let err = client
        .candles(Exchange::CoinswitchX, "BTC/INR", 0, 1_000, 2_000)
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::InvalidParameter(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Tickers
// ============================================================================

#[tokio::test]
async fn test_ticker_all_pairs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/24hr/all-pairs/ticker"))
        .and(query_param("exchange", "coinswitchx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tickers_body()))
        .mount(&server)
        .await;

    let tickers = client(&server)
        .ticker_all_pairs(Exchange::CoinswitchX)
        .await
        .unwrap();

    assert_eq!(tickers.len(), 2);
    let btc = &tickers["BTC/INR"];
    assert_eq!(btc.base_asset, "BTC");
    assert_eq!(btc.last_price, dec!(2350000));
    assert_eq!(btc.spread(), Some(dec!(2000)));

    let eth = &tickers["ETH/INR"];
    assert_eq!(eth.bid, None);
    assert_eq!(eth.ask, None);
    assert_eq!(eth.spread(), None);

    assert_signed(&only_request(&server).await);
}

#[tokio::test]
async fn test_ticker_single_pair() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trade/api/v2/24hr/ticker"))
        .and(query_param("exchange", "coinswitchx"))
        .and(query_param("symbol", "BTC/INR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(single_ticker_body()))
        .mount(&server)
        .await;

    let tickers = client(&server)
        .ticker_for(Exchange::CoinswitchX, "BTC/INR")
        .await
        .unwrap();

    assert_eq!(tickers.len(), 1);
    assert_eq!(tickers["BTC/INR"].percentage_change, dec!(2.17));
    assert_signed(&only_request(&server).await);
}

#[tokio::test]
async fn test_ticker_not_found_names_operation() {
    let server = MockServer::start().await;
    Mock::given(path("/trade/api/v2/24hr/ticker"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server)
        .ticker_for(Exchange::CoinswitchX, "NOPE/INR")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unable to fetch ticker: HTTP 404");
}

#[tokio::test]
async fn test_each_request_signed_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(trades_body()))
        .mount(&server)
        .await;

    let client = client(&server);
    client.trades(Exchange::CoinswitchX, "BTC/INR").await.unwrap();
    client.trades(Exchange::Wazirx, "ETH/INR").await.unwrap();
    assert!(client.ping().await);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    for request in &requests {
        assert_signed(request);
    }

    let signatures: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("X-AUTH-SIGNATURE").unwrap().clone())
        .collect();
    assert_ne!(signatures[0], signatures[1]);
    assert_ne!(signatures[1], signatures[2]);
}

// ============================================================================
// Blocking client
// ============================================================================

#[test]
fn test_blocking_client() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(path("/trade/api/v2/ping"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(path("/trade/api/v2/depth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(depth_body()))
            .mount(&server)
            .await;
        server
    });

    let client = BlockingClient::with_config(config(&server)).unwrap();
    assert!(client.ping());

    let book = client.depth(Exchange::CoinswitchX, "BTC/INR").unwrap();
    assert_eq!(book.mid_price(), Some(dec!(2350000)));

    drop(client);
    runtime.block_on(async move { drop(server) });
}
