//! Integration tests for venue REST clients

use crate::stub::serve_once;
use rust_decimal_macros::dec;
use spread_watch::feed::{
    BinanceClient, BinanceConfig, DepthFeed, FeedError, GateClient, GateConfig, TickerFeed,
    TradingPair,
};

fn pair() -> TradingPair {
    TradingPair::new("USUAL", "USDT")
}

#[tokio::test]
async fn test_binance_book_ticker() {
    let body = r#"{"symbol":"USUALUSDT","bidPrice":"0.15120000","bidQty":"8123.40000000","askPrice":"0.15130000","askQty":"920.10000000"}"#;
    let (base_url, captured) = serve_once(200, body).await;

    let client = BinanceClient::with_config(BinanceConfig {
        base_url,
        ..BinanceConfig::default()
    })
    .unwrap();

    let ticker = client.book_ticker(&pair()).await.unwrap();
    assert_eq!(ticker.symbol, "USUALUSDT");
    assert_eq!(ticker.ask_price, dec!(0.1513));

    let request = captured.await.unwrap();
    assert_eq!(
        request.request_line,
        "GET /api/v3/ticker/bookTicker?symbol=USUALUSDT HTTP/1.1"
    );
}

#[tokio::test]
async fn test_binance_error_status() {
    let (base_url, _captured) = serve_once(400, r#"{"code":-1121,"msg":"Invalid symbol."}"#).await;

    let client = BinanceClient::with_config(BinanceConfig {
        base_url,
        ..BinanceConfig::default()
    })
    .unwrap();

    let err = client.book_ticker(&pair()).await.unwrap_err();
    match err {
        FeedError::Status { venue, status, body } => {
            assert_eq!(venue, "binance");
            assert_eq!(status.as_u16(), 400);
            assert!(body.contains("Invalid symbol"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_gate_order_book() {
    let body = r#"{"id":1,"current":1704067200123,"update":1704067200120,"asks":[["0.1525","1200.5"]],"bids":[["0.1521","900"],["0.1520","4100.25"]]}"#;
    let (base_url, captured) = serve_once(200, body).await;

    let client = GateClient::with_config(GateConfig {
        base_url,
        depth: 5,
        ..GateConfig::default()
    })
    .unwrap();

    let book = client.order_book(&pair()).await.unwrap();
    assert_eq!(book.symbol, "USUAL_USDT");
    let (best, second) = book.top_two_bids().unwrap();
    assert_eq!(best.price, dec!(0.1521));
    assert_eq!(second.size, dec!(4100.25));

    let request = captured.await.unwrap();
    assert_eq!(
        request.request_line,
        "GET /api/v4/spot/order_book?currency_pair=USUAL_USDT&limit=5 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_gate_malformed_body() {
    let (base_url, _captured) = serve_once(200, "not json").await;

    let client = GateClient::with_config(GateConfig {
        base_url,
        ..GateConfig::default()
    })
    .unwrap();

    let err = client.order_book(&pair()).await.unwrap_err();
    assert!(matches!(err, FeedError::Decode { venue: "gate", .. }));
}
