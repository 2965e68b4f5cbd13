//! End-to-end integration tests

use crate::stub::serve_once;
use rust_decimal_macros::dec;
use spread_watch::cli::build_monitor;
use spread_watch::config::Config;
use spread_watch::monitor::PollOutcome;
use spread_watch::pricing::FillRegime;

fn config(binance_url: &str, gate_url: &str, dingtalk_url: &str) -> Config {
    let toml = format!(
        r#"
        [monitor]
        base_asset = "USUAL"
        quantity = 3000
        diff_threshold = 0.12
        interval_secs = 5

        [binance]
        base_url = "{binance_url}"
        use_proxy = false

        [gate]
        base_url = "{gate_url}"

        [notify]
        dingtalk_token = "tok"
        base_url = "{dingtalk_url}/robot/send"

        [telemetry]
        log_level = "info"
        "#
    );
    Config::parse(&toml).unwrap()
}

#[test]
fn test_config_example_exists() {
    let config = Config::parse(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.monitor.pair().binance_symbol(), "USUALUSDT");
}

#[tokio::test]
async fn test_poll_alerts_when_spread_crosses_threshold() {
    let (binance_url, _b) = serve_once(
        200,
        r#"{"symbol":"USUALUSDT","bidPrice":"0.1490","bidQty":"100","askPrice":"0.1500","askQty":"100"}"#,
    )
    .await;
    let (gate_url, _g) = serve_once(
        200,
        r#"{"current":1704067200123,"asks":[],"bids":[["0.1700","2000"],["0.1690","5000"]]}"#,
    )
    .await;
    let (dingtalk_url, dingtalk_request) = serve_once(200, r#"{"errcode":0,"errmsg":"ok"}"#).await;

    let mut monitor = build_monitor(&config(&binance_url, &gate_url, &dingtalk_url)).unwrap();
    let outcome = monitor.poll_once().await;

    let obs = match outcome {
        PollOutcome::Alerted(obs) => obs,
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert_eq!(obs.ask_price, dec!(0.15));
    assert_eq!(obs.estimate.regime, FillRegime::Blended);
    assert!(obs.ratio > dec!(0.13));

    let request = dingtalk_request.await.unwrap();
    assert!(request.body.contains("Gate/Binance USUAL spread"));
}

#[tokio::test]
async fn test_poll_skips_when_venue_down() {
    let (binance_url, _b) = serve_once(503, "{}").await;
    let (gate_url, _g) = serve_once(200, r#"{"bids":[["1","1"],["1","1"]]}"#).await;

    let mut monitor = build_monitor(&config(&binance_url, &gate_url, "http://127.0.0.1:9")).unwrap();
    assert!(matches!(
        monitor.poll_once().await,
        PollOutcome::Skipped(_)
    ));
}
