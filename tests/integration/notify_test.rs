//! Integration tests for the DingTalk notifier

use crate::stub::serve_once;
use spread_watch::notify::{DingTalkConfig, DingTalkNotifier, Notifier, NotifyError};
use spread_watch::signal::Alert;
use std::time::Duration;

fn notifier(base_url: String) -> DingTalkNotifier {
    DingTalkNotifier::new(DingTalkConfig {
        base_url: format!("{base_url}/robot/send"),
        access_token: "tok123".to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_dingtalk_sends_markdown() {
    let (base_url, captured) = serve_once(200, r#"{"errcode":0,"errmsg":"ok"}"#).await;

    let alert = Alert::new("Spread alert", "- Spread: 0.02");
    notifier(base_url).notify(&alert).await.unwrap();

    let request = captured.await.unwrap();
    assert_eq!(
        request.request_line,
        "POST /robot/send?access_token=tok123 HTTP/1.1"
    );
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["msgtype"], "markdown");
    assert_eq!(body["markdown"]["title"], "Spread alert");
    assert_eq!(body["markdown"]["text"], "- Spread: 0.02");
}

#[tokio::test]
async fn test_dingtalk_rejected_message() {
    let (base_url, _captured) =
        serve_once(200, r#"{"errcode":300001,"errmsg":"token is not exist"}"#).await;

    let err = notifier(base_url)
        .notify(&Alert::new("t", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, NotifyError::Rejected { code: 300001, .. }));
}

#[tokio::test]
async fn test_dingtalk_http_error() {
    let (base_url, _captured) = serve_once(500, "{}").await;

    let err = notifier(base_url)
        .notify(&Alert::new("t", "x"))
        .await
        .unwrap_err();
    match err {
        NotifyError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("unexpected error: {other}"),
    }
}
