//! DingTalk robot webhook notifier
//!
//! Sends markdown messages to `POST {base_url}?access_token={token}`.
//! DingTalk answers 200 even for rejected messages, so the `errcode` in
//! the response body is checked as well.

use super::{Notifier, NotifyError};
use crate::feed::build_http_client;
use crate::signal::Alert;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// DingTalk robot send endpoint
pub const DINGTALK_API_URL: &str = "https://oapi.dingtalk.com/robot/send";

/// Configuration for the DingTalk notifier
#[derive(Debug, Clone)]
pub struct DingTalkConfig {
    /// Robot send endpoint
    pub base_url: String,
    /// Robot access token
    pub access_token: String,
    /// Request timeout
    pub timeout: Duration,
}

impl DingTalkConfig {
    /// Configuration for the public endpoint with the given token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DINGTALK_API_URL.to_string(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Serialize)]
struct MarkdownMessage<'a> {
    msgtype: &'static str,
    markdown: MarkdownBody<'a>,
}

#[derive(Debug, Serialize)]
struct MarkdownBody<'a> {
    title: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RobotResponse {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

/// DingTalk robot notifier
pub struct DingTalkNotifier {
    config: DingTalkConfig,
    client: Client,
}

impl DingTalkNotifier {
    /// Create a notifier, building its HTTP client
    pub fn new(config: DingTalkConfig) -> Result<Self, NotifyError> {
        let client = build_http_client(config.timeout, None)?;
        Ok(Self { config, client })
    }

    fn payload(alert: &Alert) -> MarkdownMessage<'_> {
        MarkdownMessage {
            msgtype: "markdown",
            markdown: MarkdownBody {
                title: &alert.title,
                text: &alert.text,
            },
        }
    }

    /// Check the robot response body; an unparseable body counts as accepted
    fn check_response(body: &str) -> Result<(), NotifyError> {
        match serde_json::from_str::<RobotResponse>(body) {
            Ok(resp) if resp.errcode != 0 => Err(NotifyError::Rejected {
                code: resp.errcode,
                message: resp.errmsg,
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Notifier for DingTalkNotifier {
    fn name(&self) -> &'static str {
        "dingtalk"
    }

    async fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.config.base_url)
            .query(&[("access_token", self.config.access_token.as_str())])
            .json(&Self::payload(alert))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status));
        }

        let body = response.text().await?;
        Self::check_response(&body)?;

        tracing::info!(title = %alert.title, "Notification sent successfully");
        Ok(())
    }
}
