// src/action.rs
//
// Downstream side of a confirmed trigger. The detector places no
// constraint on what happens here; failures go back to the frame loop,
// which owns the recovery policy.

use crate::types::{ActionConfig, TriggerEvent};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

pub struct ActionDispatcher {
    config: ActionConfig,
    http_client: reqwest::Client,
}

impl ActionDispatcher {
    pub fn new(config: ActionConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Invoked by the frame loop for every accepted trigger.
    pub async fn dispatch(&self, event: &TriggerEvent) -> Result<()> {
        info!(
            "scroll up {} (score {:.2} at {:.2}s)",
            self.config.scroll_amount, event.score, event.timestamp
        );

        if !self.config.send_to_api {
            return Ok(());
        }

        let payload = serde_json::json!({
            "event": "eye_roll_up",
            "timestamp": event.timestamp,
            "score": event.score,
            "consecutive_frames": event.consecutive_frames,
            "scroll_amount": self.config.scroll_amount,
        });

        let resp = self
            .http_client
            .post(&self.config.api_url)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to reach action endpoint {}", self.config.api_url))?;

        if !resp.status().is_success() {
            anyhow::bail!("Action endpoint returned {}", resp.status());
        }
        Ok(())
    }
}
