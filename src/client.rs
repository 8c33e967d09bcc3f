// src/client.rs

use log::{debug, info, warn};
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::errors::{GradeError, Result};
use crate::models::{parse_grading_response, GradingCriteria, GradingRequest, GradingResult};

/// Anything that can grade a submission against a rubric.
pub trait Grader: Send + Sync {
    fn grade(
        &self,
        text: &str,
        criteria: &GradingCriteria,
    ) -> impl std::future::Future<Output = GradingResult> + Send;
}

/// Client for the remote grading API.
///
/// Holds no per-call state, so one instance can be cloned and shared
/// freely across tasks.
#[derive(Clone)]
pub struct GradingClient {
    client: Client,
    config: ClientConfig,
}

impl GradingClient {
    /// Creates a `GradingClient` with its own HTTP client using the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// Creates a `GradingClient` on top of an existing HTTP client.
    /// The configured timeout is still applied to every request.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submits `text` for grading against `criteria`.
    ///
    /// Always returns a result; validation, transport and decoding failures
    /// are reported through its `error` field.
    pub async fn submit_for_grading(&self, text: &str, criteria: &GradingCriteria) -> GradingResult {
        let request_id = Uuid::new_v4();
        match self.try_submit(request_id, text, criteria).await {
            Ok(result) => result,
            Err(e) => {
                warn!("⚠️  Grading request {} failed: {}", request_id, e);
                e.into()
            }
        }
    }

    /// Same as [`submit_for_grading`](Self::submit_for_grading) for loosely typed input,
    /// e.g. values decoded from JSON. Non-string text counts as empty text and
    /// anything other than an object counts as invalid criteria.
    pub async fn submit_value(&self, text: &Value, criteria: &Value) -> GradingResult {
        let no_criteria = GradingCriteria::new();
        let text = text.as_str().unwrap_or_default();
        let criteria = criteria.as_object().unwrap_or(&no_criteria);
        self.submit_for_grading(text, criteria).await
    }

    async fn try_submit(
        &self,
        request_id: Uuid,
        text: &str,
        criteria: &GradingCriteria,
    ) -> Result<GradingResult> {
        let submission_text = validate(text, criteria)?;

        let url = self.config.grading_url();
        let body = GradingRequest {
            submission_text,
            criteria,
        };

        info!("📡 Submitting request {} to {} ({} criteria)", request_id, url, criteria.len());
        debug!("Submission text is {} bytes", submission_text.len());

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("X-Request-Id", request_id.to_string())
            .timeout(self.config.timeout())
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        info!("📥 Grading response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(GradeError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let raw = resp.text().await?;
        parse_grading_response(&raw)
    }
}

impl Grader for GradingClient {
    async fn grade(&self, text: &str, criteria: &GradingCriteria) -> GradingResult {
        self.submit_for_grading(text, criteria).await
    }
}

/// Checks the input before any network activity and returns the trimmed text.
fn validate<'a>(text: &'a str, criteria: &GradingCriteria) -> Result<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GradeError::EmptySubmission);
    }
    if criteria.is_empty() {
        return Err(GradeError::InvalidCriteria);
    }
    Ok(trimmed)
}
