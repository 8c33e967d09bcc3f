// src/config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{GradeError, Result};
use crate::models::GradingCriteria;

pub const DEFAULT_API_BASE: &str = "https://doubao.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the remote grading API.
/// Built once and held for the life of a `GradingClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_base: String,
    api_key: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Settings with the default endpoint and a 10 second timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base: strip_trailing_slash(DEFAULT_API_BASE),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = strip_trailing_slash(api_base);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_secs(self, secs: u64) -> Self {
        self.with_timeout(Duration::from_secs(secs))
    }

    /// Load configuration from environment variables
    ///
    /// `GRADING_API_KEY` is required; `GRADING_API_BASE` and
    /// `GRADING_TIMEOUT_SECS` fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with variables looked up through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = var("GRADING_API_KEY").ok_or_else(|| {
            GradeError::Config("GRADING_API_KEY is not set. Please export your grading API key.".to_string())
        })?;

        let mut config = ClientConfig::new(api_key);

        if let Some(api_base) = var("GRADING_API_BASE") {
            config = config.with_api_base(&api_base);
        }

        if let Some(raw) = var("GRADING_TIMEOUT_SECS") {
            let secs = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(GradeError::Config(format!(
                        "GRADING_TIMEOUT_SECS must be a positive whole number of seconds, got '{}'",
                        raw
                    )));
                }
            };
            config = config.with_timeout_secs(secs);
        }

        Ok(config)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the grading endpoint.
    pub fn grading_url(&self) -> String {
        format!("{}/grading", self.api_base)
    }
}

fn strip_trailing_slash(api_base: &str) -> String {
    api_base.trim_end_matches('/').to_string()
}

/// One submission plus the rubric to grade it against, as read from a job file.
///
/// ```toml
/// submission_file = "essay.txt"
///
/// [criteria.content_relevance]
/// weight = 0.4
/// description = "How well the content matches the topic"
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct GradingJob {
    /// Inline submission text
    #[serde(default)]
    pub submission: Option<String>,

    /// Path to a file holding the submission, relative to the job file
    #[serde(default)]
    pub submission_file: Option<PathBuf>,

    pub criteria: GradingCriteria,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl GradingJob {
    /// Reads a job from disk. `.json` files are parsed as JSON, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;

        let mut job = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&raw)?,
            _ => Self::from_toml_str(&raw)?,
        };
        job.base_dir = path.parent().map(Path::to_path_buf);
        Ok(job)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolves the submission text, preferring the inline value.
    pub fn submission_text(&self) -> Result<String> {
        if let Some(text) = &self.submission {
            return Ok(text.clone());
        }

        let file = self.submission_file.as_ref().ok_or_else(|| {
            GradeError::Config("job needs either `submission` or `submission_file`".to_string())
        })?;

        let path = match &self.base_dir {
            Some(dir) if file.is_relative() => dir.join(file),
            _ => file.clone(),
        };
        Ok(std::fs::read_to_string(path)?)
    }
}
