// src/errors.rs
use thiserror::Error;

/// Every failure the grading client can run into.
///
/// The `Display` text of a variant is exactly what ends up in
/// `GradingResult::error`, so keep the wording stable.
#[derive(Error, Debug)]
pub enum GradeError {
    #[error("submission text must not be empty")]
    EmptySubmission,

    #[error("criteria must be a non-empty mapping")]
    InvalidCriteria,

    #[error("request failed: {}", error_chain(.0))]
    Request(#[from] reqwest::Error),

    #[error("request failed: HTTP {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("API returned malformed data")]
    MalformedResponse,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML job file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to parse JSON job file: {0}")]
    JsonParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GradeError>;

/// Joins an error with its sources, e.g.
/// `error sending request for url (...): operation timed out`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // reqwest and hyper sometimes repeat the inner message verbatim
        if !out.ends_with(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}
