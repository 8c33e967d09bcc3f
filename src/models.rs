// src/models.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{GradeError, Result};

/// Criterion name mapped to an opaque descriptor such as
/// `{"weight": 0.4, "description": "..."}`.
pub type GradingCriteria = Map<String, Value>;

/// The uniform envelope returned for every grading call.
/// An empty `error` means the remote service graded the submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub error: String,
    pub score: f64,
    pub errors: Vec<String>,
    pub suggestions: Vec<String>,
}

impl GradingResult {
    /// A zero-score result carrying only an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }
}

impl From<GradeError> for GradingResult {
    fn from(err: GradeError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Body of `POST {base}/grading`.
#[derive(Serialize, Debug)]
pub(crate) struct GradingRequest<'a> {
    pub submission_text: &'a str,
    pub criteria: &'a GradingCriteria,
}

/// Turns a raw response body into a successful `GradingResult`.
///
/// The body must be a JSON object. Missing or null fields fall back to
/// their defaults; fields of the wrong shape make the whole body malformed.
pub(crate) fn parse_grading_response(body: &str) -> Result<GradingResult> {
    let value: Value = serde_json::from_str(body).map_err(|_| GradeError::MalformedResponse)?;
    let object = value.as_object().ok_or(GradeError::MalformedResponse)?;

    Ok(GradingResult {
        error: String::new(),
        score: coerce_score(object.get("score"))?,
        errors: string_list(object.get("errors"))?,
        suggestions: string_list(object.get("suggestions"))?,
    })
}

fn coerce_score(value: Option<&Value>) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or(GradeError::MalformedResponse),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| GradeError::MalformedResponse),
        Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(_) => Err(GradeError::MalformedResponse),
    }
}

fn string_list(value: Option<&Value>) -> Result<Vec<String>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or(GradeError::MalformedResponse)
            })
            .collect(),
        Some(_) => Err(GradeError::MalformedResponse),
    }
}
