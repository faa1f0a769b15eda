//! Input and output records around the triage brain.
//!
//! `IncomingMessage` mirrors the submit-time validation the operator surface
//! performs before calling the analyzer. `TriageRecord` wraps a brief for
//! serialized output; the id and timestamp live here, not in the brief, so
//! the analyzer stays deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::brain::DecisionBrief;
use crate::error::AppError;

/// Default cap on accepted message size, overridable via the environment
const DEFAULT_MAX_MESSAGE_BYTES: usize = 20_000;
const MAX_BYTES_ENV: &str = "BRIEF_MAX_MESSAGE_BYTES";

/// A validated message ready for analysis
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IncomingMessage {
    #[validate(length(min = 1, message = "Provide a message to analyze."))]
    body: String,
}

impl IncomingMessage {
    /// Validate raw text into an analyzable message.
    ///
    /// Rejects empty or whitespace-only input and bodies above the size cap.
    pub fn parse(body: String) -> Result<Self, AppError> {
        let candidate = Self { body };
        candidate.validate()?;

        if candidate.body.trim().is_empty() {
            return Err(AppError::Validation(
                "Provide a message to analyze.".to_string(),
            ));
        }

        let limit = max_message_bytes()?;
        if candidate.body.len() > limit {
            return Err(AppError::Validation(format!(
                "Message exceeds the {} byte limit.",
                limit
            )));
        }

        Ok(candidate)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

fn max_message_bytes() -> Result<usize, AppError> {
    match std::env::var(MAX_BYTES_ENV) {
        Ok(raw) => raw.parse().map_err(|_| {
            AppError::Config(format!("{} must be a positive integer", MAX_BYTES_ENV))
        }),
        Err(_) => Ok(DEFAULT_MAX_MESSAGE_BYTES),
    }
}

/// One completed triage, ready for serialized output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageRecord {
    /// Unique identifier for this triage
    pub id: Uuid,
    /// When the message was processed
    pub received_at: DateTime<Utc>,
    /// The analyzed message text
    pub message: String,
    /// The resulting decision brief
    pub brief: DecisionBrief,
}

impl TriageRecord {
    /// Wrap a brief with a fresh id and timestamp
    pub fn new(message: String, brief: DecisionBrief) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            message,
            brief,
        }
    }
}
