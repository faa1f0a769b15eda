//! DecisionBrief core.
//!
//! Heuristic triage for pasted business messages: classify risk and intent,
//! then hand the operator a structured decision brief. No model inference,
//! no network calls, no stored state.

pub mod brain;
pub mod error;
pub mod models;
pub mod samples;
pub mod telemetry;

pub use error::AppError;

// Re-export commonly used types
pub use brain::{DecisionBrief, MessageAnalyzer, RiskLevel};
pub use models::{IncomingMessage, TriageRecord};

#[cfg(test)]
mod tests;
