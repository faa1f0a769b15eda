//! # Brain Module
//!
//! Heuristic triage system for DecisionBrief.
//! Turns a pasted business message into a structured decision brief without
//! calling a model or the network.
//!
//! ## Components
//! - `risk`: risk classification from named regex indicators, in fixed
//!   precedence order (fraud, escalation, sales inquiry, general)
//! - `tone`: urgency and hostility scoring
//! - `lead`: buying-signal scoring for sales inquiries
//! - `playbook`: composes the brief's text fields per category
//! - `brief`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod brief;
pub mod lead;
pub mod playbook;
pub mod risk;
pub mod tone;

// Re-export main types for convenience
pub use analyzer::MessageAnalyzer;
pub use brief::{DecisionBrief, RiskLevel, NOT_APPLICABLE};
pub use lead::{LeadAssessment, LeadScorer};
pub use risk::{CategoryMatch, MessageCategory, RiskClassifier};
pub use tone::{ToneMetrics, ToneScorer};
