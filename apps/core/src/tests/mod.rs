//! Test Module
//!
//! End-to-end suite for the DecisionBrief triage brain.
//!
//! ## Test Categories
//! - `triage_tests`: full-pipeline properties of the analyzer and its
//!   output contract (closed risk vocabulary, precedence, determinism,
//!   optional-field exclusivity, serialized field names)
