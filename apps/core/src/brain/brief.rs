//! Decision Brief - Output structure for message triage.
//!
//! The brief is the structured summary handed to the operator. Field names
//! and the `RiskLevel` labels are a rendering contract: downstream display
//! code matches on the exact serialized strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display string for optional fields that do not apply to a message.
pub const NOT_APPLICABLE: &str = "N/A";

/// Closed-set risk classification for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Payment-fraud or social-engineering indicators present
    #[serde(rename = "High Risk Fraud")]
    HighRiskFraud,
    /// Escalation or complaint requiring priority handling
    Suspicious,
    /// No elevated-risk indicators; normal handling
    Routine,
}

impl RiskLevel {
    /// Returns the exact display label the rendering layer keys on
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::HighRiskFraud => "High Risk Fraud",
            RiskLevel::Suspicious => "Suspicious",
            RiskLevel::Routine => "Routine",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Complete decision brief for one analyzed message.
///
/// Produced fresh per call and owned by the caller. The two optional fields
/// are populated only for sales-inquiry messages; `None` means "does not
/// apply", never "applies but blank".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionBrief {
    /// Overall risk classification
    pub risk_level: RiskLevel,

    /// Why this risk level was assigned
    pub reason: String,

    /// Potential consequence for the business
    pub business_impact: String,

    /// Suggested next step for the operator
    pub recommended_action: String,

    /// Draft reply text, only when applicable
    pub suggested_reply: Option<String>,

    /// Lead quality score (0-100), only for sales inquiries
    pub lead_quality_score: Option<u8>,

    /// Observation about the message's business context
    pub business_insight: String,
}

impl DecisionBrief {
    /// Returns (label, value) rows in presentation order, substituting
    /// `N/A` for absent optional fields.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Risk Level", self.risk_level.label().to_string()),
            ("Reason", self.reason.clone()),
            ("Business Impact", self.business_impact.clone()),
            ("Recommended Action", self.recommended_action.clone()),
            (
                "Suggested Reply (if applicable)",
                self.suggested_reply
                    .clone()
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            ),
            (
                "Lead Quality Score (if applicable)",
                self.lead_quality_score
                    .map(|score| score.to_string())
                    .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            ),
            ("Business Insight", self.business_insight.clone()),
        ]
    }

    /// Get a one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Risk: {}, Lead score: {}, Reply drafted: {}",
            self.risk_level,
            self.lead_quality_score
                .map(|score| score.to_string())
                .unwrap_or_else(|| "none".to_string()),
            if self.suggested_reply.is_some() {
                "yes"
            } else {
                "no"
            }
        )
    }
}
