//! Message Analyzer - Main orchestrator for the triage brain.
//!
//! Coordinates risk classification, tone scoring, lead scoring, and brief
//! composition. The surface is a single pure call: identical input always
//! produces an identical brief, there are no side effects beyond a debug
//! log event, and there is no failure path.

use tracing::debug;

use super::brief::DecisionBrief;
use super::lead::LeadScorer;
use super::playbook;
use super::risk::{MessageCategory, RiskClassifier};
use super::tone::ToneScorer;

/// Main analyzer that orchestrates all triage components
pub struct MessageAnalyzer {
    risk_classifier: RiskClassifier,
    tone_scorer: ToneScorer,
    lead_scorer: LeadScorer,
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageAnalyzer {
    /// Create a new analyzer with the built-in indicator tables
    pub fn new() -> Self {
        Self {
            risk_classifier: RiskClassifier::new(),
            tone_scorer: ToneScorer::new(),
            lead_scorer: LeadScorer::new(),
        }
    }

    /// Analyze a message and produce a decision brief.
    ///
    /// Empty or whitespace-only input yields a defined neutral brief rather
    /// than an error.
    pub fn analyze(&self, input: &str) -> DecisionBrief {
        let text = input.trim();

        if text.is_empty() {
            return playbook::empty_brief();
        }

        let category = self.risk_classifier.classify(text);
        let tone = self.tone_scorer.analyze(text);

        let brief = match category.category {
            MessageCategory::Fraud => playbook::fraud_brief(&category.matched),
            MessageCategory::Escalation => playbook::escalation_brief(&category.matched, &tone),
            MessageCategory::SalesInquiry => {
                let lead = self.lead_scorer.assess(text, &tone);
                playbook::sales_brief(&category.matched, &lead)
            }
            MessageCategory::General => playbook::general_brief(),
        };

        debug!(
            category = category.category.label(),
            confidence = category.confidence,
            matched = ?category.matched,
            tone = tone.score,
            "message triaged"
        );

        brief
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::brief::RiskLevel;

    #[test]
    fn test_fraud_message() {
        let analyzer = MessageAnalyzer::new();

        let brief = analyzer.analyze(
            "Hi team, this is the CFO. Please wire $45,000 to the vendor immediately. \
             Use the new account in the attached PDF and confirm within the hour.",
        );

        assert_eq!(brief.risk_level, RiskLevel::HighRiskFraud);
        assert!(brief.suggested_reply.is_none());
        assert!(brief.lead_quality_score.is_none());
    }

    #[test]
    fn test_sales_message() {
        let analyzer = MessageAnalyzer::new();

        let brief = analyzer.analyze(
            "Hello, I'm interested in your enterprise analytics suite. We have budget \
             approved for Q3 and need pricing plus implementation timeline this month.",
        );

        assert_eq!(brief.risk_level, RiskLevel::Routine);
        let score = brief.lead_quality_score.expect("sales inquiry should be scored");
        assert!(score <= 100);
        assert!(brief.suggested_reply.is_some());
    }

    #[test]
    fn test_escalation_message() {
        let analyzer = MessageAnalyzer::new();

        let brief = analyzer.analyze(
            "We're seeing repeated outages on the API since yesterday. Our customers are \
             angry, what is the ETA for a fix? Need escalation.",
        );

        assert_eq!(brief.risk_level, RiskLevel::Suspicious);
        assert!(brief.recommended_action.contains("priority"));
    }

    #[test]
    fn test_empty_message() {
        let analyzer = MessageAnalyzer::new();

        for input in ["", "   ", "\n\t "] {
            let brief = analyzer.analyze(input);
            assert_eq!(brief.risk_level, RiskLevel::Routine);
            assert!(!brief.reason.is_empty());
            assert!(brief.lead_quality_score.is_none());
        }
    }

    #[test]
    fn test_fraud_precedence_over_sales() {
        let analyzer = MessageAnalyzer::new();

        let brief = analyzer.analyze(
            "We have budget approved and want pricing, but first wire $20,000 to the new \
             account immediately.",
        );

        assert_eq!(brief.risk_level, RiskLevel::HighRiskFraud);
        assert!(brief.lead_quality_score.is_none());
    }

    #[test]
    fn test_determinism() {
        let analyzer = MessageAnalyzer::new();
        let message = "Need pricing for 40 seats, budget approved, demo this month please!";

        let first = analyzer.analyze(message);
        let second = analyzer.analyze(message);

        assert_eq!(first, second);
    }

    #[test]
    fn test_unremarkable_message_is_routine() {
        let analyzer = MessageAnalyzer::new();

        let brief = analyzer.analyze("Attached are the meeting notes from Tuesday.");

        assert_eq!(brief.risk_level, RiskLevel::Routine);
        assert!(brief.lead_quality_score.is_none());
        assert!(!brief.business_insight.is_empty());
    }
}
