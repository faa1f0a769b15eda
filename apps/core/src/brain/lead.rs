//! Lead quality scoring for sales inquiries.
//!
//! Weighted buying-signal detection in the BANT style: budget, timeline,
//! authority, scale. The score is a bounded 0-100 integer; every sales
//! inquiry starts from a base and earns points per detected signal. Only
//! consulted for messages already classified as sales inquiries.

use regex::Regex;
use std::sync::LazyLock;

use super::tone::ToneMetrics;

/// Floor for any message that classified as a sales inquiry at all
const BASE_SCORE: u8 = 35;

/// Bonus for an urgent-sounding buyer (tone score at or above the threshold)
const TONE_BONUS: u8 = 5;
const TONE_BONUS_THRESHOLD: f32 = 0.3;

const MAX_SCORE: u8 = 100;

/// A named buying signal with its score contribution
struct BuyingSignal {
    name: &'static str,
    pattern: Regex,
    weight: u8,
}

impl BuyingSignal {
    fn new(name: &'static str, pattern: &str, weight: u8) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Invalid regex for buying signal '{}': {}", name, e));
        Self {
            name,
            pattern,
            weight,
        }
    }
}

static BUYING_SIGNALS: LazyLock<Vec<BuyingSignal>> = LazyLock::new(|| {
    vec![
        BuyingSignal::new(
            "budget confirmed",
            r"(?i)\bbudget\b[\s\S]{0,30}\b(?:approved|allocated|confirmed|signed off|set aside)\b|\bapproved budget\b|\bhave (?:a |the )?budget\b",
            20,
        ),
        BuyingSignal::new(
            "purchase timeline",
            r"(?i)\bq[1-4]\b|\bthis (?:week|month|quarter)\b|\bnext (?:month|quarter)\b|\bby (?:the )?end of\b",
            15,
        ),
        BuyingSignal::new(
            "decision authority",
            r"(?i)\b(?:i am|i['’]m|as) the\s+(?:head|director|vp|cto|cio|ceo|founder|owner|manager)\b|\bdecision maker\b|\bsign(?:ing)? off\b",
            10,
        ),
        BuyingSignal::new(
            "enterprise scale",
            r"(?i)\benterprise\b|\bcompany-?wide\b|\b\d{2,}\s?(?:seats|users|licenses|licences|employees)\b",
            10,
        ),
        BuyingSignal::new(
            "pricing requested",
            r"(?i)\bpricing\b|\bprice list\b|\bquot(?:e|ation)\b|\bhow much\b",
            5,
        ),
        BuyingSignal::new(
            "demo requested",
            r"(?i)\b(?:demo|trial|proof of concept|poc|pilot)\b",
            5,
        ),
    ]
});

/// Result of lead scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadAssessment {
    /// Bounded score, 0-100
    pub score: u8,
    /// Names of the buying signals that matched, in table order
    pub signals: Vec<&'static str>,
}

/// Lead scorer over the buying-signal table
pub struct LeadScorer;

impl Default for LeadScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadScorer {
    /// Create a new lead scorer
    pub fn new() -> Self {
        Self
    }

    /// Score a sales-inquiry message
    pub fn assess(&self, text: &str, tone: &ToneMetrics) -> LeadAssessment {
        let mut score = BASE_SCORE as u16;
        let mut signals = Vec::new();

        for signal in BUYING_SIGNALS.iter() {
            if signal.pattern.is_match(text) {
                score += signal.weight as u16;
                signals.push(signal.name);
            }
        }

        if tone.score >= TONE_BONUS_THRESHOLD {
            score += TONE_BONUS as u16;
        }

        LeadAssessment {
            score: score.min(MAX_SCORE as u16) as u8,
            signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::tone::ToneScorer;

    fn assess(text: &str) -> LeadAssessment {
        let tone = ToneScorer::new().analyze(text);
        LeadScorer::new().assess(text, &tone)
    }

    #[test]
    fn test_strong_lead() {
        let lead = assess(
            "We have budget approved for Q3 and need pricing for an enterprise rollout this month.",
        );

        assert!(lead.signals.contains(&"budget confirmed"));
        assert!(lead.signals.contains(&"purchase timeline"));
        assert!(lead.signals.contains(&"enterprise scale"));
        assert!(lead.signals.contains(&"pricing requested"));
        assert_eq!(lead.score, 85);
    }

    #[test]
    fn test_weak_lead_gets_base_score() {
        let lead = assess("I was looking at your product page yesterday.");

        assert!(lead.signals.is_empty());
        assert_eq!(lead.score, BASE_SCORE);
    }

    #[test]
    fn test_score_is_bounded() {
        let lead = assess(
            "I'm the CTO and the decision maker. Budget approved, need pricing and a quote \
             for 500 seats enterprise-wide, demo this week, signing off by end of Q2 asap right away!",
        );

        assert!(lead.score <= 100);
        assert!(lead.signals.len() >= 5);
    }

    #[test]
    fn test_urgent_buyer_bonus() {
        let calm = assess("Need pricing for 20 seats.");
        let urgent = assess("Need pricing for 20 seats immediately, right away asap!");

        assert!(urgent.score > calm.score);
    }
}
