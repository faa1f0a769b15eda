//! Risk classification using named regex indicators.
//!
//! Categories are evaluated in fixed precedence order: fraud, then
//! escalation, then sales inquiry, then the general fallback. The first
//! group with at least one matching indicator wins outright; lower groups
//! are never consulted, no matter how many of their indicators match.
//! Confidence is reported for logging and reason wording only and never
//! changes the winner.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::brief::RiskLevel;

/// Detected message category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    /// Payment fraud or social engineering
    Fraud,
    /// Complaint, outage report, or escalation demand
    Escalation,
    /// Purchase interest (pricing, budget, evaluation)
    SalesInquiry,
    /// No strong indicators matched
    General,
}

impl MessageCategory {
    /// Returns a short machine-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            MessageCategory::Fraud => "fraud",
            MessageCategory::Escalation => "escalation",
            MessageCategory::SalesInquiry => "sales_inquiry",
            MessageCategory::General => "general",
        }
    }

    /// Risk level this category maps to
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            MessageCategory::Fraud => RiskLevel::HighRiskFraud,
            MessageCategory::Escalation => RiskLevel::Suspicious,
            MessageCategory::SalesInquiry | MessageCategory::General => RiskLevel::Routine,
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named indicator pattern. The name is echoed verbatim in the brief's
/// reason text, so it reads as prose ("executive impersonation").
#[derive(Debug, Clone)]
pub struct Indicator {
    name: &'static str,
    pattern: Regex,
}

impl Indicator {
    fn new(name: &'static str, pattern: &str) -> Self {
        // Static tables, compiled once at first use. A bad pattern is a
        // programmer error and panics at startup rather than at match time.
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Invalid regex for indicator '{}': {}", name, e));
        Self { name, pattern }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Result of category classification
#[derive(Debug, Clone)]
pub struct CategoryMatch {
    /// Winning category
    pub category: MessageCategory,
    /// Names of the indicators that matched, in table order
    pub matched: Vec<&'static str>,
    /// Confidence (0.0 - 1.0); three matched indicators saturate it
    pub confidence: f32,
}

/// Indicator group for one category
struct IndicatorGroup {
    category: MessageCategory,
    indicators: Vec<Indicator>,
    weight: f32,
}

static FRAUD_INDICATORS: LazyLock<Vec<Indicator>> = LazyLock::new(|| {
    vec![
        Indicator::new(
            "wire transfer request",
            r"(?i)\b(?:wire|transfer)\s+\$?\d[\d,]*|\bwire\s+(?:transfer|payment|the\s+(?:funds|money))",
        ),
        Indicator::new(
            "executive impersonation",
            r"(?i)\b(?:this is|i am|i['’]m)\s+(?:the\s+|your\s+)?(?:ceo|cfo|coo|cto|president|founder|owner)\b",
        ),
        Indicator::new(
            "changed account details",
            r"(?i)\b(?:new|updated|changed|different)\s+(?:bank\s+)?account\b|\bupdate\s+(?:our|the|your)\s+(?:bank|payment)\s+(?:details|information|info)\b",
        ),
        Indicator::new(
            "payment under time pressure",
            r"(?i)\b(?:pay(?:ment)?|invoice|funds?|transfer|wire)\b[\s\S]{0,80}\b(?:urgent(?:ly)?|immediately|right away|asap|within the hour|by end of (?:day|business)|today)\b|\b(?:urgent(?:ly)?|immediately|right away|asap)\b[\s\S]{0,80}\b(?:pay(?:ment)?|invoice|funds?|transfer|wire)\b",
        ),
        Indicator::new(
            "deadline to confirm",
            r"(?i)\bconfirm within\b|\bwithin the hour\b",
        ),
        Indicator::new(
            "secrecy pressure",
            r"(?i)\bkeep (?:this|it) (?:confidential|quiet|between us)\b|\bdo not (?:tell|discuss|share)\b|\bdon['’]?t tell anyone\b",
        ),
        Indicator::new("gift card demand", r"(?i)\bgift\s?cards?\b"),
        Indicator::new(
            "crypto payment demand",
            r"(?i)\b(?:bitcoin|btc|crypto(?:currency)?)\b[\s\S]{0,40}\b(?:payment|wallet|transfer|address)\b|\bpay(?:ment)?\b[\s\S]{0,40}\b(?:bitcoin|btc|crypto(?:currency)?)\b",
        ),
        Indicator::new(
            "credential bait",
            r"(?i)\b(?:verify|confirm|validate)\s+(?:your|the)\s+(?:password|credentials|account|identity)\b|\b(?:login|password)\s+(?:details|credentials)\b|\bclick\s+(?:the|this)\s+link\b",
        ),
    ]
});

static ESCALATION_INDICATORS: LazyLock<Vec<Indicator>> = LazyLock::new(|| {
    vec![
        Indicator::new(
            "service outage",
            r"(?i)\b(?:outages?|downtime|down\s?time|(?:service|system|site|api) (?:is|was|has been) down|not working|stopped working|broken)\b",
        ),
        Indicator::new(
            "repeated failures",
            r"(?i)\b(?:repeated(?:ly)?|recurring|constant(?:ly)?|still|again)\b[\s\S]{0,30}\b(?:outages?|fail(?:s|ed|ure|ures|ing)?|errors?|issues?|problems?|crash(?:es|ed|ing)?)\b",
        ),
        Indicator::new(
            "escalation demand",
            r"(?i)\bescalat(?:e|ed|ion|ing)\b|\bspeak (?:to|with) (?:a |your )?(?:manager|supervisor)\b",
        ),
        Indicator::new(
            "hostile language",
            r"(?i)\b(?:angry|furious|outraged|unacceptable|fed up|frustrated|ridiculous|worst)\b",
        ),
        Indicator::new(
            "fix deadline demand",
            r"(?i)\b(?:eta|sla)\b|\bwhen will (?:this|it) be fixed\b|\bfix (?:this|it) (?:now|today|immediately)\b",
        ),
        Indicator::new(
            "cancellation threat",
            r"(?i)\bcancel (?:my|our|the) (?:account|subscription|contract|service)\b|\bchargeback\b|\brefunds?\b",
        ),
        Indicator::new(
            "legal threat",
            r"(?i)\b(?:lawyer|attorney|legal action|lawsuit|sue you|small claims)\b",
        ),
        Indicator::new(
            "churn signal",
            r"(?i)\bswitch(?:ing)? to (?:a )?competitor\b|\btake (?:my|our) business elsewhere\b|\blosing (?:my|our) patience\b",
        ),
    ]
});

static SALES_INDICATORS: LazyLock<Vec<Indicator>> = LazyLock::new(|| {
    vec![
        Indicator::new(
            "pricing request",
            r"(?i)\bpricing\b|\bprice list\b|\bquot(?:e|ation)\b|\bcost estimate\b|\bhow much (?:does|would|is)\b",
        ),
        Indicator::new("budget mention", r"(?i)\bbudget\b"),
        Indicator::new(
            "purchase timeline",
            r"(?i)\bq[1-4]\b|\bthis (?:week|month|quarter)\b|\bnext (?:month|quarter)\b|\bby (?:the )?end of (?:the )?(?:month|quarter|year)\b",
        ),
        Indicator::new(
            "evaluation language",
            r"(?i)\b(?:interested in|looking (?:for|into|at)|evaluating|considering|comparing|shopping for)\b",
        ),
        Indicator::new(
            "enterprise scale",
            r"(?i)\benterprise\b|\bcompany-?wide\b|\borganization-?wide\b|\b\d+\s?(?:seats|users|licenses|licences)\b",
        ),
        Indicator::new(
            "demo or trial request",
            r"(?i)\b(?:demo|trial|proof of concept|poc|pilot)\b",
        ),
        Indicator::new(
            "implementation planning",
            r"(?i)\b(?:implementation|onboarding|rollout|integration|deployment)\s+(?:timeline|plan|schedule|support)\b",
        ),
        Indicator::new(
            "procurement language",
            r"(?i)\b(?:procurement|purchase order|rfp|rfq|contract terms|vendor (?:form|onboarding))\b",
        ),
    ]
});

/// Risk classifier over the ordered indicator tables
pub struct RiskClassifier {
    groups: Vec<IndicatorGroup>,
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskClassifier {
    /// Create a classifier with the built-in indicator tables,
    /// highest-precedence category first
    pub fn new() -> Self {
        let groups = vec![
            IndicatorGroup {
                category: MessageCategory::Fraud,
                indicators: FRAUD_INDICATORS.clone(),
                weight: 1.0,
            },
            IndicatorGroup {
                category: MessageCategory::Escalation,
                indicators: ESCALATION_INDICATORS.clone(),
                weight: 0.9,
            },
            IndicatorGroup {
                category: MessageCategory::SalesInquiry,
                indicators: SALES_INDICATORS.clone(),
                weight: 0.8,
            },
        ];

        Self { groups }
    }

    /// Classify a message into a category.
    ///
    /// Returns `General` with no matches for empty text or text that hits
    /// no indicator.
    pub fn classify(&self, text: &str) -> CategoryMatch {
        let text = text.trim();

        if text.is_empty() {
            return CategoryMatch {
                category: MessageCategory::General,
                matched: vec![],
                confidence: 0.0,
            };
        }

        for group in &self.groups {
            let matched: Vec<&'static str> = group
                .indicators
                .iter()
                .filter(|indicator| indicator.is_match(text))
                .map(|indicator| indicator.name())
                .collect();

            if !matched.is_empty() {
                let match_ratio = matched.len() as f32 / group.indicators.len() as f32;
                let confidence = (match_ratio * 3.0 * group.weight).min(1.0);

                return CategoryMatch {
                    category: group.category,
                    matched,
                    confidence,
                };
            }
        }

        CategoryMatch {
            category: MessageCategory::General,
            matched: vec![],
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraud_detection() {
        let classifier = RiskClassifier::new();

        let frauds = vec![
            "This is the CFO, wire $45,000 to the vendor immediately",
            "Please update our bank details and keep this confidential",
            "Buy gift cards for the team and send me the codes",
            "I'm the CEO, I need an urgent payment processed today",
        ];

        for message in frauds {
            let result = classifier.classify(message);
            assert_eq!(
                result.category,
                MessageCategory::Fraud,
                "Expected Fraud for '{}'",
                message
            );
            assert!(!result.matched.is_empty());
        }
    }

    #[test]
    fn test_escalation_detection() {
        let classifier = RiskClassifier::new();

        let escalations = vec![
            "The API has been down since yesterday, need escalation",
            "This is unacceptable, I want to speak with a manager",
            "Repeated errors on every export, when will this be fixed?",
            "Fix this now or we cancel our subscription",
        ];

        for message in escalations {
            let result = classifier.classify(message);
            assert_eq!(
                result.category,
                MessageCategory::Escalation,
                "Expected Escalation for '{}'",
                message
            );
        }
    }

    #[test]
    fn test_sales_detection() {
        let classifier = RiskClassifier::new();

        let inquiries = vec![
            "We're interested in your enterprise plan, can you share pricing?",
            "Budget approved for Q3, need a quote for 50 seats",
            "Could we get a demo next month?",
        ];

        for message in inquiries {
            let result = classifier.classify(message);
            assert_eq!(
                result.category,
                MessageCategory::SalesInquiry,
                "Expected SalesInquiry for '{}'",
                message
            );
        }
    }

    #[test]
    fn test_fraud_outranks_sales() {
        let classifier = RiskClassifier::new();

        // Budget and pricing talk does not soften a wire request.
        let message =
            "We have budget approved for pricing discussions, but first wire $20,000 to the new account immediately.";
        let result = classifier.classify(message);

        assert_eq!(result.category, MessageCategory::Fraud);
    }

    #[test]
    fn test_escalation_outranks_sales() {
        let classifier = RiskClassifier::new();

        let message = "We were evaluating an upgrade, but the service is down again. Need escalation.";
        let result = classifier.classify(message);

        assert_eq!(result.category, MessageCategory::Escalation);
    }

    #[test]
    fn test_general_fallback() {
        let classifier = RiskClassifier::new();

        let result = classifier.classify("Thanks for the update, see you at the meeting on Thursday.");
        assert_eq!(result.category, MessageCategory::General);
        assert!(result.matched.is_empty());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let classifier = RiskClassifier::new();

        let result = classifier.classify("");
        assert_eq!(result.category, MessageCategory::General);

        let result = classifier.classify("   \n  ");
        assert_eq!(result.category, MessageCategory::General);
    }

    #[test]
    fn test_category_risk_levels() {
        assert_eq!(MessageCategory::Fraud.risk_level(), RiskLevel::HighRiskFraud);
        assert_eq!(MessageCategory::Escalation.risk_level(), RiskLevel::Suspicious);
        assert_eq!(MessageCategory::SalesInquiry.risk_level(), RiskLevel::Routine);
        assert_eq!(MessageCategory::General.risk_level(), RiskLevel::Routine);
    }

    #[test]
    fn test_confidence_saturates() {
        let classifier = RiskClassifier::new();

        // Four fraud indicators at once
        let result = classifier.classify(
            "This is the CFO. Wire $9,000 to the new account immediately and confirm within the hour.",
        );

        assert_eq!(result.category, MessageCategory::Fraud);
        assert!(result.matched.len() >= 3);
        assert!((result.confidence - 1.0).abs() < f32::EPSILON);
    }
}
