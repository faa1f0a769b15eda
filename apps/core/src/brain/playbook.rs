//! Playbook - Composes the decision brief for a classified message.
//!
//! Pure mapping from classification evidence (matched indicators, tone,
//! lead assessment) to the brief's text fields. One composer per category.
//! All output is deterministic: indicator names are joined in table order
//! and no timestamps or ids appear in the brief.

use super::brief::{DecisionBrief, RiskLevel};
use super::lead::LeadAssessment;
use super::tone::ToneMetrics;

/// Brief for a message carrying fraud indicators
pub fn fraud_brief(matched: &[&'static str]) -> DecisionBrief {
    DecisionBrief {
        risk_level: RiskLevel::HighRiskFraud,
        reason: format!(
            "Message matches known payment-fraud indicators: {}.",
            matched.join(", ")
        ),
        business_impact: "Funds sent on instructions like these typically land in an \
                          attacker-controlled account, and recovery after the first few hours \
                          is rare."
            .to_string(),
        recommended_action: "Do not act on the payment instructions. Verify the request with \
                             the named person through a channel you already trust and alert \
                             your security team."
            .to_string(),
        suggested_reply: None,
        lead_quality_score: None,
        business_insight: "Payment-redirection scams borrow executive authority and invent \
                           deadlines so the transfer outruns normal accounting review."
            .to_string(),
    }
}

/// Brief for a complaint or escalation
pub fn escalation_brief(matched: &[&'static str], tone: &ToneMetrics) -> DecisionBrief {
    let mut reason = format!(
        "Message reports a service problem with escalation signals: {}.",
        matched.join(", ")
    );
    if tone.is_hostile() {
        reason.push_str(" The sender's tone is openly hostile.");
    }

    DecisionBrief {
        risk_level: RiskLevel::Suspicious,
        reason,
        business_impact: "Left unresolved, this risks churn for the affected account and \
                          public complaints that outlast the incident itself."
            .to_string(),
        recommended_action: "Treat as a priority: escalate to the support lead now and reply \
                             the same day with a concrete ETA."
            .to_string(),
        suggested_reply: None,
        lead_quality_score: None,
        business_insight: "Customers who escalate are usually still invested in the product; \
                           a fast, specific response often turns them into references."
            .to_string(),
    }
}

/// Brief for a sales inquiry, with lead score and a drafted reply
pub fn sales_brief(matched: &[&'static str], lead: &LeadAssessment) -> DecisionBrief {
    DecisionBrief {
        risk_level: RiskLevel::Routine,
        reason: format!(
            "Message reads as a purchase inquiry: {}.",
            matched.join(", ")
        ),
        business_impact: "A qualified buyer left waiting will shortlist competitors; response \
                          time is the strongest lever on win rate."
            .to_string(),
        recommended_action: "Route to the sales owner and reply within one business day while \
                             the evaluation window is open."
            .to_string(),
        suggested_reply: Some(draft_reply(lead)),
        lead_quality_score: Some(lead.score),
        business_insight: sales_insight(lead),
    }
}

/// Brief for a message with no strong indicators
pub fn general_brief() -> DecisionBrief {
    DecisionBrief {
        risk_level: RiskLevel::Routine,
        reason: "No fraud, escalation, or purchase indicators matched; the message reads as \
                 routine correspondence."
            .to_string(),
        business_impact: "Minimal; standard handling applies.".to_string(),
        recommended_action: "Handle through the normal inbox workflow; no special routing \
                             needed."
            .to_string(),
        suggested_reply: None,
        lead_quality_score: None,
        business_insight: "Routine messages still shape customer perception, and a prompt \
                           ordinary reply keeps them routine."
            .to_string(),
    }
}

/// Brief for empty or whitespace-only input
pub fn empty_brief() -> DecisionBrief {
    DecisionBrief {
        risk_level: RiskLevel::Routine,
        reason: "The message is empty, so no signals could be evaluated.".to_string(),
        business_impact: "None; there is no content to act on.".to_string(),
        recommended_action: "Ask the sender to resend the message content before triage."
            .to_string(),
        suggested_reply: None,
        lead_quality_score: None,
        business_insight: "Blank submissions usually mean a copy-paste failure rather than \
                           real intent."
            .to_string(),
    }
}

/// Assemble a reply draft from the detected buying signals
fn draft_reply(lead: &LeadAssessment) -> String {
    let mut reply = String::from("Thank you for your interest.");

    if lead.signals.contains(&"pricing requested") {
        reply.push_str(" I can send over current pricing and packaging today.");
    }
    if lead.signals.contains(&"purchase timeline") {
        reply.push_str(" We can comfortably work within the timeline you mentioned.");
    }
    if lead.signals.contains(&"demo requested") {
        reply.push_str(" I would be glad to set up a demo for your team.");
    }

    reply.push_str(" Would a short call this week work to scope your requirements?");
    reply
}

fn sales_insight(lead: &LeadAssessment) -> String {
    let late_stage = lead.signals.contains(&"budget confirmed")
        || lead.signals.contains(&"purchase timeline");

    if late_stage {
        "Messages that volunteer budget or timing usually come from buyers in the final \
         stage of vendor selection."
            .to_string()
    } else {
        "Early-stage interest; concrete pricing and a short demo are the fastest way to \
         qualify it further."
            .to_string()
    }
}
