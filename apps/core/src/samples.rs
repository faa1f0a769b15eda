//! Built-in sample messages.
//!
//! One message per triage category, usable as instant demos from the CLI.

/// Sample messages, one per category: fraud, sales inquiry, escalation
pub const SAMPLE_MESSAGES: [&str; 3] = [
    "Hi team, this is the CFO. Please wire $45,000 to the vendor immediately. Use the new account in the attached PDF and confirm within the hour.",
    "Hello, I’m interested in your enterprise analytics suite. We have budget approved for Q3 and need pricing plus implementation timeline this month.",
    "We’re seeing repeated outages on the API since yesterday. Our customers are angry—what is the ETA for a fix? Need escalation.",
];

/// Number of built-in samples
pub const SAMPLE_COUNT: usize = SAMPLE_MESSAGES.len();

/// Get a sample message by 1-based index
pub fn sample(index: usize) -> Option<&'static str> {
    if (1..=SAMPLE_COUNT).contains(&index) {
        Some(SAMPLE_MESSAGES[index - 1])
    } else {
        None
    }
}
