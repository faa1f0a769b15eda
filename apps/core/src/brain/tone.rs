//! Tone scoring.
//!
//! Measures urgency and hostility signals in the raw text and folds them
//! into a normalized score between 0.0 (calm) and 1.0 (heated). The metrics
//! shape reason wording and the lead score; they never change the category.

use serde::{Deserialize, Serialize};

/// Phrases that apply time pressure
const PRESSURE_TERMS: &[&str] = &[
    "immediately",
    "urgent",
    "urgently",
    "asap",
    "right away",
    "right now",
    "at once",
    "without delay",
    "within the hour",
    "before end of day",
];

/// Vocabulary signalling a hostile or exasperated sender
const HOSTILE_TERMS: &[&str] = &[
    "angry",
    "furious",
    "outraged",
    "unacceptable",
    "ridiculous",
    "fed up",
    "frustrated",
    "incompetent",
    "worst",
    "terrible",
    "useless",
];

/// Metrics about message tone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneMetrics {
    /// Number of exclamation marks
    pub exclamation_count: usize,
    /// Words of three or more letters written entirely in capitals
    pub shouted_words: usize,
    /// Time-pressure phrases found in the text
    pub pressure_terms: Vec<String>,
    /// Hostile vocabulary found in the text
    pub hostile_terms: Vec<String>,
    /// Normalized tone score (0.0 - 1.0)
    pub score: f32,
}

impl ToneMetrics {
    /// True when any hostile vocabulary was found
    pub fn is_hostile(&self) -> bool {
        !self.hostile_terms.is_empty()
    }

    /// True when any time-pressure phrase was found
    pub fn is_pressured(&self) -> bool {
        !self.pressure_terms.is_empty()
    }
}

/// Tone scorer for message text
pub struct ToneScorer;

impl Default for ToneScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneScorer {
    /// Create a new tone scorer
    pub fn new() -> Self {
        Self
    }

    /// Find the listed terms present in the lowercased text
    fn find_terms(&self, text_lower: &str, terms: &'static [&'static str]) -> Vec<String> {
        terms
            .iter()
            .filter(|term| text_lower.contains(*term))
            .map(|term| term.to_string())
            .collect()
    }

    /// Count words of three or more letters written entirely in capitals.
    /// Short acronyms slip through; they are cheap noise at these weights.
    fn count_shouted_words(&self, text: &str) -> usize {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphabetic()))
            .filter(|word| {
                word.chars().count() >= 3 && word.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
            })
            .count()
    }

    /// Calculate the tone score (0.0 - 1.0)
    fn calculate_score(&self, metrics: &ToneMetrics) -> f32 {
        const PRESSURE_WEIGHT: f32 = 0.40;
        const HOSTILE_WEIGHT: f32 = 0.30;
        const EXCLAMATION_WEIGHT: f32 = 0.15;
        const SHOUT_WEIGHT: f32 = 0.15;

        // Two distinct phrases saturate the phrase metrics, three marks or
        // words saturate the count metrics
        let pressure_score = (metrics.pressure_terms.len() as f32 / 2.0).min(1.0);
        let hostile_score = (metrics.hostile_terms.len() as f32 / 2.0).min(1.0);
        let exclamation_score = (metrics.exclamation_count as f32 / 3.0).min(1.0);
        let shout_score = (metrics.shouted_words as f32 / 3.0).min(1.0);

        let score = pressure_score * PRESSURE_WEIGHT
            + hostile_score * HOSTILE_WEIGHT
            + exclamation_score * EXCLAMATION_WEIGHT
            + shout_score * SHOUT_WEIGHT;

        score.clamp(0.0, 1.0)
    }

    /// Analyze text and return tone metrics
    pub fn analyze(&self, text: &str) -> ToneMetrics {
        let text = text.trim();

        if text.is_empty() {
            return ToneMetrics {
                exclamation_count: 0,
                shouted_words: 0,
                pressure_terms: vec![],
                hostile_terms: vec![],
                score: 0.0,
            };
        }

        let text_lower = text.to_lowercase();

        let mut metrics = ToneMetrics {
            exclamation_count: text.chars().filter(|c| *c == '!').count(),
            shouted_words: self.count_shouted_words(text),
            pressure_terms: self.find_terms(&text_lower, PRESSURE_TERMS),
            hostile_terms: self.find_terms(&text_lower, HOSTILE_TERMS),
            score: 0.0,
        };

        metrics.score = self.calculate_score(&metrics);

        metrics
    }
}
