//! Public sentiment synthesis and aggregation.
//!
//! Generates a fixed-size synthetic reaction population from the template
//! table, scores each reaction with the injected polarity capability, and
//! aggregates into ratios, an unrest probability, and key concerns. Given a
//! fixed table and scorer, repeated calls with identical input reproduce
//! identical output.

mod templates;

pub use templates::{render, templates_for, MagnitudeSign};

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use tracing::debug;

use polisim_common::{util::clamp01, Error, Result};

use crate::data::TextPolarityScorer;
use crate::profiles::SensitivityProfile;
use crate::types::PolicyInput;

/// Polarity above which a reaction counts as positive.
const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity below which a reaction counts as negative.
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Number of key concerns reported.
const KEY_CONCERN_COUNT: usize = 3;

/// Number of sample reactions carried in the report for display.
const SAMPLE_REACTION_COUNT: usize = 5;

// ============================================================================
// Report Types
// ============================================================================

/// Coarse classification of aggregate reaction polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    fn of(overall_score: f64) -> Self {
        if overall_score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if overall_score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Aggregated public sentiment for one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Share of positive reactions (%)
    pub positive_ratio: f64,
    /// Share of negative reactions (%)
    pub negative_ratio: f64,
    /// Share of neutral reactions (%)
    pub neutral_ratio: f64,
    /// Mean polarity across the population, in [-1, 1]
    pub overall_score: f64,
    /// Coarse classification of the mean polarity
    pub category: SentimentCategory,
    /// Probability of unrest, in [0, 1]
    pub social_unrest_probability: f64,
    /// Most frequent keywords in negative reactions
    pub key_concerns: Vec<String>,
    /// First generated reactions, for display
    pub sample_reactions: Vec<String>,
}

impl SentimentReport {
    /// Human-readable one-line summary of the aggregate sentiment.
    pub fn summary(&self) -> String {
        match self.category {
            SentimentCategory::Positive => format!(
                "Public sentiment is positive ({:.2}). Policy likely to receive support.",
                self.overall_score
            ),
            SentimentCategory::Negative => format!(
                "Public sentiment is negative ({:.2}). {:.1}% negative reactions detected.",
                self.overall_score, self.negative_ratio
            ),
            SentimentCategory::Neutral => format!(
                "Public sentiment is neutral ({:.2}). Mixed reactions expected.",
                self.overall_score
            ),
        }
    }
}

// ============================================================================
// Synthesizer
// ============================================================================

/// Generates and aggregates the synthetic reaction population.
pub struct SentimentSynthesizer {
    scorer: Arc<dyn TextPolarityScorer>,
    population_size: usize,
    unrest_magnitude_norm: f64,
}

impl SentimentSynthesizer {
    pub fn new(
        scorer: Arc<dyn TextPolarityScorer>,
        population_size: usize,
        unrest_magnitude_norm: f64,
    ) -> Self {
        Self {
            scorer,
            population_size,
            unrest_magnitude_norm,
        }
    }

    /// Analyze public sentiment for a policy.
    pub async fn analyze(
        &self,
        input: &PolicyInput,
        profile: &SensitivityProfile,
    ) -> Result<SentimentReport> {
        let effective = input.effective_magnitude();
        let sign = MagnitudeSign::of(effective);
        let reactions = self.generate_population(input, profile, sign);

        if reactions.is_empty() {
            return Err(Error::NumericInstability(
                "sentiment population is empty".into(),
            ));
        }

        let mut polarities = Vec::with_capacity(reactions.len());
        for reaction in &reactions {
            let polarity = self.scorer.score(reaction).await?;
            if !polarity.is_finite() {
                return Err(Error::NumericInstability(format!(
                    "polarity scorer returned non-finite value for: {reaction}"
                )));
            }
            polarities.push(polarity.clamp(-1.0, 1.0));
        }

        let (positive_ratio, negative_ratio, neutral_ratio) = aggregate_ratios(&polarities);
        let overall_score = polarities.iter().mean();
        let category = SentimentCategory::of(overall_score);

        let social_unrest_probability = clamp01(
            (negative_ratio / 100.0) * (effective.abs() / self.unrest_magnitude_norm).min(1.0),
        );

        let negative_reactions: Vec<&str> = reactions
            .iter()
            .zip(polarities.iter())
            .filter(|(_, p)| **p < NEGATIVE_THRESHOLD)
            .map(|(r, _)| r.as_str())
            .collect();
        let key_concerns = extract_key_concerns(&negative_reactions);

        let sample_reactions: Vec<String> = reactions
            .iter()
            .take(SAMPLE_REACTION_COUNT)
            .cloned()
            .collect();

        debug!(
            policy_type = %input.policy_type,
            negative_ratio,
            overall_score,
            "Sentiment aggregation complete"
        );

        Ok(SentimentReport {
            positive_ratio,
            negative_ratio,
            neutral_ratio,
            overall_score,
            category,
            social_unrest_probability,
            key_concerns,
            sample_reactions,
        })
    }

    /// Instantiate the fixed-size population, cycling the template list in
    /// declaration order.
    fn generate_population(
        &self,
        input: &PolicyInput,
        profile: &SensitivityProfile,
        sign: MagnitudeSign,
    ) -> Vec<String> {
        let templates = templates_for(input.policy_type, sign);
        (0..self.population_size)
            .map(|i| render(templates[i % templates.len()], input, profile))
            .collect()
    }
}

// ============================================================================
// Aggregation Helpers
// ============================================================================

/// Classify polarities and return (positive, negative, neutral) percentages.
fn aggregate_ratios(polarities: &[f64]) -> (f64, f64, f64) {
    let total = polarities.len() as f64;
    let positive = polarities.iter().filter(|p| **p > POSITIVE_THRESHOLD).count() as f64;
    let negative = polarities.iter().filter(|p| **p < NEGATIVE_THRESHOLD).count() as f64;
    let neutral = total - positive - negative;

    (
        positive / total * 100.0,
        negative / total * 100.0,
        neutral / total * 100.0,
    )
}

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+").expect("static word pattern compiles"));

/// Function words excluded from concern extraction.
const STOPWORDS: &[&str] = &[
    "the", "and", "that", "this", "with", "will", "are", "is", "for", "from", "over", "next",
    "about", "already", "another", "once", "after", "before", "while", "even", "actually", "some",
    "have", "has", "had", "been", "being", "was", "were", "they", "their", "them", "its", "our",
    "your", "you", "who", "how", "what", "when", "which", "into", "out", "more", "most", "much",
    "now", "may", "might", "should", "would", "could", "can", "get", "gets", "getting", "means",
    "mean", "makes", "make", "goes", "going", "expect", "month", "months", "year", "years", "per",
    "percent", "new", "also", "all", "any", "not",
];

/// Top keywords from negative reactions, ties broken by first appearance.
fn extract_key_concerns(negative_reactions: &[&str]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for reaction in negative_reactions {
        let lowered = reaction.to_lowercase();
        for token in WORD_PATTERN.find_iter(&lowered) {
            let word = token.as_str();
            if word.len() < 4 || STOPWORDS.contains(&word) {
                continue;
            }
            let entry = counts.entry(word.to_string()).or_insert(0);
            if *entry == 0 {
                first_seen.push(word.to_string());
            }
            *entry += 1;
        }
    }

    // Rank by count descending, then first-seen order ascending.
    let mut ranked: Vec<(String, usize, usize)> = first_seen
        .into_iter()
        .enumerate()
        .map(|(order, word)| {
            let count = counts[&word];
            (word, count, order)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(KEY_CONCERN_COUNT)
        .map(|(word, _, _)| word)
        .collect()
}
