//! End-to-end simulation tests.
//!
//! Exercises the full pipeline with deterministic stub capabilities:
//! reference fixture, invariants, zero-shock behavior, idempotence, and
//! error surfacing.

mod common;

use std::sync::Arc;

use polisim_common::{Config, Error};
use polisim_engine::data::JsonDataStore;
use polisim_engine::risk::RiskLevel;
use polisim_engine::sentiment::SentimentCategory;
use polisim_engine::simulator::PolicySimulator;
use polisim_engine::types::{PolicyInput, PolicyType, Sector};

use common::{fuel_price_input, simulator, LexiconScorer, StaticBaseline, UnavailableBaseline, UnavailableModel};

// ============================================================================
// Reference Fixture
// ============================================================================

#[tokio::test]
async fn test_fuel_price_reference_fixture() {
    let result = simulator().simulate(&fuel_price_input()).await.unwrap();

    // Composite risk lands near the reference value (±5%)
    let composite = result.risk.composite_score;
    assert!(
        (composite - 62.5).abs() <= 62.5 * 0.05,
        "composite {composite} outside reference band"
    );
    assert_eq!(result.risk.level, RiskLevel::High);

    // Transport is hit hardest, and negatively
    let top = &result.sector_impacts.most_affected[0];
    assert_eq!(top.sector, Sector::Transport);
    assert!(top.impact < 0.0);

    // Public reaction to a fuel price rise reads negative
    assert_eq!(result.sentiment.category, SentimentCategory::Negative);

    // Inflation moved above baseline with the stub regressor
    assert!((result.inflation_impact.predicted_rate - 9.5).abs() < 1e-9);
    assert!((result.inflation_impact.change_from_baseline - 4.0).abs() < 1e-9);

    // The rule table fired and stayed within the cap
    assert!(!result.recommendations.is_empty());
    assert!(result.recommendations.len() <= 6);
    assert!(result.recommendations[0].starts_with("HIGH RISK"));

    // Executive summary reflects the headline numbers
    assert_eq!(result.summary.quick_stats.risk_level, RiskLevel::High);
    assert_eq!(
        result.summary.quick_stats.most_affected_sectors[0],
        Sector::Transport
    );
    assert_eq!(result.summary.key_findings.len(), 4);
}

// ============================================================================
// Invariants
// ============================================================================

#[tokio::test]
async fn test_invariants_hold_across_policy_types() {
    let sim = simulator();

    for policy_type in PolicyType::ALL {
        for magnitude in [-50.0, -20.0, -1.0, 1.0, 20.0, 50.0] {
            let input = PolicyInput {
                policy_type,
                magnitude,
                duration_months: 18,
                affected_sectors: None,
                description: String::new(),
            };
            let result = sim.simulate(&input).await.unwrap();

            for score in result.sector_impacts.scores.values() {
                assert!(
                    (-1.0..=1.0).contains(score),
                    "{policy_type} @ {magnitude}: sector score {score} out of range"
                );
            }

            let ratio_sum = result.sentiment.positive_ratio
                + result.sentiment.negative_ratio
                + result.sentiment.neutral_ratio;
            assert!(
                (ratio_sum - 100.0).abs() < 0.1,
                "{policy_type} @ {magnitude}: ratios sum to {ratio_sum}"
            );

            assert!((0.0..=100.0).contains(&result.risk.composite_score));
            assert!((0.0..=1.0).contains(&result.sentiment.social_unrest_probability));
            assert!((0.0..=100.0).contains(&result.inflation_impact.confidence));
            assert!(result.inflation_impact.predicted_rate >= 0.0);
            assert!(result.inflation_impact.predicted_rate.is_finite());
        }
    }
}

#[tokio::test]
async fn test_zero_magnitude_is_no_shock() {
    let input = PolicyInput {
        policy_type: PolicyType::TaxReform,
        magnitude: 0.0,
        duration_months: 12,
        affected_sectors: None,
        description: String::new(),
    };
    let result = simulator().simulate(&input).await.unwrap();

    assert_eq!(result.inflation_impact.predicted_rate, 5.5);
    assert_eq!(result.inflation_impact.change_from_baseline, 0.0);
    for score in result.sector_impacts.scores.values() {
        assert!(score.abs() < 1e-12);
    }
    assert_eq!(result.risk.level, RiskLevel::Low);
    assert_eq!(result.sentiment.category, SentimentCategory::Neutral);
}

// ============================================================================
// Idempotence
// ============================================================================

#[tokio::test]
async fn test_identical_inputs_reproduce_identical_results() {
    let sim = simulator();
    let input = fuel_price_input();

    let first = sim.simulate(&input).await.unwrap();
    let second = sim.simulate(&input).await.unwrap();

    assert_eq!(first, second);
    // Bit-identical down to the serialized form
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// ============================================================================
// Error Surfacing
// ============================================================================

#[tokio::test]
async fn test_out_of_range_input_rejected_before_computation() {
    let sim = simulator();

    let mut input = fuel_price_input();
    input.magnitude = 80.0;
    assert!(matches!(
        sim.simulate(&input).await.unwrap_err(),
        Error::InvalidInput(_)
    ));

    let mut input = fuel_price_input();
    input.duration_months = 0;
    assert!(matches!(
        sim.simulate(&input).await.unwrap_err(),
        Error::InvalidInput(_)
    ));
}

#[tokio::test]
async fn test_unavailable_model_surfaces() {
    let sim = PolicySimulator::new(
        &Config::default(),
        Arc::new(StaticBaseline),
        &JsonDataStore::bundled(),
        Arc::new(UnavailableModel),
        Arc::new(LexiconScorer),
    )
    .unwrap();

    let err = sim.simulate(&fuel_price_input()).await.unwrap_err();
    assert!(matches!(err, Error::ModelUnavailable(_)));
}

#[tokio::test]
async fn test_unavailable_baseline_surfaces() {
    let sim = PolicySimulator::new(
        &Config::default(),
        Arc::new(UnavailableBaseline),
        &JsonDataStore::bundled(),
        Arc::new(common::LinearModel),
        Arc::new(LexiconScorer),
    )
    .unwrap();

    let err = sim.simulate(&fuel_price_input()).await.unwrap_err();
    assert!(matches!(err, Error::DataUnavailable(_)));
}

// ============================================================================
// Scoped Sector Analysis
// ============================================================================

#[tokio::test]
async fn test_restricted_scope_still_ripples() {
    let input = PolicyInput {
        policy_type: PolicyType::FuelPriceChange,
        magnitude: 30.0,
        duration_months: 12,
        affected_sectors: Some(vec![Sector::Energy]),
        description: String::new(),
    };
    let result = simulator().simulate(&input).await.unwrap();

    // Energy carries the direct shock; Transport only the ripple
    assert!(result.sector_impacts.scores[&Sector::Energy] < 0.0);
    assert!(result.sector_impacts.scores[&Sector::Transport] < 0.0);
    assert!(
        result.sector_impacts.scores[&Sector::Energy].abs()
            > result.sector_impacts.scores[&Sector::Transport].abs()
    );
    assert_eq!(
        result.policy.affected_sectors,
        vec![Sector::Energy]
    );
}
