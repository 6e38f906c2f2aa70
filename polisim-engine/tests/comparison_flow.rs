//! Scenario comparison tests.
//!
//! Ranking determinism, tie-breaking, input validation, and timeout
//! behavior of the comparison engine.

mod common;

use std::sync::Arc;
use std::time::Duration;

use polisim_common::{Config, Error};
use polisim_engine::comparator::ScenarioComparator;
use polisim_engine::data::JsonDataStore;
use polisim_engine::simulator::PolicySimulator;
use polisim_engine::types::{NamedScenario, PolicyInput, PolicyType};

use common::{fuel_price_input, simulator, LexiconScorer, SlowModel, StaticBaseline};

fn comparator() -> ScenarioComparator {
    ScenarioComparator::new(simulator(), &Config::default())
}

fn scenario(name: &str, magnitude: f64) -> NamedScenario {
    NamedScenario {
        name: name.into(),
        policy: PolicyInput {
            magnitude,
            ..fuel_price_input()
        },
    }
}

#[tokio::test]
async fn test_lower_shock_ranks_first() {
    let result = comparator()
        .compare(vec![
            scenario("Aggressive", 40.0),
            scenario("Gentle", 5.0),
            scenario("Middle", 20.0),
        ])
        .await
        .unwrap();

    let names: Vec<&str> = result
        .comparison_table
        .iter()
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(names, vec!["Gentle", "Middle", "Aggressive"]);
    assert_eq!(result.best_scenario, "Gentle");

    // Ranks are 1-based and contiguous
    let ranks: Vec<usize> = result.comparison_table.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);

    // Risk ascends with rank
    assert!(result.comparison_table[0].risk_score < result.comparison_table[1].risk_score);
    assert!(result.comparison_table[1].risk_score < result.comparison_table[2].risk_score);

    // The recommendation names both ends of the ranking
    assert!(result.recommendation.contains("Gentle"));
    assert!(result.recommendation.contains("Aggressive"));
}

#[tokio::test]
async fn test_identical_scenarios_rank_adjacent_by_name() {
    let result = comparator()
        .compare(vec![
            scenario("Bravo", 20.0),
            scenario("Alpha", 20.0),
        ])
        .await
        .unwrap();

    // Same policy, same numbers; the name breaks the tie
    assert_eq!(result.comparison_table[0].name, "Alpha");
    assert_eq!(result.comparison_table[1].name, "Bravo");
    assert_eq!(
        result.comparison_table[0].risk_score,
        result.comparison_table[1].risk_score
    );
    assert_eq!(result.comparison_table[0].rank, 1);
    assert_eq!(result.comparison_table[1].rank, 2);
}

#[tokio::test]
async fn test_ranking_ignores_input_order() {
    let forward = comparator()
        .compare(vec![scenario("A", 10.0), scenario("B", 30.0)])
        .await
        .unwrap();
    let reversed = comparator()
        .compare(vec![scenario("B", 30.0), scenario("A", 10.0)])
        .await
        .unwrap();

    assert_eq!(forward.comparison_table, reversed.comparison_table);
    assert_eq!(forward.best_scenario, reversed.best_scenario);
}

#[tokio::test]
async fn test_too_few_scenarios_rejected() {
    let err = comparator().compare(vec![]).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let err = comparator()
        .compare(vec![scenario("Only", 10.0)])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[tokio::test]
async fn test_mixed_policy_comparison_is_total_order() {
    let result = comparator()
        .compare(vec![
            NamedScenario {
                name: "Fuel".into(),
                policy: PolicyInput {
                    policy_type: PolicyType::FuelPriceChange,
                    magnitude: 15.0,
                    duration_months: 12,
                    affected_sectors: None,
                    description: String::new(),
                },
            },
            NamedScenario {
                name: "Tax".into(),
                policy: PolicyInput {
                    policy_type: PolicyType::TaxReform,
                    magnitude: 15.0,
                    duration_months: 12,
                    affected_sectors: None,
                    description: String::new(),
                },
            },
            NamedScenario {
                name: "Wage".into(),
                policy: PolicyInput {
                    policy_type: PolicyType::MinimumWageChange,
                    magnitude: 15.0,
                    duration_months: 12,
                    affected_sectors: None,
                    description: String::new(),
                },
            },
        ])
        .await
        .unwrap();

    assert_eq!(result.scenarios.len(), 3);
    for window in result.comparison_table.windows(2) {
        assert!(window[0].risk_score <= window[1].risk_score);
    }
}

#[tokio::test]
async fn test_scenario_timeout_surfaces_as_error() {
    let mut config = Config::default();
    config.engine.scenario_timeout_secs = 1;

    let slow_simulator = Arc::new(
        PolicySimulator::new(
            &config,
            Arc::new(StaticBaseline),
            &JsonDataStore::bundled(),
            Arc::new(SlowModel {
                delay: Duration::from_secs(5),
            }),
            Arc::new(LexiconScorer),
        )
        .unwrap(),
    );
    let comparator = ScenarioComparator::new(slow_simulator, &config);

    let err = comparator
        .compare(vec![scenario("A", 10.0), scenario("B", 20.0)])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout));
}
