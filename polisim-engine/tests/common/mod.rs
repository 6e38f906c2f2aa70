//! Shared deterministic stubs for integration tests.
//!
//! The trained inflation model and the polarity scorer are external
//! capabilities; these stubs stand in for them with fixed, reproducible
//! behavior so every assertion in the suite is exact.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use polisim_common::{Config, Error, Result};
use polisim_engine::data::{
    EconomicBaseline, EconomicBaselineProvider, JsonDataStore, TextPolarityScorer,
    TrainedInflationModel,
};
use polisim_engine::inflation::{InflationFeatures, InflationPrediction};
use polisim_engine::simulator::PolicySimulator;
use polisim_engine::types::{PolicyInput, PolicyType};

/// Baseline snapshot used across the suite.
pub fn baseline() -> EconomicBaseline {
    EconomicBaseline {
        inflation_rate: 5.5,
        interest_rate: 6.0,
        money_supply_growth: 8.0,
        gdp_growth: 6.2,
        unemployment_rate: 7.2,
        consumer_confidence_index: 95.4,
        as_of: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
    }
}

/// Always returns the fixed baseline snapshot.
pub struct StaticBaseline;

#[async_trait]
impl EconomicBaselineProvider for StaticBaseline {
    async fn latest(&self) -> Result<EconomicBaseline> {
        Ok(baseline())
    }
}

/// Always fails, like a provider whose upstream feed is down.
pub struct UnavailableBaseline;

#[async_trait]
impl EconomicBaselineProvider for UnavailableBaseline {
    async fn latest(&self) -> Result<EconomicBaseline> {
        Err(Error::DataUnavailable("indicator feed offline".into()))
    }
}

/// Deterministic linear stand-in for the trained regressor.
///
/// rate = 5.5 + 0.2*fuel + 0.3*tax - 0.05*subsidy, confidence 85.
pub struct LinearModel;

#[async_trait]
impl TrainedInflationModel for LinearModel {
    async fn predict(&self, features: &InflationFeatures) -> Result<InflationPrediction> {
        let rate = 5.5 + 0.2 * features.fuel_price_change + 0.3 * features.tax_rate_change
            - 0.05 * features.subsidy_change;
        Ok(InflationPrediction {
            rate,
            confidence: 85.0,
        })
    }
}

/// Model that never answers within any reasonable budget.
pub struct SlowModel {
    pub delay: Duration,
}

#[async_trait]
impl TrainedInflationModel for SlowModel {
    async fn predict(&self, _features: &InflationFeatures) -> Result<InflationPrediction> {
        tokio::time::sleep(self.delay).await;
        Ok(InflationPrediction {
            rate: 5.5,
            confidence: 50.0,
        })
    }
}

/// Model whose backing service is unreachable.
pub struct UnavailableModel;

#[async_trait]
impl TrainedInflationModel for UnavailableModel {
    async fn predict(&self, _features: &InflationFeatures) -> Result<InflationPrediction> {
        Err(Error::ModelUnavailable("regressor endpoint unreachable".into()))
    }
}

/// Deterministic lexicon stand-in for the polarity scorer.
pub struct LexiconScorer;

const NEGATIVE_WORDS: &[&str] = &[
    "unaffordable",
    "burden",
    "hurt",
    "struggling",
    "worried",
    "angry",
    "protest",
    "squeeze",
    "layoffs",
    "costlier",
];

const POSITIVE_WORDS: &[&str] = &["relief", "welcome", "boost", "fairer", "savings", "easier"];

#[async_trait]
impl TextPolarityScorer for LexiconScorer {
    async fn score(&self, text: &str) -> Result<f64> {
        let lowered = text.to_lowercase();
        let mut score = 0.0;
        if NEGATIVE_WORDS.iter().any(|w| lowered.contains(w)) {
            score -= 0.6;
        }
        if POSITIVE_WORDS.iter().any(|w| lowered.contains(w)) {
            score += 0.6;
        }
        Ok(score)
    }
}

/// Simulator wired with the default config and the deterministic stubs.
pub fn simulator() -> Arc<PolicySimulator> {
    simulator_with_config(Config::default())
}

/// Simulator with an explicit config, deterministic stubs otherwise.
pub fn simulator_with_config(config: Config) -> Arc<PolicySimulator> {
    Arc::new(
        PolicySimulator::new(
            &config,
            Arc::new(StaticBaseline),
            &JsonDataStore::bundled(),
            Arc::new(LinearModel),
            Arc::new(LexiconScorer),
        )
        .unwrap(),
    )
}

/// The end-to-end reference input: a 20% fuel price rise over a year.
pub fn fuel_price_input() -> PolicyInput {
    PolicyInput {
        policy_type: PolicyType::FuelPriceChange,
        magnitude: 20.0,
        duration_months: 12,
        affected_sectors: None,
        description: "Fuel price adjustment".into(),
    }
}
