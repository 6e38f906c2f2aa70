//! Scenario comparison engine.
//!
//! Runs the simulator once per named scenario, concurrently, and reduces
//! the results to a deterministic ranking with a comparative
//! recommendation. Ranking is a total order: composite risk ascending,
//! then predicted inflation ascending, then scenario name.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use polisim_common::config::Config;
use polisim_common::util::round_to;
use polisim_common::{Error, Result};

use crate::risk::RiskLevel;
use crate::sentiment::SentimentCategory;
use crate::simulator::PolicySimulator;
use crate::types::{NamedScenario, SimulationResult};

/// Minimum number of scenarios a comparison accepts.
const MIN_SCENARIOS: usize = 2;

// ============================================================================
// Result Types
// ============================================================================

/// One scenario with its rank and full simulation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedScenario {
    /// 1-based rank; rank 1 carries the lowest risk
    pub rank: usize,
    pub name: String,
    pub result: SimulationResult,
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub rank: usize,
    pub name: String,
    pub inflation_rate: f64,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub sentiment: SentimentCategory,
    pub negative_sentiment_pct: f64,
}

/// Outcome of a scenario comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// All scenarios, ranked best to worst
    pub scenarios: Vec<RankedScenario>,
    pub comparison_table: Vec<ComparisonRow>,
    /// Name of the rank-1 scenario
    pub best_scenario: String,
    /// Natural-language recommendation contrasting best and worst
    pub recommendation: String,
}

// ============================================================================
// Comparator
// ============================================================================

/// Compares named policy scenarios.
pub struct ScenarioComparator {
    simulator: Arc<PolicySimulator>,
    scenario_timeout: Duration,
}

impl ScenarioComparator {
    pub fn new(simulator: Arc<PolicySimulator>, config: &Config) -> Self {
        Self {
            simulator,
            scenario_timeout: Duration::from_secs(config.engine.scenario_timeout_secs),
        }
    }

    /// Compare at least two named scenarios.
    ///
    /// Scenarios run concurrently, one task each, every task wrapped in
    /// the configured timeout. A timed-out scenario fails the comparison;
    /// retrying an external capability is the collaborator's business, not
    /// this engine's.
    pub async fn compare(&self, scenarios: Vec<NamedScenario>) -> Result<ComparisonResult> {
        if scenarios.len() < MIN_SCENARIOS {
            return Err(Error::InvalidInput(format!(
                "comparison needs at least {MIN_SCENARIOS} scenarios, got {}",
                scenarios.len()
            )));
        }

        let mut handles = Vec::with_capacity(scenarios.len());
        for scenario in scenarios {
            let simulator = Arc::clone(&self.simulator);
            let timeout = self.scenario_timeout;
            handles.push((
                scenario.name.clone(),
                tokio::spawn(async move {
                    tokio::time::timeout(timeout, simulator.simulate(&scenario.policy)).await
                }),
            ));
        }

        let mut ranked = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let joined = handle
                .await
                .map_err(|e| Error::Internal(format!("scenario task failed: {e}")))?;
            let result = match joined {
                Ok(result) => result?,
                Err(_) => {
                    warn!(scenario = %name, "Scenario exceeded its wall-clock budget");
                    return Err(Error::Timeout);
                }
            };
            ranked.push(RankedScenario {
                rank: 0,
                name,
                result,
            });
        }

        ranked.sort_by(|a, b| {
            a.result
                .risk
                .composite_score
                .total_cmp(&b.result.risk.composite_score)
                .then_with(|| {
                    a.result
                        .inflation_impact
                        .predicted_rate
                        .total_cmp(&b.result.inflation_impact.predicted_rate)
                })
                .then_with(|| a.name.cmp(&b.name))
        });
        for (index, scenario) in ranked.iter_mut().enumerate() {
            scenario.rank = index + 1;
        }

        let comparison_table = ranked.iter().map(table_row).collect();
        let best_scenario = ranked[0].name.clone();
        let recommendation = build_recommendation(&ranked);

        info!(
            scenario_count = ranked.len(),
            best = %best_scenario,
            "Scenario comparison complete"
        );

        Ok(ComparisonResult {
            scenarios: ranked,
            comparison_table,
            best_scenario,
            recommendation,
        })
    }
}

fn table_row(scenario: &RankedScenario) -> ComparisonRow {
    let result = &scenario.result;
    ComparisonRow {
        rank: scenario.rank,
        name: scenario.name.clone(),
        inflation_rate: round_to(result.inflation_impact.predicted_rate, 2),
        risk_score: round_to(result.risk.composite_score, 2),
        risk_level: result.risk.level,
        sentiment: result.sentiment.category,
        negative_sentiment_pct: round_to(result.sentiment.negative_ratio, 2),
    }
}

fn build_recommendation(ranked: &[RankedScenario]) -> String {
    let best = &ranked[0];
    let worst = &ranked[ranked.len() - 1];

    format!(
        "Recommended option: {}. It carries the lowest composite risk score ({:.1}) of the {} \
         scenarios, against {:.1} for {}. Predicted inflation is {:.1}% versus {:.1}%, with {} \
         public sentiment.",
        best.name,
        best.result.risk.composite_score,
        ranked.len(),
        worst.result.risk.composite_score,
        worst.name,
        best.result.inflation_impact.predicted_rate,
        worst.result.inflation_impact.predicted_rate,
        best.result.sentiment.category,
    )
}
