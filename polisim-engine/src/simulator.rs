//! Policy simulation orchestrator.
//!
//! Composes the inflation predictor, sector propagator, and sentiment
//! synthesizer into one `SimulationResult`, then derives the risk
//! assessment, rule-based recommendations, and the executive summary.

use std::sync::Arc;

use tracing::info;

use polisim_common::config::{Config, EngineConfig};
use polisim_common::{Result, Validate};

use crate::data::{
    EconomicBaselineProvider, SectorGraphProvider, TextPolarityScorer, TrainedInflationModel,
};
use crate::inflation::{InflationImpact, InflationPredictor};
use crate::profiles::profile_for;
use crate::risk::{RiskAssessment, RiskCalculator, RiskLevel};
use crate::sector::{SectorImpactPropagator, SectorImpactReport};
use crate::sentiment::{SentimentCategory, SentimentReport, SentimentSynthesizer};
use crate::types::{
    ExecutiveSummary, PolicyDigest, PolicyInput, QuickStats, Sector, SimulationResult,
};

/// Component score above which a component-specific recommendation fires.
const COMPONENT_ALERT: f64 = 60.0;

/// Predicted inflation rate above which monetary countermeasures are
/// recommended.
const INFLATION_ALERT: f64 = 8.0;

/// The policy simulation engine.
///
/// Holds the immutable sector graph and the injected capabilities. Every
/// call to [`simulate`](Self::simulate) is a pure function of its input
/// plus that read-only state; concurrent calls never interfere.
pub struct PolicySimulator {
    config: EngineConfig,
    baseline_provider: Arc<dyn EconomicBaselineProvider>,
    inflation: InflationPredictor,
    propagator: SectorImpactPropagator,
    sentiment: SentimentSynthesizer,
    risk: RiskCalculator,
}

impl PolicySimulator {
    /// Build a simulator, loading and validating the sector graph once.
    pub fn new(
        config: &Config,
        baseline_provider: Arc<dyn EconomicBaselineProvider>,
        graph_provider: &dyn SectorGraphProvider,
        model: Arc<dyn TrainedInflationModel>,
        scorer: Arc<dyn TextPolarityScorer>,
    ) -> Result<Self> {
        config.validate()?;
        let engine = &config.engine;
        let graph = Arc::new(graph_provider.sector_graph()?);

        Ok(Self {
            config: engine.clone(),
            baseline_provider,
            inflation: InflationPredictor::new(model),
            propagator: SectorImpactPropagator::new(graph, engine.damping),
            sentiment: SentimentSynthesizer::new(
                scorer,
                engine.population_size,
                engine.unrest_magnitude_norm,
            ),
            risk: RiskCalculator::new(engine),
        })
    }

    /// Engine configuration in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one policy simulation.
    pub async fn simulate(&self, input: &PolicyInput) -> Result<SimulationResult> {
        input.validate()?;

        let profile = profile_for(input.policy_type);
        let baseline = self.baseline_provider.latest().await?;

        // The three estimators are independent; only their outputs meet in
        // the risk calculator.
        let (inflation, sentiment) = tokio::join!(
            self.inflation.predict_impact(input, &baseline, profile),
            self.sentiment.analyze(input, profile),
        );
        let inflation = inflation?;
        let sentiment = sentiment?;
        let sectors = self.propagator.analyze(input, profile)?;

        let risk = self.risk.assess(
            &inflation,
            &sectors,
            &sentiment,
            profile,
            input.effective_magnitude(),
        )?;

        let recommendations = build_recommendations(
            &risk,
            &inflation,
            &sectors,
            &sentiment,
            self.config.max_recommendations,
        );
        let summary = build_summary(&inflation, &sectors, &sentiment, &risk);

        info!(
            policy_type = %input.policy_type,
            composite_score = risk.composite_score,
            risk_level = %risk.level,
            sentiment = %sentiment.category,
            "Simulation complete"
        );

        Ok(SimulationResult {
            policy: PolicyDigest::from_input(input),
            inflation_impact: inflation,
            sector_impacts: sectors,
            sentiment,
            risk,
            recommendations,
            summary,
        })
    }
}

/// Deterministic, additive recommendation rules in fixed priority order.
fn build_recommendations(
    risk: &RiskAssessment,
    inflation: &InflationImpact,
    sectors: &SectorImpactReport,
    sentiment: &SentimentReport,
    cap: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match risk.level {
        RiskLevel::Critical => recommendations.push(
            "CRITICAL RISK: reconsider this policy or break the rollout into phased steps".into(),
        ),
        RiskLevel::High => recommendations
            .push("HIGH RISK: implement strong mitigation measures before rollout".into()),
        RiskLevel::Low | RiskLevel::Moderate => {}
    }

    if risk.components.economic > COMPONENT_ALERT {
        recommendations
            .push("Deploy monetary policy measures to contain inflationary pressure".into());
    }
    if risk.components.sector_disruption > COMPONENT_ALERT {
        recommendations.push("Provide targeted support to heavily affected sectors".into());
    }
    if risk.components.social_unrest > COMPONENT_ALERT {
        recommendations.push("Enhance public communication and stakeholder engagement".into());
    }
    if sentiment.category == SentimentCategory::Negative {
        recommendations
            .push("Run a sustained public communication campaign to address concerns".into());
    }
    if risk.components.inequality > COMPONENT_ALERT {
        recommendations.push("Include compensatory measures for vulnerable groups".into());
    }
    if sectors.negative_sectors.len() > 3 {
        let focus: Vec<&str> = sectors
            .negative_sectors
            .iter()
            .take(3)
            .map(|s| s.name())
            .collect();
        recommendations.push(format!(
            "Focus support on the {} sectors",
            focus.join(", ")
        ));
    }
    if inflation.predicted_rate > INFLATION_ALERT {
        recommendations.push("Consider complementary monetary policy measures".into());
    }
    if matches!(risk.level, RiskLevel::Low | RiskLevel::Moderate) {
        recommendations.push("Risk level acceptable with standard monitoring".into());
    }

    recommendations.truncate(cap);
    recommendations
}

/// Executive summary: headline numbers plus key findings.
fn build_summary(
    inflation: &InflationImpact,
    sectors: &SectorImpactReport,
    sentiment: &SentimentReport,
    risk: &RiskAssessment,
) -> ExecutiveSummary {
    let most_affected: Vec<Sector> = sectors.most_affected.iter().map(|e| e.sector).collect();
    let sector_names: Vec<&str> = most_affected.iter().map(|s| s.name()).collect();

    ExecutiveSummary {
        quick_stats: QuickStats {
            inflation_rate: inflation.predicted_rate,
            risk_level: risk.level,
            public_sentiment: sentiment.category,
            most_affected_sectors: most_affected.clone(),
        },
        key_findings: vec![
            format!(
                "Predicted inflation: {:.2}% (baseline: {:.2}%)",
                inflation.predicted_rate, inflation.baseline
            ),
            format!("Overall risk level: {}", risk.level),
            format!("Public sentiment: {}", sentiment.category),
            format!("Most affected: {}", sector_names.join(", ")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskComponents;
    use std::collections::BTreeMap;

    fn risk(level_score: f64, components: RiskComponents) -> RiskAssessment {
        RiskAssessment {
            composite_score: level_score,
            level: RiskLevel::from_score(level_score),
            components,
        }
    }

    fn inflation(rate: f64) -> InflationImpact {
        InflationImpact {
            predicted_rate: rate,
            baseline: 5.5,
            change_from_baseline: rate - 5.5,
            confidence: 85.0,
        }
    }

    fn sectors(negative: Vec<Sector>) -> SectorImpactReport {
        let scores: BTreeMap<Sector, f64> = Sector::ALL.into_iter().map(|s| (s, 0.0)).collect();
        SectorImpactReport {
            scores,
            most_affected: vec![],
            overall_economic_impact: 0.0,
            positive_sectors: vec![],
            negative_sectors: negative,
        }
    }

    fn sentiment(category: SentimentCategory) -> SentimentReport {
        SentimentReport {
            positive_ratio: 0.0,
            negative_ratio: 0.0,
            neutral_ratio: 100.0,
            overall_score: 0.0,
            category,
            social_unrest_probability: 0.0,
            key_concerns: vec![],
            sample_reactions: vec![],
        }
    }

    #[test]
    fn test_high_risk_emits_mitigation_first() {
        let recommendations = build_recommendations(
            &risk(
                60.0,
                RiskComponents {
                    economic: 50.0,
                    sector_disruption: 50.0,
                    social_unrest: 50.0,
                    inequality: 50.0,
                },
            ),
            &inflation(6.0),
            &sectors(vec![]),
            &sentiment(SentimentCategory::Neutral),
            6,
        );
        assert!(recommendations[0].starts_with("HIGH RISK"));
    }

    #[test]
    fn test_low_risk_emits_monitoring_only() {
        let recommendations = build_recommendations(
            &risk(
                10.0,
                RiskComponents {
                    economic: 10.0,
                    sector_disruption: 5.0,
                    social_unrest: 5.0,
                    inequality: 5.0,
                },
            ),
            &inflation(5.5),
            &sectors(vec![]),
            &sentiment(SentimentCategory::Neutral),
            6,
        );
        assert_eq!(
            recommendations,
            vec!["Risk level acceptable with standard monitoring".to_string()]
        );
    }

    #[test]
    fn test_rules_are_additive_and_capped() {
        let recommendations = build_recommendations(
            &risk(
                80.0,
                RiskComponents {
                    economic: 90.0,
                    sector_disruption: 90.0,
                    social_unrest: 90.0,
                    inequality: 90.0,
                },
            ),
            &inflation(12.0),
            &sectors(vec![
                Sector::Agriculture,
                Sector::Manufacturing,
                Sector::Services,
                Sector::Transport,
            ]),
            &sentiment(SentimentCategory::Negative),
            6,
        );
        assert_eq!(recommendations.len(), 6);
        assert!(recommendations[0].starts_with("CRITICAL RISK"));
    }

    #[test]
    fn test_negative_sentiment_triggers_engagement() {
        let recommendations = build_recommendations(
            &risk(
                30.0,
                RiskComponents {
                    economic: 30.0,
                    sector_disruption: 20.0,
                    social_unrest: 30.0,
                    inequality: 20.0,
                },
            ),
            &inflation(6.0),
            &sectors(vec![]),
            &sentiment(SentimentCategory::Negative),
            6,
        );
        assert!(recommendations
            .iter()
            .any(|r| r.contains("communication campaign")));
    }
}
