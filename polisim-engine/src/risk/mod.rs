//! Composite risk scoring.
//!
//! Combines the inflation, sector, and sentiment estimates with the
//! policy's distributional profile into four component scores and one
//! weighted composite in [0, 100].

use serde::{Deserialize, Serialize};
use tracing::debug;

use polisim_common::{Error, Result};
use polisim_common::config::EngineConfig;

use crate::inflation::InflationImpact;
use crate::profiles::{InequalityDirection, SensitivityProfile};
use crate::sector::SectorImpactReport;
use crate::sentiment::SentimentReport;

// ============================================================================
// Risk Level
// ============================================================================

/// Composite risk bucket.
///
/// Buckets are half-open with an inclusive lower bound: a score of exactly
/// 25 is Low, exactly 50 is Moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Bucket a composite score. Scores are clamped to [0, 100] first.
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 100.0);
        if score <= 25.0 {
            Self::Low
        } else if score <= 50.0 {
            Self::Moderate
        } else if score <= 75.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    /// Whether this level calls for active mitigation.
    pub const fn needs_mitigation(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

// ============================================================================
// Assessment Types
// ============================================================================

/// The four risk components, each in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskComponents {
    pub economic: f64,
    pub sector_disruption: f64,
    pub social_unrest: f64,
    pub inequality: f64,
}

/// Composite risk assessment for one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Weighted composite in [0, 100]
    pub composite_score: f64,
    /// Bucket of the composite score
    pub level: RiskLevel,
    pub components: RiskComponents,
}

// ============================================================================
// Calculator
// ============================================================================

/// Computes component and composite risk scores.
pub struct RiskCalculator {
    config: EngineConfig,
}

impl RiskCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Economic risk: scaled |inflation change|, discounted by model
    /// confidence, on top of a confidence-independent floor.
    fn economic_risk(&self, inflation: &InflationImpact) -> f64 {
        let scaled = (inflation.change_from_baseline.abs() * self.config.economic_risk_scale)
            .min(100.0);
        let discounted = scaled * (inflation.confidence / 100.0);
        (discounted + self.config.economic_risk_floor).clamp(0.0, 100.0)
    }

    /// Sector disruption risk: scaled mean absolute impact across all
    /// sectors.
    fn sector_disruption_risk(&self, sectors: &SectorImpactReport) -> Result<f64> {
        if sectors.scores.is_empty() {
            return Err(Error::NumericInstability(
                "sector report carries no scores".into(),
            ));
        }
        let mean_abs: f64 = sectors.scores.values().map(|s| s.abs()).sum::<f64>()
            / sectors.scores.len() as f64;
        Ok((mean_abs * 100.0).clamp(0.0, 100.0))
    }

    /// Social unrest risk: scaled unrest probability combined with the
    /// negative-sentiment ratio.
    fn social_unrest_risk(&self, sentiment: &SentimentReport) -> f64 {
        (sentiment.social_unrest_probability * self.config.unrest_scale
            + sentiment.negative_ratio * self.config.negative_ratio_weight)
            .clamp(0.0, 100.0)
    }

    /// Inequality risk: the effective magnitude scaled by the profile's
    /// severity, with regressive policies gaining faster than progressive
    /// ones.
    fn inequality_risk(&self, profile: &SensitivityProfile, effective_magnitude: f64) -> f64 {
        let gain = match profile.inequality {
            InequalityDirection::Regressive => self.config.regressive_gain,
            InequalityDirection::Progressive => self.config.progressive_gain,
        };
        (effective_magnitude.abs() * profile.inequality_severity * gain).clamp(0.0, 100.0)
    }

    /// Combine the component estimates into the composite assessment.
    pub fn assess(
        &self,
        inflation: &InflationImpact,
        sectors: &SectorImpactReport,
        sentiment: &SentimentReport,
        profile: &SensitivityProfile,
        effective_magnitude: f64,
    ) -> Result<RiskAssessment> {
        let components = RiskComponents {
            economic: self.economic_risk(inflation),
            sector_disruption: self.sector_disruption_risk(sectors)?,
            social_unrest: self.social_unrest_risk(sentiment),
            inequality: self.inequality_risk(profile, effective_magnitude),
        };

        let weights = &self.config.risk_weights;
        let composite_score = (components.economic * weights.economic
            + components.sector_disruption * weights.sector_disruption
            + components.social_unrest * weights.social_unrest
            + components.inequality * weights.inequality)
            .clamp(0.0, 100.0);

        if !composite_score.is_finite() {
            return Err(Error::NumericInstability(
                "composite risk score is not finite".into(),
            ));
        }

        let level = RiskLevel::from_score(composite_score);
        debug!(composite_score, %level, "Risk assessment complete");

        Ok(RiskAssessment {
            composite_score,
            level,
            components,
        })
    }
}
