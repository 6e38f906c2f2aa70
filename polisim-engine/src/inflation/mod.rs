//! Inflation impact prediction.
//!
//! Derives the model feature vector from the policy and baseline, invokes
//! the injected trained model, and normalizes its output into the
//! guarantees the rest of the pipeline relies on.

mod features;

pub use features::{InflationFeatures, InflationPrediction};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use polisim_common::{Error, Result};

use crate::data::{EconomicBaseline, TrainedInflationModel};
use crate::profiles::SensitivityProfile;
use crate::types::PolicyInput;

/// Inflation impact of one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationImpact {
    /// Predicted annual inflation rate (%), finite and non-negative
    pub predicted_rate: f64,
    /// Baseline inflation rate the prediction is measured against (%)
    pub baseline: f64,
    /// Predicted minus baseline (%)
    pub change_from_baseline: f64,
    /// Model confidence in [0, 100]
    pub confidence: f64,
}

/// Wraps the injected inflation model with feature derivation and output
/// normalization.
pub struct InflationPredictor {
    model: Arc<dyn TrainedInflationModel>,
}

impl InflationPredictor {
    pub fn new(model: Arc<dyn TrainedInflationModel>) -> Self {
        Self { model }
    }

    /// Predict the inflation impact of a policy against a baseline.
    ///
    /// A zero-magnitude policy is no shock: the baseline rate is returned
    /// directly instead of trusting the model to be exactly
    /// baseline-stable.
    pub async fn predict_impact(
        &self,
        input: &PolicyInput,
        baseline: &EconomicBaseline,
        profile: &SensitivityProfile,
    ) -> Result<InflationImpact> {
        if input.magnitude == 0.0 {
            return Ok(InflationImpact {
                predicted_rate: baseline.inflation_rate,
                baseline: baseline.inflation_rate,
                change_from_baseline: 0.0,
                confidence: 100.0,
            });
        }

        let features = InflationFeatures::derive(input, baseline, profile);
        let prediction = self.model.predict(&features).await?;

        if !prediction.rate.is_finite() || !prediction.confidence.is_finite() {
            return Err(Error::NumericInstability(format!(
                "inflation model returned non-finite output: rate={}, confidence={}",
                prediction.rate, prediction.confidence
            )));
        }

        let predicted_rate = prediction.rate.max(0.0);
        let confidence = prediction.confidence.clamp(0.0, 100.0);

        debug!(
            policy_type = %input.policy_type,
            predicted_rate,
            confidence,
            "Inflation prediction complete"
        );

        Ok(InflationImpact {
            predicted_rate,
            baseline: baseline.inflation_rate,
            change_from_baseline: predicted_rate - baseline.inflation_rate,
            confidence,
        })
    }
}
