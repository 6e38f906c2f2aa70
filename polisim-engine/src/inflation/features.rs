//! Feature derivation for the trained inflation model.

use serde::{Deserialize, Serialize};

use crate::data::EconomicBaseline;
use crate::profiles::{InflationFeature, SensitivityProfile};
use crate::types::PolicyInput;

/// Feature vector consumed by the trained inflation model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationFeatures {
    /// Change in fuel prices (%)
    pub fuel_price_change: f64,
    /// Change in the tax rate (percentage points)
    pub tax_rate_change: f64,
    /// Change in subsidy volume (%)
    pub subsidy_change: f64,
    /// Baseline interest rate (%)
    pub interest_rate: f64,
    /// Baseline money supply growth (% YoY)
    pub money_supply_growth: f64,
}

impl InflationFeatures {
    /// Derive the feature vector for a policy against a baseline.
    ///
    /// The profile routes the duration-damped magnitude onto exactly one
    /// shock feature; the remaining shock features stay at zero and the
    /// monetary features come straight from the baseline snapshot.
    pub fn derive(
        input: &PolicyInput,
        baseline: &EconomicBaseline,
        profile: &SensitivityProfile,
    ) -> Self {
        let shock = input.effective_magnitude() * profile.feature_coefficient;

        let mut features = Self {
            fuel_price_change: 0.0,
            tax_rate_change: 0.0,
            subsidy_change: 0.0,
            interest_rate: baseline.interest_rate,
            money_supply_growth: baseline.money_supply_growth,
        };

        match profile.inflation_feature {
            InflationFeature::FuelPriceChange => features.fuel_price_change = shock,
            InflationFeature::TaxRateChange => features.tax_rate_change = shock,
            InflationFeature::SubsidyChange => features.subsidy_change = shock,
        }

        features
    }
}

/// Output of the trained inflation model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationPrediction {
    /// Predicted annual inflation rate (%)
    pub rate: f64,
    /// Model confidence in [0, 100]
    pub confidence: f64,
}
