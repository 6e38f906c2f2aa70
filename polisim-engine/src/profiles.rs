//! Sensitivity profiles: the static parameters governing how each policy
//! category maps onto sector shocks, inflation features, and inequality.
//!
//! One profile per `PolicyType`. All category-specific behavior in the
//! pipeline flows through this table.

use crate::types::{PolicyType, Sector};

// ============================================================================
// Profile Components
// ============================================================================

/// Distributional direction of a policy's burden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InequalityDirection {
    /// Burden falls disproportionately on lower incomes
    Regressive,
    /// Burden falls disproportionately on higher incomes
    Progressive,
}

/// The inflation-model feature a policy shock is routed onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflationFeature {
    FuelPriceChange,
    TaxRateChange,
    SubsidyChange,
}

/// Static per-category parameters.
#[derive(Debug, Clone, Copy)]
pub struct SensitivityProfile {
    pub policy_type: PolicyType,
    /// Signed direct-impact weights for the sectors a category hits hardest
    pub sector_weights: &'static [(Sector, f64)],
    /// Weight applied to in-scope sectors without an explicit entry
    pub default_sector_weight: f64,
    /// Distributional direction of the burden
    pub inequality: InequalityDirection,
    /// Severity coefficient of the distributional effect
    pub inequality_severity: f64,
    /// Inflation feature the shock is routed onto
    pub inflation_feature: InflationFeature,
    /// Coefficient applied to the effective magnitude on that feature
    pub feature_coefficient: f64,
}

impl SensitivityProfile {
    /// Direct-impact weight for a sector under this category.
    pub fn sector_weight(&self, sector: Sector) -> f64 {
        self.sector_weights
            .iter()
            .find(|(s, _)| *s == sector)
            .map(|(_, w)| *w)
            .unwrap_or(self.default_sector_weight)
    }

    /// The sector this category hits hardest, used as the template focus.
    pub fn focus_sector(&self) -> Sector {
        self.sector_weights
            .first()
            .map(|(s, _)| *s)
            .unwrap_or(Sector::Services)
    }
}

// ============================================================================
// Profile Table
// ============================================================================

const DEFAULT_SECTOR_WEIGHT: f64 = -0.3;

static PROFILES: [SensitivityProfile; 6] = [
    SensitivityProfile {
        policy_type: PolicyType::FuelPriceChange,
        sector_weights: &[
            (Sector::Transport, -0.8),
            (Sector::Energy, -0.6),
            (Sector::Manufacturing, -0.5),
            (Sector::Agriculture, -0.4),
        ],
        default_sector_weight: DEFAULT_SECTOR_WEIGHT,
        inequality: InequalityDirection::Regressive,
        inequality_severity: 0.7,
        inflation_feature: InflationFeature::FuelPriceChange,
        feature_coefficient: 1.0,
    },
    SensitivityProfile {
        policy_type: PolicyType::TaxReform,
        sector_weights: &[
            (Sector::Manufacturing, -0.4),
            (Sector::Services, -0.3),
            (Sector::IT, -0.3),
        ],
        default_sector_weight: DEFAULT_SECTOR_WEIGHT,
        inequality: InequalityDirection::Regressive,
        inequality_severity: 0.5,
        inflation_feature: InflationFeature::TaxRateChange,
        feature_coefficient: 0.1,
    },
    SensitivityProfile {
        policy_type: PolicyType::SubsidyChange,
        sector_weights: &[
            (Sector::Agriculture, 0.6),
            (Sector::Energy, 0.4),
            (Sector::Healthcare, 0.3),
        ],
        default_sector_weight: DEFAULT_SECTOR_WEIGHT,
        inequality: InequalityDirection::Regressive,
        inequality_severity: 0.8,
        inflation_feature: InflationFeature::SubsidyChange,
        feature_coefficient: 1.0,
    },
    SensitivityProfile {
        policy_type: PolicyType::MinimumWageChange,
        sector_weights: &[
            (Sector::Services, -0.5),
            (Sector::Manufacturing, -0.4),
            (Sector::Agriculture, -0.3),
        ],
        default_sector_weight: DEFAULT_SECTOR_WEIGHT,
        inequality: InequalityDirection::Progressive,
        inequality_severity: 0.6,
        // Wage shocks feed inflation through labor costs
        inflation_feature: InflationFeature::FuelPriceChange,
        feature_coefficient: 0.3,
    },
    SensitivityProfile {
        policy_type: PolicyType::EnvironmentalRegulation,
        sector_weights: &[
            (Sector::Energy, -0.6),
            (Sector::Manufacturing, -0.5),
            (Sector::Transport, -0.4),
        ],
        default_sector_weight: DEFAULT_SECTOR_WEIGHT,
        inequality: InequalityDirection::Regressive,
        inequality_severity: 0.4,
        // Compliance costs feed inflation through energy prices
        inflation_feature: InflationFeature::FuelPriceChange,
        feature_coefficient: 0.4,
    },
    SensitivityProfile {
        policy_type: PolicyType::ImportExportTariff,
        sector_weights: &[
            (Sector::Manufacturing, 0.4),
            (Sector::IT, -0.3),
            (Sector::Services, -0.2),
        ],
        default_sector_weight: DEFAULT_SECTOR_WEIGHT,
        inequality: InequalityDirection::Regressive,
        inequality_severity: 0.5,
        // Trade costs feed inflation through import prices
        inflation_feature: InflationFeature::FuelPriceChange,
        feature_coefficient: 0.2,
    },
];

/// Look up the sensitivity profile for a policy category.
pub fn profile_for(policy_type: PolicyType) -> &'static SensitivityProfile {
    let index = match policy_type {
        PolicyType::FuelPriceChange => 0,
        PolicyType::TaxReform => 1,
        PolicyType::SubsidyChange => 2,
        PolicyType::MinimumWageChange => 3,
        PolicyType::EnvironmentalRegulation => 4,
        PolicyType::ImportExportTariff => 5,
    };
    &PROFILES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_policy_type_has_a_profile() {
        for policy_type in PolicyType::ALL {
            let profile = profile_for(policy_type);
            assert_eq!(profile.policy_type, policy_type);
            assert!(!profile.sector_weights.is_empty());
            assert!(profile.inequality_severity > 0.0);
            assert!(profile.feature_coefficient > 0.0);
        }
    }

    #[test]
    fn test_sector_weight_lookup() {
        let fuel = profile_for(PolicyType::FuelPriceChange);
        assert!((fuel.sector_weight(Sector::Transport) + 0.8).abs() < f64::EPSILON);
        // Unlisted sectors fall back to the default weight
        assert!((fuel.sector_weight(Sector::IT) + 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_subsidy_profile_is_positive_for_agriculture() {
        let subsidy = profile_for(PolicyType::SubsidyChange);
        assert!(subsidy.sector_weight(Sector::Agriculture) > 0.0);
    }

    #[test]
    fn test_minimum_wage_is_progressive() {
        let wage = profile_for(PolicyType::MinimumWageChange);
        assert_eq!(wage.inequality, InequalityDirection::Progressive);
    }

    #[test]
    fn test_focus_sector_is_strongest_weighted() {
        assert_eq!(
            profile_for(PolicyType::FuelPriceChange).focus_sector(),
            Sector::Transport
        );
        assert_eq!(
            profile_for(PolicyType::SubsidyChange).focus_sector(),
            Sector::Agriculture
        );
    }
}
