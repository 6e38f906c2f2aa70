//! Core domain types for the policy simulation engine.
//!
//! Policy categories and sectors are closed enums: adding a category means
//! adding a table entry in `profiles`, never a new conditional branch.

use serde::{Deserialize, Serialize};

use polisim_common::{Error, Result, Validate};

use crate::inflation::InflationImpact;
use crate::risk::{RiskAssessment, RiskLevel};
use crate::sector::SectorImpactReport;
use crate::sentiment::{SentimentCategory, SentimentReport};

// ============================================================================
// Policy Type
// ============================================================================

/// The closed set of supported policy categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    #[serde(rename = "Fuel Price Change")]
    FuelPriceChange,
    #[serde(rename = "Tax Reform")]
    TaxReform,
    #[serde(rename = "Subsidy Change")]
    SubsidyChange,
    #[serde(rename = "Minimum Wage Change")]
    MinimumWageChange,
    #[serde(rename = "Environmental Regulation")]
    EnvironmentalRegulation,
    #[serde(rename = "Import/Export Tariff")]
    ImportExportTariff,
}

impl PolicyType {
    /// All supported policy categories.
    pub const ALL: [PolicyType; 6] = [
        PolicyType::FuelPriceChange,
        PolicyType::TaxReform,
        PolicyType::SubsidyChange,
        PolicyType::MinimumWageChange,
        PolicyType::EnvironmentalRegulation,
        PolicyType::ImportExportTariff,
    ];

    /// Human-readable category name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FuelPriceChange => "Fuel Price Change",
            Self::TaxReform => "Tax Reform",
            Self::SubsidyChange => "Subsidy Change",
            Self::MinimumWageChange => "Minimum Wage Change",
            Self::EnvironmentalRegulation => "Environmental Regulation",
            Self::ImportExportTariff => "Import/Export Tariff",
        }
    }
}

impl std::fmt::Display for PolicyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Sector
// ============================================================================

/// The fixed 8-sector breakdown of the economy.
///
/// Declaration order is the canonical order of the interdependency matrix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Sector {
    Agriculture,
    Manufacturing,
    Services,
    Transport,
    Energy,
    Healthcare,
    Education,
    IT,
}

impl Sector {
    /// Number of sectors.
    pub const COUNT: usize = 8;

    /// All sectors in canonical matrix order.
    pub const ALL: [Sector; Sector::COUNT] = [
        Sector::Agriculture,
        Sector::Manufacturing,
        Sector::Services,
        Sector::Transport,
        Sector::Energy,
        Sector::Healthcare,
        Sector::Education,
        Sector::IT,
    ];

    /// Position of this sector in the canonical order.
    pub const fn index(self) -> usize {
        match self {
            Self::Agriculture => 0,
            Self::Manufacturing => 1,
            Self::Services => 2,
            Self::Transport => 3,
            Self::Energy => 4,
            Self::Healthcare => 5,
            Self::Education => 6,
            Self::IT => 7,
        }
    }

    /// Sector name as used in datasets and display.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Agriculture => "Agriculture",
            Self::Manufacturing => "Manufacturing",
            Self::Services => "Services",
            Self::Transport => "Transport",
            Self::Energy => "Energy",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::IT => "IT",
        }
    }

    /// Parse a sector from its dataset name.
    pub fn parse(name: &str) -> Result<Self> {
        Sector::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::InvalidInput(format!("unknown sector: {name}")))
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Policy Input
// ============================================================================

/// Magnitude bounds accepted for a policy shock (signed percentage).
pub const MAGNITUDE_RANGE: (f64, f64) = (-50.0, 50.0);

/// Duration bounds accepted for a policy rollout (months).
pub const DURATION_RANGE: (u32, u32) = (1, 60);

/// A proposed policy to simulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyInput {
    /// Policy category
    pub policy_type: PolicyType,
    /// Magnitude of the change (signed %, [-50, 50])
    pub magnitude: f64,
    /// Rollout duration in months ([1, 60])
    pub duration_months: u32,
    /// Sectors eligible for direct impact; `None` means all sectors
    #[serde(default)]
    pub affected_sectors: Option<Vec<Sector>>,
    /// Free-text description, carried through for display only
    #[serde(default)]
    pub description: String,
}

impl PolicyInput {
    /// The magnitude after duration damping.
    ///
    /// Rollouts longer than a year dilute the instantaneous shock
    /// proportionally; shorter rollouts are not amplified.
    pub fn effective_magnitude(&self) -> f64 {
        self.magnitude * (12.0 / self.duration_months as f64).min(1.0)
    }

    /// The sectors eligible for direct impact, in canonical order.
    pub fn resolved_sectors(&self) -> Vec<Sector> {
        match &self.affected_sectors {
            Some(sectors) => {
                let mut resolved: Vec<Sector> = Sector::ALL
                    .into_iter()
                    .filter(|s| sectors.contains(s))
                    .collect();
                resolved.dedup();
                resolved
            }
            None => Sector::ALL.to_vec(),
        }
    }
}

impl Validate for PolicyInput {
    fn validate(&self) -> Result<()> {
        if !self.magnitude.is_finite() {
            return Err(Error::InvalidInput("magnitude must be finite".into()));
        }
        if self.magnitude < MAGNITUDE_RANGE.0 || self.magnitude > MAGNITUDE_RANGE.1 {
            return Err(Error::InvalidInput(format!(
                "magnitude {} outside [{}, {}]",
                self.magnitude, MAGNITUDE_RANGE.0, MAGNITUDE_RANGE.1
            )));
        }
        if self.duration_months < DURATION_RANGE.0 || self.duration_months > DURATION_RANGE.1 {
            return Err(Error::InvalidInput(format!(
                "duration_months {} outside [{}, {}]",
                self.duration_months, DURATION_RANGE.0, DURATION_RANGE.1
            )));
        }
        if let Some(sectors) = &self.affected_sectors {
            if sectors.is_empty() {
                return Err(Error::InvalidInput(
                    "affected_sectors must be omitted or non-empty".into(),
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Named Scenario
// ============================================================================

/// A named policy variant for comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    /// Scenario name (used for display and deterministic tie-breaking)
    pub name: String,
    #[serde(flatten)]
    pub policy: PolicyInput,
}

// ============================================================================
// Simulation Result
// ============================================================================

/// Echo of the simulated policy, resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDigest {
    pub policy_type: PolicyType,
    pub magnitude: f64,
    pub duration_months: u32,
    pub affected_sectors: Vec<Sector>,
    pub description: String,
}

impl PolicyDigest {
    pub fn from_input(input: &PolicyInput) -> Self {
        Self {
            policy_type: input.policy_type,
            magnitude: input.magnitude,
            duration_months: input.duration_months,
            affected_sectors: input.resolved_sectors(),
            description: input.description.clone(),
        }
    }
}

/// Headline numbers of a simulation, for dashboards and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStats {
    pub inflation_rate: f64,
    pub risk_level: RiskLevel,
    pub public_sentiment: SentimentCategory,
    pub most_affected_sectors: Vec<Sector>,
}

/// Executive summary attached to every simulation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub quick_stats: QuickStats,
    pub key_findings: Vec<String>,
}

/// Complete outcome of one policy simulation.
///
/// Immutable once produced; identical inputs against unchanged collaborators
/// reproduce an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub policy: PolicyDigest,
    pub inflation_impact: InflationImpact,
    pub sector_impacts: SectorImpactReport,
    pub sentiment: SentimentReport,
    pub risk: RiskAssessment,
    pub recommendations: Vec<String>,
    pub summary: ExecutiveSummary,
}
