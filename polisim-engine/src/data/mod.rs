//! Data contracts and stores for the simulation engine.
//!
//! The engine consumes a pre-loaded economic baseline and sector
//! interdependency dataset; it performs no data acquisition of its own.

mod provider;
mod store;

pub use provider::{
    EconomicBaselineProvider, HistoryStore, SectorGraphProvider, TextPolarityScorer,
    TrainedInflationModel,
};
pub use store::JsonDataStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of baseline economic indicators.
///
/// Supplied by an `EconomicBaselineProvider` and immutable for the duration
/// of a request. `as_of` is the snapshot date carried by the dataset, not a
/// call-time stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicBaseline {
    /// Baseline annual inflation rate (%)
    pub inflation_rate: f64,
    /// Central bank interest rate (%)
    pub interest_rate: f64,
    /// Money supply growth (% YoY)
    pub money_supply_growth: f64,
    /// GDP growth (% YoY)
    pub gdp_growth: f64,
    /// Unemployment rate (%)
    pub unemployment_rate: f64,
    /// Consumer confidence index
    pub consumer_confidence_index: f64,
    /// Snapshot date
    pub as_of: NaiveDate,
}
