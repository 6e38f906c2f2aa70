//! Collaborator contracts consumed by the simulation engine.
//!
//! Each trait is a stable contract, not an implementation: the trained
//! inflation model and the polarity scorer are external numerical
//! capabilities that tests substitute with deterministic stubs.

use async_trait::async_trait;

use polisim_common::Result;

use super::EconomicBaseline;
use crate::inflation::{InflationFeatures, InflationPrediction};
use crate::sector::SectorGraph;
use crate::types::SimulationResult;

/// Provides the current economic baseline snapshot.
///
/// Read-only; failures surface as `Error::DataUnavailable` and are not
/// retried by the engine.
#[async_trait]
pub trait EconomicBaselineProvider: Send + Sync {
    async fn latest(&self) -> Result<EconomicBaseline>;
}

/// Provides the fixed sector list, base weights, and interdependency matrix.
///
/// Loaded once at engine construction; the graph is read-only thereafter.
pub trait SectorGraphProvider: Send + Sync {
    fn sector_graph(&self) -> Result<SectorGraph>;
}

/// The trained inflation regressor.
///
/// Stateless from the engine's perspective: features in, rate and
/// confidence out. Failures surface as `Error::ModelUnavailable`.
#[async_trait]
pub trait TrainedInflationModel: Send + Sync {
    async fn predict(&self, features: &InflationFeatures) -> Result<InflationPrediction>;
}

/// Scores the polarity of a reaction statement.
///
/// Returns a value in [-1, 1]; out-of-range output is clamped by the
/// caller. Failures surface as `Error::ModelUnavailable`.
#[async_trait]
pub trait TextPolarityScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<f64>;
}

/// Append-only sink for completed simulation results.
///
/// Implemented and invoked by the calling layer; the engine never reads
/// history back and never writes it itself.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, result: &SimulationResult) -> Result<()>;
}
