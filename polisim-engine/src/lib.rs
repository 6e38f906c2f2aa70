//! PoliSim Engine
//!
//! Deterministic multi-model estimation of the economic, sectoral, and
//! social impact of a proposed policy, plus ranking of competing scenarios.
//!
//! # Architecture
//!
//! ```text
//! PolicyInput ──┬─> Inflation Predictor  ──┐
//!               ├─> Sector Propagator     ─┼─> Risk Calculator ─> SimulationResult
//!               └─> Sentiment Synthesizer ─┘
//!
//! ScenarioComparator: fans the simulator out over N named scenarios and
//! reduces to a ranked comparison table.
//! ```
//!
//! # Key Concepts
//!
//! ## Sensitivity Profiles
//! All category-specific behavior (sector weights, inflation feature
//! routing, inequality direction) lives in one static table keyed by the
//! closed `PolicyType` enum.
//!
//! ## Injected Capabilities
//! The trained inflation model and the text polarity scorer are external
//! numerical capabilities behind traits; tests substitute deterministic
//! stubs.
//!
//! ## Determinism
//! No clocks, no randomness, no generated identifiers: identical input
//! against unchanged collaborators reproduces a bit-identical result.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod comparator;
pub mod data;
pub mod inflation;
pub mod profiles;
pub mod risk;
pub mod sector;
pub mod sentiment;
pub mod simulator;
pub mod types;

pub use comparator::{ComparisonResult, ComparisonRow, RankedScenario, ScenarioComparator};
pub use simulator::PolicySimulator;
pub use types::{NamedScenario, PolicyInput, PolicyType, Sector, SimulationResult};
