//! PoliSim Common - Shared error types, configuration, and logging for the
//! PoliSim ecosystem.
//!
//! This crate provides:
//! - The unified error type used across PoliSim crates
//! - Configuration types and loading
//! - Logging setup
//! - Validation trait
//! - Small numeric utilities

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;
pub mod util;
pub mod validation;

pub use config::{Config, DataConfig, EngineConfig, LoggingConfig, RiskWeights};
pub use error::{Error, Result, ResultExt};
pub use validation::Validate;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{Config, EngineConfig};
    pub use crate::error::{Error, Result};
    pub use crate::logging::init_logging;
    pub use crate::validation::Validate;
}
