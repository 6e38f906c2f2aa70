//! Validation trait shared by PoliSim types.

use crate::error::Result;

/// Types that can check their own internal consistency.
///
/// Implementors return `Error::InvalidInput` for caller mistakes and
/// `Error::Config` for configuration defects.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
