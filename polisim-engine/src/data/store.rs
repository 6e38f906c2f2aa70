//! File-backed implementation of the data provider contracts.
//!
//! Reads the JSON datasets bundled under the engine's `data/` directory or
//! an operator-supplied directory from configuration.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use polisim_common::{Error, Result};

use super::provider::{EconomicBaselineProvider, SectorGraphProvider};
use super::EconomicBaseline;
use crate::sector::SectorGraph;

const BASELINE_FILE: &str = "economic_baseline.json";
const SECTOR_GRAPH_FILE: &str = "sector_interdependencies.json";

/// JSON dataset store.
#[derive(Debug, Clone)]
pub struct JsonDataStore {
    data_dir: PathBuf,
}

impl JsonDataStore {
    /// Create a store over an explicit dataset directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a store over the datasets bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    fn read(&self, file: &str) -> Result<String> {
        let path = self.data_dir.join(file);
        std::fs::read_to_string(&path).map_err(|e| {
            Error::DataUnavailable(format!("cannot read {}: {e}", path.display()))
        })
    }
}

#[async_trait]
impl EconomicBaselineProvider for JsonDataStore {
    async fn latest(&self) -> Result<EconomicBaseline> {
        let raw = self.read(BASELINE_FILE)?;
        let baseline: EconomicBaseline = serde_json::from_str(&raw)
            .map_err(|e| Error::DataUnavailable(format!("malformed {BASELINE_FILE}: {e}")))?;
        debug!(as_of = %baseline.as_of, "Loaded economic baseline snapshot");
        Ok(baseline)
    }
}

impl SectorGraphProvider for JsonDataStore {
    fn sector_graph(&self) -> Result<SectorGraph> {
        let raw = self.read(SECTOR_GRAPH_FILE)?;
        let graph = SectorGraph::from_json(&raw)?;
        debug!("Loaded sector interdependency graph");
        Ok(graph)
    }
}
