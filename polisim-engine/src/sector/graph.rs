//! The sector interdependency graph: base weights plus the 8x8 influence
//! matrix describing how a shock to one sector ripples into others.

use std::collections::HashMap;

use serde::Deserialize;

use polisim_common::{Error, Result};

use crate::types::Sector;

/// Raw dataset shape: sector names map to weights and influence rows.
#[derive(Debug, Deserialize)]
struct RawSectorGraph {
    weights: HashMap<String, f64>,
    interdependencies: HashMap<String, HashMap<String, f64>>,
}

/// Validated sector weights and influence coefficients in canonical order.
///
/// `influence[row][col]` is the strength with which a direct shock to the
/// row sector spills into the column sector. Loaded once, read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorGraph {
    weights: [f64; Sector::COUNT],
    influence: [[f64; Sector::COUNT]; Sector::COUNT],
}

impl SectorGraph {
    /// Build a graph from raw parts, validating every coefficient.
    pub fn from_parts(
        weights: [f64; Sector::COUNT],
        influence: [[f64; Sector::COUNT]; Sector::COUNT],
    ) -> Result<Self> {
        let graph = Self { weights, influence };
        graph.check()?;
        Ok(graph)
    }

    /// Parse a graph from its JSON dataset form.
    pub fn from_json(raw: &str) -> Result<Self> {
        let raw: RawSectorGraph = serde_json::from_str(raw)?;

        let mut weights = [0.0; Sector::COUNT];
        for (name, weight) in &raw.weights {
            let sector = Sector::parse(name)
                .map_err(|_| malformed(format!("unknown sector in weights: {name}")))?;
            weights[sector.index()] = *weight;
        }

        let mut influence = [[0.0; Sector::COUNT]; Sector::COUNT];
        for (from_name, row) in &raw.interdependencies {
            let from = Sector::parse(from_name)
                .map_err(|_| malformed(format!("unknown sector in matrix: {from_name}")))?;
            for (to_name, coefficient) in row {
                let to = Sector::parse(to_name)
                    .map_err(|_| malformed(format!("unknown sector in matrix: {to_name}")))?;
                influence[from.index()][to.index()] = *coefficient;
            }
        }

        Self::from_parts(weights, influence)
    }

    /// Base weight of a sector (GDP-share-like).
    pub fn base_weight(&self, sector: Sector) -> f64 {
        self.weights[sector.index()]
    }

    /// Influence coefficient of a direct shock to `from` on `to`.
    pub fn influence(&self, from: Sector, to: Sector) -> f64 {
        self.influence[from.index()][to.index()]
    }

    fn check(&self) -> Result<()> {
        for sector in Sector::ALL {
            let weight = self.weights[sector.index()];
            if !weight.is_finite() || weight < 0.0 {
                return Err(malformed(format!(
                    "base weight for {sector} must be finite and non-negative, got {weight}"
                )));
            }
        }

        let weight_sum: f64 = self.weights.iter().sum();
        if !(0.5..=1.5).contains(&weight_sum) {
            return Err(malformed(format!(
                "base weights should sum to roughly 1.0, got {weight_sum}"
            )));
        }

        for from in Sector::ALL {
            for to in Sector::ALL {
                let coefficient = self.influence[from.index()][to.index()];
                if !coefficient.is_finite() || coefficient.abs() > 1.0 {
                    return Err(malformed(format!(
                        "influence {from} -> {to} must be finite with |c| <= 1, got {coefficient}"
                    )));
                }
            }
            if self.influence[from.index()][from.index()] != 0.0 {
                return Err(malformed(format!(
                    "influence matrix diagonal must be zero ({from} -> {from})"
                )));
            }
        }

        Ok(())
    }
}

fn malformed(detail: String) -> Error {
    Error::NumericInstability(format!("malformed sector graph: {detail}"))
}
