// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration for the cataloguer.
//!
//! All fields have defaults, so an empty JSON object (or no file at all) is a
//! valid configuration:
//!
//! ```json
//! {
//!   "step_limit_factor": 4,
//!   "trivial_name": "0_1",
//!   "names": { "[-1, 2, -2, 1]:[-1, -1]": "0_1" }
//! }
//! ```

use crate::oracle::{GaussDiagramOracle, TableOracle, TRIVIAL_KNOT};
use crate::traversal::DEFAULT_STEP_LIMIT_FACTOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid configuration JSON.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// A walk is abandoned after `step_limit_factor * n²` connections.
    pub step_limit_factor: usize,
    /// Identity given to knots with at most one crossing.
    pub trivial_name: String,
    /// Canonical names for opaque invariant values.
    pub names: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_limit_factor: DEFAULT_STEP_LIMIT_FACTOR,
            trivial_name: TRIVIAL_KNOT.to_string(),
            names: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path)?;
        Self::from_json(&bytes)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The default oracle with this configuration's name table.
    pub fn oracle(&self) -> TableOracle<GaussDiagramOracle> {
        TableOracle::new(GaussDiagramOracle, self.names.clone())
    }
}
