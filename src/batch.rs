// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batch cataloguing of a stream of mosaics.
//!
//! The input is one mosaic per line. The first line is the empty mosaic of the
//! target size: it fixes n and is not classified. Every later non-blank line is
//! parsed, traversed, scored and offered to the catalogue. Each newly
//! catalogued mosaic is written as one output line and flushed immediately.
//!
//! Per-diagram problems (bad digits, wrong length, not a knot) are logged,
//! counted and skipped. Only I/O failures and an unusable header stop a run.
//!
//! # Example
//!
//! ```
//! use legendrian_mosaics::batch::BatchDriver;
//! use legendrian_mosaics::config::Config;
//!
//! let config = Config::default();
//! let mut driver = BatchDriver::new(&config, config.oracle());
//! let mut output = Vec::new();
//! let summary = driver
//!     .run("000000000\n000021034\n000210340\n".as_bytes(), &mut output)
//!     .unwrap();
//! assert_eq!(summary.knots, 2);
//! assert_eq!(summary.cataloged, 1);
//! assert_eq!(String::from_utf8(output).unwrap(), "0_1 |  -1 |   0 | 000021034\n");
//! ```

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::Config;
use crate::geometry::{Mosaic, ParseError};
use crate::invariants::InvariantRecord;
use crate::oracle::Oracle;
use crate::state::statistics::{Counters, Statistics};
use crate::traversal::{traverse, FailureKind, TraversalFailure};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("input has no header line")]
    MissingHeader,

    #[error("cannot fix mosaic size from header: {0}")]
    Header(ParseError),
}

/// What happened to one diagram line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line is not a mosaic of the run's size.
    Malformed(ParseError),
    /// The mosaic is not a single closed curve.
    Discarded(TraversalFailure),
    /// A knot whose invariants were already catalogued.
    Duplicate(InvariantRecord),
    /// A knot with new invariants.
    Cataloged(CatalogEntry),
}

/// Totals for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Edge length fixed by the header.
    pub size: usize,
    /// Diagram lines read, excluding the header and blank lines.
    pub diagrams: u64,
    /// Diagrams classified as knots, catalogued or not.
    pub knots: u64,
    /// Entries in the catalogue.
    pub cataloged: u64,
}

/// Runs mosaics through traversal, invariants and the catalogue.
///
/// The catalogue and statistics persist across [`run`](Self::run) and
/// [`process_line`](Self::process_line) calls; per-diagram state does not.
pub struct BatchDriver<'a, O> {
    config: &'a Config,
    oracle: O,
    catalog: Catalog,
    statistics: Statistics,
}

impl<'a, O: Oracle> BatchDriver<'a, O> {
    pub fn new(config: &'a Config, oracle: O) -> Self {
        Self {
            config,
            oracle,
            catalog: Catalog::new(),
            statistics: Statistics::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Consume the driver, keeping the catalogue.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Catalogue every mosaic in `input`, writing new entries to `output`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<BatchSummary, BatchError> {
        let mut lines = input.lines();
        let header = lines.next().ok_or(BatchError::MissingHeader)??;
        let header = Mosaic::parse(header.trim()).map_err(BatchError::Header)?;
        if !header.is_blank() {
            warn!(header = %header, "header mosaic is not empty; it is not classified");
        }
        let size = header.size();
        info!(size, "cataloguing mosaics");

        let diagrams_before = self.statistics.get(Counters::Diagrams);
        let knots_before = self.statistics.get(Counters::Knots);
        for line in lines {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Outcome::Cataloged(entry) = self.process_line(line, size) {
                writeln!(output, "{}", entry)?;
                output.flush()?;
            }
        }

        let summary = BatchSummary {
            size,
            diagrams: self.statistics.get(Counters::Diagrams) - diagrams_before,
            knots: self.statistics.get(Counters::Knots) - knots_before,
            cataloged: self.catalog.len() as u64,
        };
        info!(
            diagrams = summary.diagrams,
            knots = summary.knots,
            cataloged = summary.cataloged,
            "cataloguing complete"
        );
        Ok(summary)
    }

    /// Classify one mosaic line of edge length `size`.
    pub fn process_line(&mut self, line: &str, size: usize) -> Outcome {
        self.statistics.increment(Counters::Diagrams);
        let mosaic = match Mosaic::parse_with_size(line, size) {
            Ok(mosaic) => mosaic,
            Err(err) => {
                warn!(line, error = %err, "skipping malformed mosaic");
                self.statistics.increment(Counters::Malformed);
                return Outcome::Malformed(err);
            }
        };

        let traversal = match traverse(&mosaic, self.config.step_limit_factor) {
            Ok(traversal) => traversal,
            Err(failure) => {
                debug!(mosaic = line, %failure, "not a knot");
                self.statistics.record_failure(FailureKind::from(&failure));
                return Outcome::Discarded(failure);
            }
        };
        self.statistics.increment(Counters::Knots);

        let record =
            InvariantRecord::classify(&traversal, &self.oracle, &self.config.trivial_name);
        match self.catalog.insert(record.clone(), line.to_string()) {
            Some(entry) => {
                self.statistics.increment(Counters::Cataloged);
                Outcome::Cataloged(entry.clone())
            }
            None => Outcome::Duplicate(record),
        }
    }
}
