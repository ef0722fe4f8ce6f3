// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of suitably connected mosaics.
//!
//! A mosaic is suitably connected when every strand end meets a strand end of
//! the neighbouring tile and no strand end faces the boundary. The generator
//! chooses tiles in row-major order; each choice is restricted by the
//! already-chosen up and left neighbours, so every completed grid is suitably
//! connected and no backtracking is wasted on the right or lower borders.
//!
//! The program run by the engine is:
//!
//! ```text
//! TilePredicate (one round per tile) -> count Generated -> Suspend
//! ```
//!
//! Candidates are tried in ascending digit order, so mosaics come out in
//! lexicographic order of their digit strings, starting with the empty mosaic.
//!
//! ```
//! use legendrian_mosaics::predicates::MosaicGenerator;
//!
//! let mosaics: Vec<String> = MosaicGenerator::new(2).map(|m| m.to_string()).collect();
//! assert_eq!(mosaics, vec!["0000", "2134"]);
//! ```

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
use crate::geometry::Mosaic;
use crate::predicates::SuspendPredicate;
use crate::state::statistics::{Counters, Statistics};
use std::io::{self, Write};
use tracing::{debug, info};

/// Chooses the tile at index `round`.
#[derive(Debug)]
pub struct TilePredicate;

impl Predicate for TilePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let tiles = ctx.tile_count();
        if tiles == 0 {
            return PredicateResult::Failure;
        }
        if round == tiles {
            return PredicateResult::Success;
        }
        match ctx.candidates(round).len() {
            0 => PredicateResult::Failure,
            n => PredicateResult::Choices(n),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        match ctx.candidates(round).get(choice).copied() {
            Some(kind) => {
                ctx.set_tile(round, kind);
                PredicateResult::SuccessSamePredicate
            }
            None => PredicateResult::Failure,
        }
    }

    fn name(&self) -> &str {
        "Tile"
    }
}

/// Iterator over every suitably connected n×n mosaic.
#[derive(Debug)]
pub struct MosaicGenerator {
    ctx: SearchContext,
    engine: Option<SearchEngine>,
}

impl MosaicGenerator {
    pub fn new(size: usize) -> Self {
        let engine = EngineBuilder::new()
            .add(Box::new(TilePredicate))
            .add(Statistics::counting_predicate(Counters::Generated, None))
            .terminal(Box::new(SuspendPredicate))
            .build();
        Self {
            ctx: SearchContext::new(size),
            engine: Some(engine),
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

impl Iterator for MosaicGenerator {
    type Item = Mosaic;

    fn next(&mut self) -> Option<Mosaic> {
        let engine = self.engine.take()?;
        match engine.search(&mut self.ctx) {
            Some(suspended) => {
                self.engine = Some(suspended);
                self.ctx.mosaic()
            }
            None => {
                debug!(size = self.ctx.size(), "enumeration exhausted");
                None
            }
        }
    }
}

/// Write every suitably connected `size`×`size` mosaic to `writer`, one per
/// line. Returns the number written.
pub fn generate<W: Write>(size: usize, mut writer: W) -> io::Result<u64> {
    let mut generator = MosaicGenerator::new(size);
    for mosaic in generator.by_ref() {
        writeln!(writer, "{}", mosaic)?;
    }
    writer.flush()?;
    let count = generator.statistics().get(Counters::Generated);
    info!(size, count, "generated mosaics");
    Ok(count)
}
