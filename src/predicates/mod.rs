// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used by the mosaic generator.
//!
//! # Organization
//!
//! - `generate`: TilePredicate choosing one tile per round, and the
//!   MosaicGenerator that drives the program
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod generate;

pub use generate::{generate, MosaicGenerator, TilePredicate};

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. As a terminal it drives
/// the engine through every alternative, with solutions observed through
/// side effects of earlier predicates.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Hands each solution back to the caller of
/// [`SearchEngine::search`](crate::engine::SearchEngine::search); resuming
/// the engine then backtracks into the search for the next solution.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
