// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Whether it is being called, is iterating over choices, or has already
//!   succeeded deterministically
//!
//! The engine follows a WAM-like execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! Resuming a suspended engine treats the suspending predicate as failed, so
//! each resumption backtracks into the search and looks for the next
//! solution.
//!
//! # Example
//!
//! ```
//! use legendrian_mosaics::context::SearchContext;
//! use legendrian_mosaics::engine::{EngineBuilder, Predicate, PredicateResult};
//! use legendrian_mosaics::predicates::SuspendPredicate;
//!
//! #[derive(Debug)]
//! struct Three;
//!
//! impl Predicate for Three {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(3)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//! }
//!
//! let mut ctx = SearchContext::new(1);
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(Three))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! let mut solutions = 0;
//! while let Some(suspended) = engine.search(&mut ctx) {
//!     solutions += 1;
//!     engine = suspended;
//! }
//! assert_eq!(solutions, 3);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::warn;

/// Initial capacity of the predicate stack.
const INITIAL_STACK_SIZE: usize = 64;

/// How a stack entry will be resumed on backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// try_pred has not been called yet.
    Call,
    /// Iterating over choices; `next` is the next one to retry.
    Choice { next: usize, count: usize },
    /// try_pred succeeded without choices; backtracking pops it.
    Done,
}

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    mode: Mode,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("predicates", &self.predicates)
            .field("depth", &self.stack.len())
            .field("try_count", &self.try_count)
            .field("retry_count", &self.retry_count)
            .finish()
    }
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer [`EngineBuilder`],
    /// which requires the sequence to end with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until the next suspension.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; calling search() again resumes it
    /// - `None` if exhausted (backtracked past first predicate)
    ///
    /// Solutions are communicated by side effects in `ctx`, which the caller
    /// can inspect while the engine is suspended.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.predicates.is_empty() {
            return None;
        }

        if self.stack.is_empty() {
            self.push(0, 0, ctx);
        } else {
            // Resuming: the suspended predicate fails.
            self.stack.pop();
        }

        loop {
            let entry = self.stack.last_mut()?;

            ctx.rewind_to(entry.trail_checkpoint);

            let (index, round) = (entry.predicate_index, entry.round);
            let result = match entry.mode {
                Mode::Call => {
                    self.try_count += 1;
                    let result = self.predicates[index].try_pred(ctx, round);
                    if let PredicateResult::Choices(count) = result {
                        entry.mode = Mode::Choice { next: 0, count };
                        entry.trail_checkpoint = ctx.trail.len();
                        continue;
                    }
                    entry.mode = Mode::Done;
                    result
                }
                Mode::Choice { next, count } => {
                    if next >= count {
                        self.stack.pop();
                        continue;
                    }
                    entry.mode = Mode::Choice {
                        next: next + 1,
                        count,
                    };
                    self.retry_count += 1;
                    match self.predicates[index].retry_pred(ctx, round, next) {
                        result @ (PredicateResult::Choices(_) | PredicateResult::Suspend) => {
                            warn!(
                                predicate = self.predicates[index].name(),
                                ?result,
                                "retry_pred returned an invalid result; treating as failure"
                            );
                            continue;
                        }
                        PredicateResult::Failure => continue,
                        result => result,
                    }
                }
                Mode::Done => {
                    self.stack.pop();
                    continue;
                }
            };

            match result {
                PredicateResult::Success => {
                    if index + 1 >= self.predicates.len() {
                        warn!("predicate sequence ended without a terminal predicate");
                        continue;
                    }
                    self.push(index + 1, 0, ctx);
                }
                PredicateResult::SuccessSamePredicate => self.push(index, round + 1, ctx),
                PredicateResult::Failure => {
                    self.stack.pop();
                }
                PredicateResult::Suspend => return Some(self),
                PredicateResult::Choices(_) => {}
            }
        }
    }

    fn push(&mut self, predicate_index: usize, round: usize, ctx: &SearchContext) {
        self.stack.push(StackEntry {
            predicate_index,
            round,
            mode: Mode::Call,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for a predicate program that always ends in a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Finish the program with `terminal`.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, terminal: Box<T>) -> TerminatedBuilder {
        self.predicates.push(terminal);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete predicate program, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
