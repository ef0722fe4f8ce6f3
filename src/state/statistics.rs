// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are run-wide counters. The batch driver increments them per
//! diagram, and the generator increments them through a counting predicate.
//! Every traversal failure kind has its own slot after the named counters.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::traversal::FailureKind;
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::info;

#[derive(Debug, EnumCount, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Diagram lines read (excluding the header).
    Diagrams,
    /// Lines that did not parse as a mosaic.
    Malformed,
    /// Diagrams that traverse to a single closed curve.
    Knots,
    /// Knots whose invariants had not been seen before.
    Cataloged,
    /// Mosaics written by the generator.
    Generated,
}

const COUNT: usize = Counters::COUNT + FailureKind::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one traversal failure of the given kind.
    pub fn record_failure(&mut self, kind: FailureKind) {
        self.stats[Counters::COUNT + kind.index()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of failures of the given kind.
    pub fn failures(&self, kind: FailureKind) -> u64 {
        self.stats[Counters::COUNT + kind.index()]
    }

    /// Total traversal failures of all kinds.
    pub fn total_failures(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }

    /// Log every non-zero counter.
    pub fn log(&self) {
        for counter in Counters::iter() {
            let value = self.get(counter);
            if value > 0 {
                let name: &'static str = counter.into();
                info!(counter = name, value, "statistics");
            }
        }
        for kind in FailureKind::iter() {
            let value = self.failures(kind);
            if value > 0 {
                info!(failure = kind.name(), value, "statistics");
            }
        }
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            let statistics = &mut ctx.statistics;
            statistics.increment(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
        assert_eq!(stats.total_failures(), 0);
    }

    #[test]
    fn test_increment() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Knots);
        stats.increment(Counters::Knots);
        stats.increment(Counters::Cataloged);
        assert_eq!(stats.get(Counters::Knots), 2);
        assert_eq!(stats.get(Counters::Cataloged), 1);
        assert_eq!(stats.get(Counters::Diagrams), 0);
    }

    #[test]
    fn test_failures_do_not_alias_counters() {
        let mut stats = Statistics::new();
        stats.record_failure(FailureKind::EmptyDiagram);
        stats.record_failure(FailureKind::Unsaturated);
        stats.record_failure(FailureKind::Unsaturated);
        assert_eq!(stats.failures(FailureKind::EmptyDiagram), 1);
        assert_eq!(stats.failures(FailureKind::Unsaturated), 2);
        assert_eq!(stats.total_failures(), 3);
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }
}
