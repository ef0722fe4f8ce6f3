// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for mosaic enumeration.
//!
//! These tests validate that the generator:
//! - Produces the known number of mosaics for small sizes
//! - Emits them in lexicographic order, empty mosaic first
//! - Produces only suitably connected mosaics
//! - Leaves the search context as it found it once exhausted

mod common;

use legendrian_mosaics::context::SearchContext;
use legendrian_mosaics::engine::EngineBuilder;
use legendrian_mosaics::geometry::{Mosaic, Port};
use legendrian_mosaics::predicates::{FailPredicate, MosaicGenerator, TilePredicate};
use legendrian_mosaics::state::statistics::{Counters, Statistics};

#[test]
fn test_known_counts() {
    let counts: Vec<usize> = (1..=4).map(|n| MosaicGenerator::new(n).count()).collect();
    assert_eq!(counts, vec![1, 2, 20, 1504]);
}

#[test]
fn test_output_is_sorted_and_starts_empty() {
    let text = common::enumeration(4);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "0000000000000000");
    assert_eq!(lines[1], "0000000000210034");
    assert!(lines.windows(2).all(|pair| pair[0] < pair[1]));
}

/// Every strand end meets a strand end of its neighbour, never the border.
fn suitably_connected(mosaic: &Mosaic) -> bool {
    (0..mosaic.len()).all(|index| {
        Port::ALL.iter().all(|&port| {
            let has = mosaic.tile(index).has_port(port);
            match mosaic.neighbor(index, port.opposite()) {
                Some(other) => has == mosaic.tile(other).has_port(port.opposite()),
                None => !has,
            }
        })
    })
}

#[test]
fn test_every_generated_mosaic_is_suitably_connected() {
    for n in 1..=4 {
        for mosaic in MosaicGenerator::new(n) {
            assert!(suitably_connected(&mosaic), "{}", mosaic);
        }
    }
}

#[test]
fn test_fail_terminal_counts_without_suspending() {
    let mut ctx = SearchContext::new(3);
    let engine = EngineBuilder::new()
        .add(Box::new(TilePredicate))
        .add(Statistics::counting_predicate(Counters::Generated, None))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::Generated), 20);
    assert!(ctx.trail.is_empty());
    assert_eq!(ctx.mosaic().unwrap().to_string(), "000000000");
}

#[test]
fn test_filtered_counting() {
    fn has_crossing(ctx: &SearchContext) -> bool {
        (0..ctx.tile_count()).any(|i| ctx.tile(i).is_crossing())
    }

    let mut ctx = SearchContext::new(4);
    let engine = EngineBuilder::new()
        .add(Box::new(TilePredicate))
        .add(Statistics::counting_predicate(Counters::Generated, Some(has_crossing)))
        .terminal(Box::new(FailPredicate))
        .build();
    assert!(engine.search(&mut ctx).is_none());

    let expected = MosaicGenerator::new(4)
        .filter(|m| m.tiles().iter().any(|t| t.is_crossing()))
        .count() as u64;
    let generated = ctx.statistics.get(Counters::Generated);
    assert_eq!(generated, expected);
    assert!(generated > 0 && generated < 1504);
}

#[test]
fn test_enumeration_round_trips_through_parser() {
    use legendrian_mosaics::traversal::{traverse, TraversalFailure, DEFAULT_STEP_LIMIT_FACTOR};

    let text = common::enumeration(3);
    let mosaics: Vec<Mosaic> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(mosaics.len(), 20);
    assert!(matches!(
        traverse(&mosaics[0], DEFAULT_STEP_LIMIT_FACTOR),
        Err(TraversalFailure::EmptyDiagram)
    ));
    let knots = mosaics[1..]
        .iter()
        .filter(|m| traverse(m, DEFAULT_STEP_LIMIT_FACTOR).is_ok())
        .count();
    assert_eq!(knots, 17);
}
