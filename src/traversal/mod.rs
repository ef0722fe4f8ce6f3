// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Strand traversal over a mosaic.
//!
//! The walk starts at the lowest-index non-empty tile and follows the strand
//! tile to tile through ports until it is back at the start with the start
//! tile saturated. At each step:
//!
//! 1. Select the unique connection of the current tile matching the entry port.
//! 2. Record it; tiles of type < 7 saturate after one connection, types 7-9 after two.
//! 3. Count it if it is a cusp.
//! 4. On a crossing tile, let the [`CrossingBuilder`](crossing::CrossingBuilder)
//!    assign or resolve the crossing.
//! 5. Enter the neighbour through the port opposite the exit port.
//!
//! The walk succeeds only if, once closed, every tile is saturated: the
//! mosaic is then a single closed curve (a knot). Anything else is a
//! [`TraversalFailure`]; the walk never panics on malformed input.
//!
//! # Example
//!
//! ```
//! use legendrian_mosaics::geometry::Mosaic;
//! use legendrian_mosaics::traversal::{traverse, TraversalFailure};
//!
//! let unknot: Mosaic = "2134".parse().unwrap();
//! let knot = traverse(&unknot, 4).unwrap();
//! assert_eq!((knot.cusps.up, knot.cusps.down), (1, 1));
//!
//! let link: Mosaic = "2100340000210034".parse().unwrap();
//! assert!(matches!(
//!     traverse(&link, 4),
//!     Err(TraversalFailure::Unsaturated { unsaturated: 4, total: 16 })
//! ));
//! ```

pub mod crossing;
pub mod errors;

pub use crossing::{CrossingBuilder, CrossingSign, GaussCode};
pub use errors::{FailureKind, TraversalFailure};

use crate::geometry::Mosaic;
use crate::state::{CuspCounts, TraversalState};
use tracing::trace;

/// Default multiple of n² bounding the number of steps of a walk.
///
/// A closed walk makes at most two connections per tile.
pub const DEFAULT_STEP_LIMIT_FACTOR: usize = 4;

/// The bookkeeping of a completed walk over a knot mosaic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Signed crossing numbers in the order they were passed.
    pub gauss_code: GaussCode,
    /// Crossing signs indexed by crossing number - 1; all resolved.
    pub signs: Vec<CrossingSign>,
    /// Sum of the crossing signs.
    pub writhe: i64,
    pub cusps: CuspCounts,
    /// Number of connections made.
    pub steps: usize,
}

/// Walk the strand of `mosaic`, bounding the walk at `step_limit_factor * n²` steps.
pub fn traverse(mosaic: &Mosaic, step_limit_factor: usize) -> Result<Traversal, TraversalFailure> {
    let mut state = TraversalState::new(mosaic).ok_or(TraversalFailure::EmptyDiagram)?;
    let step_limit = step_limit_factor.saturating_mul(mosaic.len());

    while !state.is_closed() {
        if state.steps >= step_limit {
            return Err(TraversalFailure::StepLimitExceeded { steps: state.steps });
        }
        step(mosaic, &mut state)?;
    }

    let unsaturated = state.unsaturated_count();
    if unsaturated > 0 {
        return Err(TraversalFailure::Unsaturated {
            unsaturated,
            total: mosaic.len(),
        });
    }

    let (gauss_code, signs, writhe) = state.crossings.into_parts();
    Ok(Traversal {
        gauss_code,
        signs,
        writhe,
        cusps: state.cusps,
        steps: state.steps,
    })
}

/// Make one connection and move to the next tile.
fn step(mosaic: &Mosaic, state: &mut TraversalState) -> Result<(), TraversalFailure> {
    let tile = state.current;
    let kind = mosaic.tile(tile);
    let entry = state.entry;

    let connection = kind
        .connection_from(entry)
        .ok_or(TraversalFailure::NoMatchingConnection { tile, entry })?;
    let usage = &mut state.usage[tile];
    if usage.uses_strand(connection) || !usage.record(connection) {
        return Err(TraversalFailure::ConnectionReused { tile, entry });
    }
    if usage.count() >= kind.strand_count() {
        state.saturated[tile] = true;
    }
    state.steps += 1;
    state.cusps.observe(connection);

    if kind.is_crossing() {
        state.crossings.visit(tile, entry);
    }

    trace!(tile, kind = kind.value(), %connection, "step");

    let next_entry = connection.exit.opposite();
    state.current = mosaic
        .neighbor(tile, next_entry)
        .ok_or(TraversalFailure::LeftGrid {
            tile,
            exit: connection.exit,
        })?;
    state.entry = next_entry;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(s: &str) -> Result<Traversal, TraversalFailure> {
        traverse(&Mosaic::parse(s).unwrap(), DEFAULT_STEP_LIMIT_FACTOR)
    }

    #[test]
    fn test_smallest_unknot() {
        let knot = walk("2134").unwrap();
        assert!(knot.gauss_code.is_empty());
        assert!(knot.signs.is_empty());
        assert_eq!(knot.writhe, 0);
        assert_eq!(knot.cusps, CuspCounts { up: 1, down: 1 });
        assert_eq!(knot.steps, 4);
    }

    #[test]
    fn test_one_crossing() {
        let knot = walk("210391034").unwrap();
        assert_eq!(knot.gauss_code.entries(), &[-1, 1]);
        assert_eq!(knot.signs, vec![CrossingSign::Negative]);
        assert_eq!(knot.writhe, -1);
        assert_eq!(knot.cusps, CuspCounts { up: 0, down: 2 });
        // Eight strand tiles, the crossing passed twice.
        assert_eq!(knot.steps, 8);
    }

    #[test]
    fn test_two_crossings() {
        let knot = walk("2100391003910034").unwrap();
        assert_eq!(knot.gauss_code.entries(), &[-1, 2, -2, 1]);
        assert_eq!(
            knot.signs,
            vec![CrossingSign::Negative, CrossingSign::Negative]
        );
        assert_eq!(knot.writhe, -2);
        assert_eq!(knot.cusps, CuspCounts { up: 1, down: 1 });
    }

    #[test]
    fn test_blank() {
        assert_eq!(walk("000000000"), Err(TraversalFailure::EmptyDiagram));
    }

    #[test]
    fn test_dangling_strand() {
        // A lone corner tile: the strand runs into an empty tile.
        assert_eq!(
            walk("210000000"),
            Err(TraversalFailure::NoMatchingConnection {
                tile: 3,
                entry: crate::geometry::Port::UP
            })
        );
        assert!(matches!(
            walk("001000000"),
            Err(TraversalFailure::NoMatchingConnection { tile: 5, .. })
        ));
    }

    #[test]
    fn test_leaves_grid() {
        // Horizontal strand running off the right-hand edge.
        assert_eq!(
            walk("0005"),
            Err(TraversalFailure::LeftGrid {
                tile: 3,
                exit: crate::geometry::Port::RIGHT
            })
        );
    }

    #[test]
    fn test_link_is_not_a_knot() {
        assert_eq!(
            walk("2100340000210034"),
            Err(TraversalFailure::Unsaturated {
                unsaturated: 4,
                total: 16
            })
        );
    }

    #[test]
    fn test_double_tile_start_cannot_reuse_its_strand() {
        // Start tile 8 closes its right-down strand, leaving the left-up strand unused.
        assert!(matches!(
            walk("8134"),
            Err(TraversalFailure::ConnectionReused { tile: 0, .. })
        ));
    }

    #[test]
    fn test_step_limit() {
        assert_eq!(
            traverse(&Mosaic::parse("2134").unwrap(), 0),
            Err(TraversalFailure::StepLimitExceeded { steps: 0 })
        );
        // Exactly enough steps is fine.
        assert!(traverse(&Mosaic::parse("2134").unwrap(), 1).is_ok());
    }
}
