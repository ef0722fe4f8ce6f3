// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for mosaic traversal.

use crate::geometry::Port;
use strum::{EnumCount, EnumDiscriminants, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Reasons a traversal does not produce a knot.
///
/// None of these are fatal to a batch: the diagram is discarded and
/// the failure kind is counted.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumDiscriminants)]
#[strum_discriminants(name(FailureKind))]
#[strum_discriminants(derive(EnumCount, EnumIter, IntoStaticStr))]
pub enum TraversalFailure {
    /// Every tile is empty, so there is no strand to follow.
    #[error("mosaic has no non-empty tile")]
    EmptyDiagram,

    /// The strand arrived through a port the tile does not use (dangling strand).
    #[error("tile {tile} has no connection entering through port {entry}")]
    NoMatchingConnection { tile: usize, entry: Port },

    /// The strand left through a port on the boundary of the grid.
    #[error("strand leaves the grid from tile {tile} through port {exit}")]
    LeftGrid { tile: usize, exit: Port },

    /// The strand came back onto a strand it had already traversed.
    #[error("tile {tile} strand entered through port {entry} was already traversed")]
    ConnectionReused { tile: usize, entry: Port },

    /// The walk did not close within the step bound.
    #[error("walk did not close after {steps} steps")]
    StepLimitExceeded { steps: usize },

    /// The walk closed but some tiles still have untraversed strands
    /// (a link with more than one component).
    #[error("walk closed with {unsaturated} of {total} tiles untraversed")]
    Unsaturated { unsaturated: usize, total: usize },
}

impl FailureKind {
    /// Index into a counter array of length `FailureKind::COUNT`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_indices_are_dense() {
        let indices: Vec<usize> = FailureKind::iter().map(FailureKind::index).collect();
        assert_eq!(indices, (0..FailureKind::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_kind_of_failure() {
        let failure = TraversalFailure::StepLimitExceeded { steps: 40 };
        assert_eq!(FailureKind::from(&failure), FailureKind::StepLimitExceeded);
        assert_eq!(FailureKind::Unsaturated.name(), "Unsaturated");
    }

    #[test]
    fn test_display() {
        let failure = TraversalFailure::NoMatchingConnection {
            tile: 3,
            entry: Port::UP,
        };
        assert_eq!(
            failure.to_string(),
            "tile 3 has no connection entering through port 1"
        );
    }
}
