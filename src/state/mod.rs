// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-diagram mutable state.
//!
//! A `TraversalState` is created for one mosaic, mutated by the single walk
//! over it, and consumed when the walk ends. Nothing in it survives into the
//! next diagram; the only run-wide state is the catalog and the statistics.

pub mod statistics;

use crate::geometry::{Connection, Mosaic, Port};
use crate::traversal::crossing::CrossingBuilder;

/// Connections made through one tile. A tile carries at most two strands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileUsage {
    made: [Option<Connection>; 2],
}

impl TileUsage {
    /// Number of connections recorded (0..=2).
    pub fn count(&self) -> usize {
        self.made.iter().filter(|c| c.is_some()).count()
    }

    /// The first connection recorded, if any.
    pub fn first(&self) -> Option<Connection> {
        self.made[0]
    }

    /// True if the strand of `connection` has already been traversed, in either direction.
    pub fn uses_strand(&self, connection: Connection) -> bool {
        self.made.iter().flatten().any(|c| c.same_strand(connection))
    }

    /// Record a connection. Returns false if both slots are already taken.
    pub fn record(&mut self, connection: Connection) -> bool {
        match self.made.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(connection);
                true
            }
            None => false,
        }
    }
}

/// Cusp counters of the front projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CuspCounts {
    pub up: u32,
    pub down: u32,
}

impl CuspCounts {
    /// Count `connection` if it is a cusp.
    pub fn observe(&mut self, connection: Connection) {
        if connection.is_down_cusp() {
            self.down += 1;
        }
        if connection.is_up_cusp() {
            self.up += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.up + self.down
    }
}

/// Mutable state of a walk over one mosaic.
#[derive(Debug, Clone)]
pub struct TraversalState {
    /// Tile the walk is in.
    pub current: usize,
    /// Port through which the walk entered `current`.
    pub entry: Port,
    /// First non-empty tile; the walk closes here.
    pub start: usize,
    /// Connections made so far, per tile.
    pub usage: Vec<TileUsage>,
    /// Whether all strands of a tile have been traversed. Empty tiles start saturated.
    pub saturated: Vec<bool>,
    /// Crossing identities, signs, Gauss code and writhe.
    pub crossings: CrossingBuilder,
    pub cusps: CuspCounts,
    /// Connections made so far.
    pub steps: usize,
}

impl TraversalState {
    /// Fresh state positioned at the start tile, or None if the mosaic is blank.
    ///
    /// The walk starts with the entry port of the first listed connection
    /// of the start tile.
    pub fn new(mosaic: &Mosaic) -> Option<Self> {
        let start = mosaic.first_non_empty()?;
        let entry = mosaic.tile(start).connections().first()?.entry;
        Some(Self {
            current: start,
            entry,
            start,
            usage: vec![TileUsage::default(); mosaic.len()],
            saturated: mosaic.tiles().iter().map(|t| t.is_empty()).collect(),
            crossings: CrossingBuilder::new(mosaic.len()),
            cusps: CuspCounts::default(),
            steps: 0,
        })
    }

    /// True once the walk is back at the start tile with all its strands used.
    pub fn is_closed(&self) -> bool {
        self.current == self.start && self.saturated[self.start]
    }

    /// Number of tiles with untraversed strands.
    pub fn unsaturated_count(&self) -> usize {
        self.saturated.iter().filter(|s| !**s).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_usage() {
        let mut usage = TileUsage::default();
        let horizontal = Connection::new(Port::LEFT, Port::RIGHT);
        let vertical = Connection::new(Port::DOWN, Port::UP);
        assert_eq!(usage.count(), 0);
        assert!(!usage.uses_strand(horizontal));

        assert!(usage.record(horizontal));
        assert_eq!(usage.first(), Some(horizontal));
        assert!(usage.uses_strand(horizontal.reversed()));
        assert!(!usage.uses_strand(vertical));

        assert!(usage.record(vertical));
        assert_eq!(usage.count(), 2);
        assert!(!usage.record(vertical));
        assert_eq!(usage.first(), Some(horizontal));
    }

    #[test]
    fn test_cusp_counts() {
        let mut cusps = CuspCounts::default();
        cusps.observe(Connection::new(Port::RIGHT, Port::DOWN));
        cusps.observe(Connection::new(Port::LEFT, Port::UP));
        cusps.observe(Connection::new(Port::LEFT, Port::RIGHT));
        assert_eq!(cusps, CuspCounts { up: 1, down: 1 });
        assert_eq!(cusps.total(), 2);
    }

    #[test]
    fn test_new_state() {
        let mosaic = Mosaic::parse("000021034").unwrap();
        let state = TraversalState::new(&mosaic).unwrap();
        assert_eq!(state.start, 4);
        assert_eq!(state.current, 4);
        assert_eq!(state.entry, Port::RIGHT);
        assert_eq!(state.unsaturated_count(), 4);
        assert!(!state.is_closed());
    }

    #[test]
    fn test_blank_has_no_state() {
        let mosaic = Mosaic::parse("0000").unwrap();
        assert!(TraversalState::new(&mosaic).is_none());
    }
}
