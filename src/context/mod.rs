// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the immutable candidate table
//! - Tier 2 (DYNAMIC): the partial mosaic, with trail-based backtracking
//!
//! Every tile write goes through [`SearchContext::set_tile`], which records the
//! previous digit on the trail, so [`SearchContext::rewind_to`] can restore any
//! earlier partial mosaic exactly.

use crate::geometry::{Mosaic, Port, TileKind};
use crate::memo::{port_code, CandidateTable, PortState};
use crate::state::statistics::Statistics;
use crate::trail::Trail;

/// Immutable precomputed data (Tier 1: MEMO).
#[derive(Debug, Clone, Default)]
pub struct MemoizedData {
    pub candidates: CandidateTable,
}

impl MemoizedData {
    pub fn new() -> Self {
        Self {
            candidates: CandidateTable::initialize(),
        }
    }
}

/// Mutable search state (Tier 2: DYNAMIC).
///
/// Tiles are stored row-major. Tiles the generator has not reached yet hold
/// the empty tile.
#[derive(Debug, Clone)]
pub struct DynamicState {
    pub size: usize,
    pub tiles: Vec<TileKind>,
}

impl DynamicState {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            tiles: vec![TileKind::EMPTY; size * size],
        }
    }
}

/// Search context for enumerating mosaics of one size.
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,        // Tier 1: Immutable, shared
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // run-wide counters, never rewound
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext {
    pub memo: MemoizedData,
    pub trail: Trail,
    pub state: DynamicState,
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context for n×n mosaics with freshly built MEMO data.
    pub fn new(size: usize) -> Self {
        Self::with_memo(MemoizedData::new(), size)
    }

    /// Create a context sharing existing MEMO data.
    pub fn with_memo(memo: MemoizedData, size: usize) -> Self {
        Self {
            memo,
            trail: Trail::new(),
            state: DynamicState::new(size),
            statistics: Statistics::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.state.size
    }

    pub fn tile_count(&self) -> usize {
        self.state.tiles.len()
    }

    pub fn tile(&self, index: usize) -> TileKind {
        self.state.tiles[index]
    }

    /// Assign a tile, recording its previous kind on the trail.
    pub fn set_tile(&mut self, index: usize, kind: TileKind) {
        let old = self.state.tiles[index];
        self.trail.record_change(index, old.value());
        self.state.tiles[index] = kind;
    }

    /// Undo every tile assignment made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        let tiles = &mut self.state.tiles;
        self.trail.rewind_to(checkpoint, |entry| {
            if let Some(kind) = TileKind::try_new(entry.old_value) {
                tiles[entry.index] = kind;
            }
        });
    }

    /// Port-state code for the tile at `index`, given that every tile before
    /// it in row-major order is already chosen.
    pub fn constraint_code(&self, index: usize) -> usize {
        let n = self.size();
        let (row, col) = (index / n, index % n);
        let bounded = |at_edge: bool| {
            if at_edge {
                PortState::Closed
            } else {
                PortState::Free
            }
        };
        let neighbour = |at_edge: bool, other: usize, port: Port| {
            if at_edge {
                PortState::Closed
            } else if self.tile(other).has_port(port) {
                PortState::Open
            } else {
                PortState::Closed
            }
        };
        port_code([
            bounded(col + 1 == n),
            neighbour(row == 0, index.wrapping_sub(n), Port::DOWN),
            neighbour(col == 0, index.wrapping_sub(1), Port::RIGHT),
            bounded(row + 1 == n),
        ])
    }

    /// Tile kinds that may be placed at `index`.
    pub fn candidates(&self, index: usize) -> &[TileKind] {
        self.memo.candidates.candidates(self.constraint_code(index))
    }

    /// The current grid as a mosaic.
    pub fn mosaic(&self) -> Option<Mosaic> {
        Mosaic::from_tiles(self.size(), self.state.tiles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(digit: char) -> TileKind {
        TileKind::from_digit(digit).unwrap()
    }

    #[test]
    fn test_search_context_new() {
        let ctx = SearchContext::new(3);
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.tile_count(), 9);
        assert_eq!(ctx.mosaic().unwrap().to_string(), "000000000");
    }

    #[test]
    fn test_set_tile_and_rewind() {
        let mut ctx = SearchContext::new(2);
        let checkpoint = ctx.trail.len();
        ctx.set_tile(0, kind('2'));
        ctx.set_tile(1, kind('1'));
        assert_eq!(ctx.mosaic().unwrap().to_string(), "2100");
        ctx.rewind_to(checkpoint);
        assert_eq!(ctx.mosaic().unwrap().to_string(), "0000");
    }

    #[test]
    fn test_memo_is_shared_by_clone() {
        let memo = MemoizedData::new();
        let ctx1 = SearchContext::with_memo(memo.clone(), 2);
        let ctx2 = SearchContext::with_memo(memo, 4);
        assert_eq!(ctx1.tile_count(), 4);
        assert_eq!(ctx2.tile_count(), 16);
    }

    #[test]
    fn test_candidates_follow_neighbours() {
        let mut ctx = SearchContext::new(2);
        let digits =
            |ctx: &SearchContext, i| ctx.candidates(i).iter().map(|k| k.to_char()).collect::<String>();
        assert_eq!(digits(&ctx, 0), "02");

        ctx.set_tile(0, kind('2'));
        // Strand arrives from the left; last column so nothing to the right.
        assert_eq!(digits(&ctx, 1), "1");
        ctx.set_tile(1, kind('1'));
        // Strand arrives from above; last row so nothing below.
        assert_eq!(digits(&ctx, 2), "3");
        ctx.set_tile(2, kind('3'));
        // Strands from above and from the left, in the corner.
        assert_eq!(digits(&ctx, 3), "4");
    }

    #[test]
    fn test_single_tile_grid() {
        let ctx = SearchContext::new(1);
        assert_eq!(ctx.candidates(0).len(), 1);
        assert!(ctx.candidates(0)[0].is_empty());
    }
}
