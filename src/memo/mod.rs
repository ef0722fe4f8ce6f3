// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! The generator fills a mosaic tile by tile in row-major order. When a tile is
//! chosen, its up and left neighbours are already fixed, so each of its four
//! ports is in one of three states:
//!
//! | state | meaning                                   |
//! |-------|-------------------------------------------|
//! | 0     | must not connect (edge, or neighbour closed) |
//! | 1     | must connect (neighbour has a strand end) |
//! | 2     | free (neighbour not yet chosen)           |
//!
//! The four states are packed into a base-3 code
//! `right + 3·up + 9·left + 27·down`, and the table lists, for every code, the
//! tile kinds consistent with it in ascending order.

use crate::geometry::{Port, TileKind, NPORTS};

/// Number of distinct port-state codes.
pub const NCODES: usize = 81;

/// Requirement on one port of a tile being chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PortState {
    Closed = 0,
    Open = 1,
    Free = 2,
}

impl PortState {
    fn admits(self, connected: bool) -> bool {
        match self {
            PortState::Closed => !connected,
            PortState::Open => connected,
            PortState::Free => true,
        }
    }

    fn from_digit(digit: usize) -> Self {
        match digit {
            0 => PortState::Closed,
            1 => PortState::Open,
            _ => PortState::Free,
        }
    }
}

/// Pack per-port requirements, indexed by port, into a table code.
pub fn port_code(states: [PortState; NPORTS]) -> usize {
    states
        .iter()
        .rev()
        .fold(0, |code, &state| code * 3 + state as usize)
}

/// Tile kinds admissible under each port-state code.
#[derive(Debug, Clone)]
pub struct CandidateTable {
    candidates: Vec<Vec<TileKind>>,
}

impl CandidateTable {
    pub fn initialize() -> Self {
        let candidates = (0..NCODES)
            .map(|code| {
                let mut rest = code;
                let states: Vec<PortState> = (0..NPORTS)
                    .map(|_| {
                        let state = PortState::from_digit(rest % 3);
                        rest /= 3;
                        state
                    })
                    .collect();
                TileKind::all()
                    .filter(|kind| {
                        Port::ALL
                            .iter()
                            .zip(&states)
                            .all(|(&port, state)| state.admits(kind.has_port(port)))
                    })
                    .collect()
            })
            .collect();
        Self { candidates }
    }

    /// Admissible kinds for `code`, ascending.
    pub fn candidates(&self, code: usize) -> &[TileKind] {
        self.candidates.get(code).map_or(&[], Vec::as_slice)
    }
}

impl Default for CandidateTable {
    fn default() -> Self {
        Self::initialize()
    }
}
