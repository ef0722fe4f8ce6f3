// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed lookup tables for Legendrian mosaic tiles.
//!
//! There are ten tile types, encoded by the digits 0..9:
//!
//! | Type | Strands | Ports used |
//! |------|---------|------------|
//! | 0 | none | - |
//! | 1 | left-down | 2, 3 |
//! | 2 | right-down | 0, 3 |
//! | 3 | right-up | 0, 1 |
//! | 4 | left-up | 2, 1 |
//! | 5 | horizontal | 2, 0 |
//! | 6 | vertical | 1, 3 |
//! | 7 | left-down + up-right | all |
//! | 8 | right-down + left-up | all |
//! | 9 | crossing | all |
//!
//! Each physical strand appears twice in [`TILE_CONNECTIONS`], once per
//! direction of travel, so a walk can pass through it either way.

use crate::geometry::{Connection, Port};

/// Number of ports on a tile boundary.
pub const NPORTS: usize = 4;

/// Number of distinct tile types (digits 0..9).
pub const NTILE_TYPES: usize = 10;

/// First tile type that carries two strands.
///
/// Types below this saturate after one traversal, types from here on after two.
pub const FIRST_DOUBLE_TILE: u8 = 7;

/// The transversal crossing tile.
pub const CROSSING_TILE: u8 = 9;

const fn conn(entry: Port, exit: Port) -> Connection {
    Connection::new(entry, exit)
}

/// Legal (entry, exit) connections for each tile type.
///
/// The order within each row matters: the traversal starts a walk with the
/// entry port of the first connection of the start tile.
pub static TILE_CONNECTIONS: [&[Connection]; NTILE_TYPES] = [
    &[],
    &[conn(Port::LEFT, Port::DOWN), conn(Port::DOWN, Port::LEFT)],
    &[conn(Port::RIGHT, Port::DOWN), conn(Port::DOWN, Port::RIGHT)],
    &[conn(Port::RIGHT, Port::UP), conn(Port::UP, Port::RIGHT)],
    &[conn(Port::LEFT, Port::UP), conn(Port::UP, Port::LEFT)],
    &[conn(Port::LEFT, Port::RIGHT), conn(Port::RIGHT, Port::LEFT)],
    &[conn(Port::UP, Port::DOWN), conn(Port::DOWN, Port::UP)],
    &[
        conn(Port::LEFT, Port::DOWN),
        conn(Port::DOWN, Port::LEFT),
        conn(Port::UP, Port::RIGHT),
        conn(Port::RIGHT, Port::UP),
    ],
    &[
        conn(Port::RIGHT, Port::DOWN),
        conn(Port::DOWN, Port::RIGHT),
        conn(Port::LEFT, Port::UP),
        conn(Port::UP, Port::LEFT),
    ],
    &[
        conn(Port::RIGHT, Port::LEFT),
        conn(Port::UP, Port::DOWN),
        conn(Port::LEFT, Port::RIGHT),
        conn(Port::DOWN, Port::UP),
    ],
];

/// Grid displacement (row, column) to the tile that is entered through each port.
///
/// Entering through the right port means the strand came from the left, so the
/// new tile is one column to the left of the old one, and so on.
pub const NEIGHBOR_OFFSETS: [(isize, isize); NPORTS] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Connections that form a down cusp of the front projection.
pub const DOWN_CUSPS: [Connection; 2] = [conn(Port::RIGHT, Port::DOWN), conn(Port::UP, Port::LEFT)];

/// Connections that form an up cusp of the front projection.
pub const UP_CUSPS: [Connection; 2] = [conn(Port::DOWN, Port::RIGHT), conn(Port::LEFT, Port::UP)];
