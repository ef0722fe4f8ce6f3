// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Port type for tile boundary positions.
//!
//! Every tile has four ports, one at the midpoint of each side:
//!
//! ```text
//!      1
//!  2 ▇▇▇▇ 0
//!      3
//! ```
//!
//! A strand enters a tile through one port and leaves through another.
//! Leaving through port `p` means entering the neighbouring tile through
//! the opposite port `(p + 2) mod 4`.

use crate::geometry::constants::NPORTS;
use std::fmt;

/// A port (side of a tile) in the range 0..NPORTS.
///
/// Newtype wrapper so ports cannot be confused with tile indices or tile types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port(u8);

impl Port {
    /// Right side of the tile.
    pub const RIGHT: Port = Port(0);
    /// Top side of the tile.
    pub const UP: Port = Port(1);
    /// Left side of the tile.
    pub const LEFT: Port = Port(2);
    /// Bottom side of the tile.
    pub const DOWN: Port = Port(3);

    /// All ports in index order.
    pub const ALL: [Port; NPORTS] = [Port::RIGHT, Port::UP, Port::LEFT, Port::DOWN];

    /// Try to create a port, returning None if out of range.
    pub const fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NPORTS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the port as a usize (for array indexing).
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The port on the far side of the shared edge: `(p + 2) mod 4`.
    pub const fn opposite(self) -> Self {
        Self((self.0 + 2) % NPORTS as u8)
    }

    /// Odd ports (up, down) are on the vertical axis.
    pub const fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
