// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tile types and the connections they allow.
//!
//! A tile is one cell of a mosaic. Its type is a digit 0..9 which selects a
//! fixed set of (entry, exit) port pairs from
//! [`TILE_CONNECTIONS`](crate::geometry::constants::TILE_CONNECTIONS).

use crate::geometry::constants::{
    CROSSING_TILE, DOWN_CUSPS, FIRST_DOUBLE_TILE, NTILE_TYPES, TILE_CONNECTIONS, UP_CUSPS,
};
use crate::geometry::Port;
use std::fmt;

/// A directed passage through a tile: in through `entry`, out through `exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Port the strand enters by.
    pub entry: Port,
    /// Port the strand leaves by.
    pub exit: Port,
}

impl Connection {
    /// Create a connection.
    pub const fn new(entry: Port, exit: Port) -> Self {
        Self { entry, exit }
    }

    /// The same strand traversed the other way.
    pub const fn reversed(self) -> Self {
        Self {
            entry: self.exit,
            exit: self.entry,
        }
    }

    /// True if both connections use the same physical strand, in either direction.
    pub fn same_strand(self, other: Connection) -> bool {
        self == other || self == other.reversed()
    }

    /// True if this connection is a down cusp of the front.
    pub fn is_down_cusp(self) -> bool {
        DOWN_CUSPS.contains(&self)
    }

    /// True if this connection is an up cusp of the front.
    pub fn is_up_cusp(self) -> bool {
        UP_CUSPS.contains(&self)
    }
}

impl fmt::Display for Connection {
    /// Format as "(entry,exit)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.entry, self.exit)
    }
}

/// A tile type in the range 0..NTILE_TYPES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TileKind(u8);

impl TileKind {
    /// The empty tile.
    pub const EMPTY: TileKind = TileKind(0);

    /// The crossing tile.
    pub const CROSSING: TileKind = TileKind(CROSSING_TILE);

    /// Try to create a tile type, returning None if out of range.
    pub const fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NTILE_TYPES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse a single decimal digit.
    pub fn from_digit(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    /// All tile types in ascending order.
    pub fn all() -> impl Iterator<Item = TileKind> {
        (0..NTILE_TYPES as u8).map(TileKind)
    }

    /// Get the underlying value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The digit used for this tile in mosaic strings.
    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_crossing(self) -> bool {
        self.0 == CROSSING_TILE
    }

    /// Number of strands through the tile (0, 1 or 2).
    pub const fn strand_count(self) -> usize {
        match self.0 {
            0 => 0,
            v if v < FIRST_DOUBLE_TILE => 1,
            _ => 2,
        }
    }

    /// All legal connections for this tile type.
    pub fn connections(self) -> &'static [Connection] {
        TILE_CONNECTIONS[self.0 as usize]
    }

    /// The unique connection entering through `entry`, if any.
    pub fn connection_from(self, entry: Port) -> Option<Connection> {
        self.connections().iter().copied().find(|c| c.entry == entry)
    }

    /// True if some strand of this tile uses `port`.
    pub fn has_port(self, port: Port) -> bool {
        self.connections().iter().any(|c| c.entry == port)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digit() {
        assert_eq!(TileKind::from_digit('0'), Some(TileKind::EMPTY));
        assert_eq!(TileKind::from_digit('9'), Some(TileKind::CROSSING));
        assert_eq!(TileKind::from_digit('a'), None);
        assert_eq!(TileKind::from_digit('-'), None);
    }

    #[test]
    fn test_strand_counts() {
        let counts: Vec<usize> = TileKind::all().map(|t| t.strand_count()).collect();
        assert_eq!(counts, vec![0, 1, 1, 1, 1, 1, 1, 2, 2, 2]);
        for kind in TileKind::all() {
            assert_eq!(kind.connections().len(), 2 * kind.strand_count());
        }
    }

    #[test]
    fn test_connection_from() {
        let corner = TileKind::try_new(2).unwrap();
        assert_eq!(
            corner.connection_from(Port::RIGHT),
            Some(Connection::new(Port::RIGHT, Port::DOWN))
        );
        assert_eq!(corner.connection_from(Port::UP), None);
        assert_eq!(TileKind::EMPTY.connection_from(Port::LEFT), None);
    }

    #[test]
    fn test_exhaustive_entry_lookup() {
        // Every tile type x entry port either has no connection or exactly one,
        // and a hit always enters where it says it does.
        for kind in TileKind::all() {
            for port in Port::ALL {
                match kind.connection_from(port) {
                    Some(c) => {
                        assert_eq!(c.entry, port);
                        assert!(kind.has_port(c.exit));
                        assert_ne!(c.entry, c.exit);
                    }
                    None => assert!(!kind.has_port(port)),
                }
            }
        }
    }

    #[test]
    fn test_crossing_goes_straight() {
        for port in Port::ALL {
            let c = TileKind::CROSSING.connection_from(port).unwrap();
            assert_eq!(c.exit, port.opposite());
        }
    }

    #[test]
    fn test_cusps() {
        assert!(Connection::new(Port::RIGHT, Port::DOWN).is_down_cusp());
        assert!(Connection::new(Port::UP, Port::LEFT).is_down_cusp());
        assert!(Connection::new(Port::DOWN, Port::RIGHT).is_up_cusp());
        assert!(Connection::new(Port::LEFT, Port::UP).is_up_cusp());
        assert!(!Connection::new(Port::LEFT, Port::DOWN).is_down_cusp());
        assert!(!Connection::new(Port::LEFT, Port::DOWN).is_up_cusp());
    }

    #[test]
    fn test_same_strand() {
        let c = Connection::new(Port::LEFT, Port::RIGHT);
        assert!(c.same_strand(c));
        assert!(c.same_strand(c.reversed()));
        assert!(!c.same_strand(Connection::new(Port::UP, Port::DOWN)));
    }

    #[test]
    fn test_to_char() {
        let chars: String = TileKind::all().map(|t| t.to_char()).collect();
        assert_eq!(chars, "0123456789");
    }
}
