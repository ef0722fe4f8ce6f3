// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid model for Legendrian mosaics.
//!
//! This module contains the immutable description of a diagram:
//! - Port: one of the four sides of a tile (0..3)
//! - TileKind: tile type digit (0..9) and its legal connections
//! - Connection: a directed passage through a tile
//! - Mosaic: a parsed n x n grid of tiles

pub mod constants;
pub mod mosaic;
pub mod port;
pub mod tile;

// Re-export for convenience
pub use constants::*;
pub use mosaic::{Mosaic, ParseError};
pub use port::Port;
pub use tile::{Connection, TileKind};
