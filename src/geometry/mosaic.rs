// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mosaic (grid) model.
//!
//! A mosaic is an n x n grid of tiles written as a string of n² digits, read
//! left to right and top to bottom. For example `210391034` is
//!
//! ```text
//! 2 1 0
//! 3 9 1
//! 0 3 4
//! ```
//!
//! Tiles are addressed by their flattened index `row * n + col`.
//!
//! # Examples
//!
//! ```
//! use legendrian_mosaics::geometry::{Mosaic, Port};
//!
//! let mosaic: Mosaic = "2134".parse().unwrap();
//! assert_eq!(mosaic.size(), 2);
//! assert_eq!(mosaic.first_non_empty(), Some(0));
//! // Leaving tile 0 through its bottom port enters tile 2 through its top.
//! assert_eq!(mosaic.neighbor(0, Port::UP), Some(2));
//! ```

use crate::geometry::constants::NEIGHBOR_OFFSETS;
use crate::geometry::{Port, TileKind};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a line could not be read as a mosaic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty mosaic line")]
    Empty,

    #[error("mosaic length {length} is not a perfect square")]
    NotPerfectSquare { length: usize },

    #[error("mosaic length {found} does not match expected {expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("invalid tile {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// An immutable, parsed mosaic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mosaic {
    size: usize,
    tiles: Vec<TileKind>,
}

impl Mosaic {
    /// Parse a mosaic whose edge length is implied by the line length.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let length = line.chars().count();
        if length == 0 {
            return Err(ParseError::Empty);
        }
        let size = exact_sqrt(length).ok_or(ParseError::NotPerfectSquare { length })?;
        Self::parse_digits(line, size)
    }

    /// Parse a mosaic that must have edge length `size`.
    pub fn parse_with_size(line: &str, size: usize) -> Result<Self, ParseError> {
        let length = line.chars().count();
        if length == 0 {
            return Err(ParseError::Empty);
        }
        if length != size * size {
            return Err(ParseError::SizeMismatch {
                expected: size * size,
                found: length,
            });
        }
        Self::parse_digits(line, size)
    }

    fn parse_digits(line: &str, size: usize) -> Result<Self, ParseError> {
        let tiles = line
            .chars()
            .enumerate()
            .map(|(position, found)| {
                TileKind::from_digit(found).ok_or(ParseError::InvalidDigit { position, found })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { size, tiles })
    }

    /// Build a mosaic directly from tiles. Returns None unless there are size² of them.
    pub fn from_tiles(size: usize, tiles: Vec<TileKind>) -> Option<Self> {
        (tiles.len() == size * size).then_some(Self { size, tiles })
    }

    /// Edge length n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of tiles (n²).
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile type at a flattened index.
    pub fn tile(&self, index: usize) -> TileKind {
        self.tiles[index]
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    /// True if every tile is type 0.
    pub fn is_blank(&self) -> bool {
        self.tiles.iter().all(|t| t.is_empty())
    }

    /// Lowest index holding a non-empty tile.
    pub fn first_non_empty(&self) -> Option<usize> {
        self.tiles.iter().position(|t| !t.is_empty())
    }

    /// Index of the tile entered through `entry` when leaving `index`.
    ///
    /// Returns None when the move would leave the grid.
    pub fn neighbor(&self, index: usize, entry: Port) -> Option<usize> {
        let (dr, dc) = NEIGHBOR_OFFSETS[entry.as_usize()];
        let row = (index / self.size).checked_add_signed(dr)?;
        let col = (index % self.size).checked_add_signed(dc)?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl FromStr for Mosaic {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Mosaic {
    /// Format as the digit string the mosaic was read from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile.to_char())?;
        }
        Ok(())
    }
}

/// Integer square root, if `n` is a perfect square.
fn exact_sqrt(n: usize) -> Option<usize> {
    let root = (n as f64).sqrt().round() as usize;
    (root * root == n).then_some(root)
}
