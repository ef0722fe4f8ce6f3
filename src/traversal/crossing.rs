// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crossing identities, signs and the extended Gauss code.
//!
//! Each crossing tile is passed twice by a closed strand. The first pass
//! allocates a crossing number `k` (1-based, in order of discovery) and the
//! second pass resolves its sign:
//!
//! - Every pass appends `+k` to the Gauss code if it entered through an odd
//!   (vertical) port and `-k` if it entered through an even (horizontal) port.
//! - The crossing is positive when the two entry ports sum to 3 (entries
//!   {0, 3} or {1, 2}), negative otherwise.
//!
//! # Example
//!
//! ```
//! use legendrian_mosaics::geometry::Port;
//! use legendrian_mosaics::traversal::crossing::{CrossingBuilder, CrossingSign};
//!
//! let mut crossings = CrossingBuilder::new(9);
//! crossings.visit(4, Port::LEFT);
//! crossings.visit(4, Port::DOWN);
//! assert_eq!(crossings.code().entries(), &[-1, 1]);
//! assert_eq!(crossings.signs(), &[CrossingSign::Negative]);
//! assert_eq!(crossings.writhe(), -1);
//! ```

use crate::geometry::Port;
use std::fmt;

/// Sign of a crossing. `Unresolved` until the second pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrossingSign {
    Negative,
    Unresolved,
    Positive,
}

impl CrossingSign {
    /// As -1, 0 or +1.
    pub fn value(self) -> i8 {
        match self {
            CrossingSign::Negative => -1,
            CrossingSign::Unresolved => 0,
            CrossingSign::Positive => 1,
        }
    }

    /// Sign of a crossing from the entry ports of its two passes.
    pub fn from_entries(first: Port, second: Port) -> Self {
        if first.value() + second.value() == 3 {
            CrossingSign::Positive
        } else {
            CrossingSign::Negative
        }
    }
}

/// Ordered sequence of signed crossing numbers along the strand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GaussCode(Vec<i32>);

impl GaussCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a pass through crossing `id` entered through `entry`.
    fn push(&mut self, id: u32, entry: Port) {
        let id = id as i32;
        self.0.push(if entry.is_odd() { id } else { -id });
    }
}

impl From<Vec<i32>> for GaussCode {
    fn from(entries: Vec<i32>) -> Self {
        Self(entries)
    }
}

impl fmt::Display for GaussCode {
    /// Format as "[c1, c2, ...]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "]")
    }
}

/// Crossing bookkeeping for one traversal.
///
/// Crossing identity is per tile; `None` means the tile has not been passed yet.
#[derive(Debug, Clone)]
pub struct CrossingBuilder {
    ids: Vec<Option<u32>>,
    first_entries: Vec<Option<Port>>,
    code: GaussCode,
    signs: Vec<CrossingSign>,
    writhe: i64,
}

impl CrossingBuilder {
    /// Bookkeeping for a mosaic with `tiles` tiles.
    pub fn new(tiles: usize) -> Self {
        Self {
            ids: vec![None; tiles],
            first_entries: vec![None; tiles],
            code: GaussCode::new(),
            signs: Vec::new(),
            writhe: 0,
        }
    }

    /// Record a pass through the crossing at `tile`, entered through `entry`.
    ///
    /// Returns the crossing number.
    pub fn visit(&mut self, tile: usize, entry: Port) -> u32 {
        match (self.ids[tile], self.first_entries[tile]) {
            (Some(id), Some(first)) => {
                self.code.push(id, entry);
                let sign = CrossingSign::from_entries(first, entry);
                self.writhe += i64::from(sign.value());
                self.signs[id as usize - 1] = sign;
                id
            }
            _ => {
                self.signs.push(CrossingSign::Unresolved);
                let id = self.signs.len() as u32;
                self.ids[tile] = Some(id);
                self.first_entries[tile] = Some(entry);
                self.code.push(id, entry);
                id
            }
        }
    }

    /// Crossing number assigned to `tile`, if it has been passed.
    pub fn id_of(&self, tile: usize) -> Option<u32> {
        self.ids[tile]
    }

    pub fn code(&self) -> &GaussCode {
        &self.code
    }

    /// Signs indexed by crossing number - 1.
    pub fn signs(&self) -> &[CrossingSign] {
        &self.signs
    }

    /// Number of crossings discovered so far.
    pub fn count(&self) -> usize {
        self.signs.len()
    }

    /// Sum of resolved crossing signs.
    pub fn writhe(&self) -> i64 {
        self.writhe
    }

    /// Give up the code and sign table.
    pub fn into_parts(self) -> (GaussCode, Vec<CrossingSign>, i64) {
        (self.code, self.signs, self.writhe)
    }
}
