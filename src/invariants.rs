// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Classical invariants of a Legendrian knot mosaic.
//!
//! From a completed traversal with writhe w, U up cusps and D down cusps:
//!
//! - Thurston-Bennequin number: `tb = w - (U + D) / 2`
//! - rotation number: `rot = |U - D| / 2`
//!
//! For a closed front both U + D and U - D are even, so the divisions are exact.
//!
//! The knot identity is the trivial knot when the Gauss code has fewer than
//! three entries (at most one crossing); otherwise it is whatever the oracle
//! says.

use crate::oracle::{KnotIdentity, Oracle};
use crate::traversal::Traversal;
use std::fmt;

/// The (identity, tb, rotation) triple a knot mosaic is catalogued under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantRecord {
    pub identity: KnotIdentity,
    pub thurston_bennequin: i64,
    pub rotation: i64,
}

impl InvariantRecord {
    /// Compute the invariants of `traversal`, consulting `oracle` only for
    /// codes with three or more entries.
    pub fn classify<O: Oracle + ?Sized>(
        traversal: &Traversal,
        oracle: &O,
        trivial_name: &str,
    ) -> Self {
        let identity = if traversal.gauss_code.len() < 3 {
            KnotIdentity::named(trivial_name)
        } else {
            oracle.lookup(&traversal.gauss_code, &traversal.signs)
        };
        Self {
            identity,
            thurston_bennequin: thurston_bennequin(traversal),
            rotation: rotation(traversal),
        }
    }
}

impl fmt::Display for InvariantRecord {
    /// Format as "identity | tb | rot" with the numbers right-justified in width 3.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:>3} | {:>3}",
            self.identity, self.thurston_bennequin, self.rotation
        )
    }
}

pub fn thurston_bennequin(traversal: &Traversal) -> i64 {
    traversal.writhe - i64::from(traversal.cusps.total()) / 2
}

pub fn rotation(traversal: &Traversal) -> i64 {
    (i64::from(traversal.cusps.up) - i64::from(traversal.cusps.down)).abs() / 2
}
