// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knot identification from an extended Gauss code.
//!
//! The catalogue only needs two things from an oracle: a canonical knot name
//! when it recognises the knot, or some opaque invariant value when it does
//! not, so that diagrams with the same unrecognised value still deduplicate.
//!
//! Two oracles are provided:
//! - [`GaussDiagramOracle`]: opaque value = canonical form of the signed Gauss
//!   diagram (independent of where the walk started and of crossing numbering).
//! - [`TableOracle`]: names the opaque values of an inner oracle from a table.
//!
//! Any `Fn(&GaussCode, &[CrossingSign]) -> KnotIdentity` is also an oracle.

pub mod canonical;
pub mod table;

pub use canonical::GaussDiagramOracle;
pub use table::TableOracle;

use crate::traversal::{CrossingSign, GaussCode};
use std::fmt;

/// Name given to the unknot.
pub const TRIVIAL_KNOT: &str = "0_1";

/// What an oracle knows about a knot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KnotIdentity {
    /// A canonical knot name such as `3_1` or `m(3_1)`.
    Named(String),
    /// An unrecognised invariant value.
    Opaque(String),
}

impl KnotIdentity {
    pub fn named(name: impl Into<String>) -> Self {
        KnotIdentity::Named(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            KnotIdentity::Named(s) | KnotIdentity::Opaque(s) => s,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, KnotIdentity::Named(_))
    }
}

impl fmt::Display for KnotIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a Gauss code and its crossing signs to a knot identity.
///
/// `signs[k - 1]` is the sign of crossing `k`. Implementations must accept an
/// empty code.
pub trait Oracle {
    fn lookup(&self, code: &GaussCode, signs: &[CrossingSign]) -> KnotIdentity;
}

impl<F> Oracle for F
where
    F: Fn(&GaussCode, &[CrossingSign]) -> KnotIdentity,
{
    fn lookup(&self, code: &GaussCode, signs: &[CrossingSign]) -> KnotIdentity {
        self(code, signs)
    }
}
