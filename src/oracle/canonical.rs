// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical form of a signed Gauss diagram.
//!
//! The same closed curve gives different Gauss codes depending on where the
//! walk starts, which also changes the crossing numbering. The canonical form
//! tries every rotation of the code, renumbers crossings 1..k in order of first
//! appearance (carrying their signs along), and keeps the least
//! (code, signs) pair in lexicographic order.
//!
//! # Example
//!
//! ```
//! use legendrian_mosaics::oracle::{GaussDiagramOracle, KnotIdentity, Oracle};
//! use legendrian_mosaics::traversal::{CrossingSign, GaussCode};
//!
//! let oracle = GaussDiagramOracle;
//! let code = GaussCode::from(vec![2, 1, -2, -1]);
//! let signs = [CrossingSign::Positive, CrossingSign::Negative];
//! assert_eq!(
//!     oracle.lookup(&code, &signs),
//!     KnotIdentity::Opaque("[-1, -2, 1, 2]:[-1, 1]".into())
//! );
//! ```

use crate::oracle::{KnotIdentity, Oracle};
use crate::traversal::{CrossingSign, GaussCode};
use std::fmt::Write;

/// Oracle that never names a knot; its opaque value is the canonical Gauss diagram.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussDiagramOracle;

impl Oracle for GaussDiagramOracle {
    fn lookup(&self, code: &GaussCode, signs: &[CrossingSign]) -> KnotIdentity {
        let (code, signs) = canonical_form(code.entries(), signs);
        KnotIdentity::Opaque(format_diagram(&code, &signs))
    }
}

/// Least renumbered rotation of `code`, with `signs` permuted to match.
///
/// Crossings missing from `signs` are treated as unresolved.
pub fn canonical_form(code: &[i32], signs: &[CrossingSign]) -> (Vec<i32>, Vec<CrossingSign>) {
    let mut best: Option<(Vec<i32>, Vec<CrossingSign>)> = None;
    for shift in 0..code.len() {
        let candidate = renumber(code.iter().cycle().skip(shift).take(code.len()), signs);
        if best.as_ref().map_or(true, |b| candidate < *b) {
            best = Some(candidate);
        }
    }
    best.unwrap_or_default()
}

/// Renumber crossings by first appearance in `rotation`.
fn renumber<'a>(
    rotation: impl Iterator<Item = &'a i32>,
    signs: &[CrossingSign],
) -> (Vec<i32>, Vec<CrossingSign>) {
    let mut mapping: Vec<(u32, i32)> = Vec::new();
    let mut new_signs = Vec::new();
    let code = rotation
        .map(|&entry| {
            let old = entry.unsigned_abs();
            let new = match mapping.iter().find(|(o, _)| *o == old) {
                Some(&(_, n)) => n,
                None => {
                    let n = mapping.len() as i32 + 1;
                    mapping.push((old, n));
                    new_signs.push(
                        (old as usize)
                            .checked_sub(1)
                            .and_then(|i| signs.get(i))
                            .copied()
                            .unwrap_or(CrossingSign::Unresolved),
                    );
                    n
                }
            };
            new * entry.signum()
        })
        .collect();
    (code, new_signs)
}

/// Format as "[c1, c2, ...]:[s1, s2, ...]".
fn format_diagram(code: &[i32], signs: &[CrossingSign]) -> String {
    let mut out = String::from("[");
    for (i, entry) in code.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", entry);
    }
    out.push_str("]:[");
    for (i, sign) in signs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", sign.value());
    }
    out.push(']');
    out
}
