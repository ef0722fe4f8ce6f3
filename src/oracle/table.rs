// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Naming opaque invariant values from a lookup table.

use crate::oracle::{GaussDiagramOracle, KnotIdentity, Oracle};
use crate::traversal::{CrossingSign, GaussCode};
use std::collections::BTreeMap;

/// Wraps an oracle and names its opaque values that appear in a table.
///
/// Values missing from the table pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct TableOracle<O = GaussDiagramOracle> {
    inner: O,
    names: BTreeMap<String, String>,
}

impl<O: Oracle> TableOracle<O> {
    pub fn new(inner: O, names: BTreeMap<String, String>) -> Self {
        Self { inner, names }
    }

    /// Number of named values.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<O: Oracle> Oracle for TableOracle<O> {
    fn lookup(&self, code: &GaussCode, signs: &[CrossingSign]) -> KnotIdentity {
        match self.inner.lookup(code, signs) {
            KnotIdentity::Opaque(value) => match self.names.get(&value) {
                Some(name) => KnotIdentity::Named(name.clone()),
                None => KnotIdentity::Opaque(value),
            },
            named => named,
        }
    }
}
