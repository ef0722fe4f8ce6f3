// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalogue of knot mosaics keyed by their invariants.
//!
//! The first mosaic to achieve each (identity, tb, rotation) triple is kept;
//! later mosaics with the same triple are dropped. Entries stay in insertion
//! order and are never removed, so the catalogue after k diagrams is always
//! a prefix of the catalogue after k + 1.
//!
//! # Example
//!
//! ```
//! use legendrian_mosaics::catalog::Catalog;
//! use legendrian_mosaics::invariants::InvariantRecord;
//! use legendrian_mosaics::oracle::KnotIdentity;
//!
//! let record = InvariantRecord {
//!     identity: KnotIdentity::named("0_1"),
//!     thurston_bennequin: -1,
//!     rotation: 0,
//! };
//! let mut catalog = Catalog::new();
//! let entry = catalog.insert(record.clone(), "2134".to_string()).unwrap();
//! assert_eq!(entry.to_string(), "0_1 |  -1 |   0 | 2134");
//! assert!(catalog.insert(record, "021034000".to_string()).is_none());
//! assert_eq!(catalog.len(), 1);
//! ```

use crate::invariants::InvariantRecord;
use std::collections::HashMap;
use std::fmt;

/// A catalogued mosaic and its invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub record: InvariantRecord,
    /// The mosaic line exactly as it was read.
    pub mosaic: String,
}

impl fmt::Display for CatalogEntry {
    /// Format as the output line "identity | tb | rot | mosaic".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.record, self.mosaic)
    }
}

/// Insertion-ordered, append-only set of invariant records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    index: HashMap<InvariantRecord, usize>,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `mosaic` under `record` unless the record is already present.
    ///
    /// Returns the new entry, or None for a repeat.
    pub fn insert(&mut self, record: InvariantRecord, mosaic: String) -> Option<&CatalogEntry> {
        if self.index.contains_key(&record) {
            return None;
        }
        self.index.insert(record.clone(), self.entries.len());
        self.entries.push(CatalogEntry { record, mosaic });
        self.entries.last()
    }

    pub fn contains(&self, record: &InvariantRecord) -> bool {
        self.index.contains_key(record)
    }

    /// The first mosaic catalogued under `record`.
    pub fn get(&self, record: &InvariantRecord) -> Option<&CatalogEntry> {
        self.index.get(record).map(|&i| &self.entries[i])
    }

    /// Entries in the order they were first seen.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
