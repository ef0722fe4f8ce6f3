// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cataloguing Legendrian knot mosaics by their classical invariants.
//!
//! A Legendrian mosaic is an n×n grid of tiles, each tile one of ten types
//! (digits 0-9) carrying zero, one or two strand pieces. A mosaic whose
//! strands form a single closed curve is a front projection of a Legendrian
//! knot. This crate walks each mosaic, builds its extended Gauss code and
//! crossing signs, computes the Thurston-Bennequin and rotation numbers, and
//! keeps one representative mosaic per (knot type, tb, rot).
//!
//! # Architecture
//!
//! ## Cataloguing
//!
//! - `geometry`: ports, tile types and their connection table, parsed mosaics
//! - `traversal`: the strand walk, crossing bookkeeping and failure kinds
//! - `state`: per-diagram walk state and run-wide statistics
//! - `oracle`: knot identity lookup for codes with two or more crossings
//! - `invariants`: tb, rot and the catalogue key
//! - `catalog`: first-seen deduplication
//! - `batch`: the line-oriented driver, one mosaic per line in, one
//!   catalogue entry per line out
//!
//! ## Enumeration
//!
//! The generator produces every suitably connected mosaic of a given size,
//! as input for the cataloguer. It uses a two-tier memory model:
//!
//! - Tier 1 (MEMO): the tile candidate table indexed by neighbour constraints
//! - Tier 2 (DYNAMIC): the partial mosaic, changed only through the trail
//!
//! and runs as a predicate program on the backtracking `engine`.
//!
//! # Example
//!
//! ```
//! use legendrian_mosaics::batch::BatchDriver;
//! use legendrian_mosaics::config::Config;
//! use legendrian_mosaics::predicates::generate;
//!
//! let mut mosaics = Vec::new();
//! generate(3, &mut mosaics).unwrap();
//!
//! let config = Config::default();
//! let mut driver = BatchDriver::new(&config, config.oracle());
//! let mut catalog = Vec::new();
//! let summary = driver.run(mosaics.as_slice(), &mut catalog).unwrap();
//! assert_eq!(summary.knots, 17);
//! assert_eq!(summary.cataloged, 3);
//! ```

pub mod batch;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod geometry;
pub mod invariants;
pub mod memo;
pub mod oracle;
pub mod predicates;
pub mod state;
pub mod trail;
pub mod traversal;

// Re-export commonly used types
pub use batch::{BatchDriver, BatchError, BatchSummary};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use geometry::Mosaic;
pub use trail::Trail;
pub use traversal::{traverse, Traversal, TraversalFailure};
