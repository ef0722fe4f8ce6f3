// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use legendrian_mosaics::batch::{BatchDriver, BatchSummary};
use legendrian_mosaics::config::Config;
use legendrian_mosaics::predicates::generate;

/// Every suitably connected mosaic of the given size, one per line.
pub fn enumeration(size: usize) -> String {
    let mut out = Vec::new();
    generate(size, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Catalogue `input` with the default configuration.
pub fn catalog(input: &str) -> (BatchSummary, String) {
    catalog_with(&Config::default(), input)
}

pub fn catalog_with(config: &Config, input: &str) -> (BatchSummary, String) {
    let mut driver = BatchDriver::new(config, config.oracle());
    let mut out = Vec::new();
    let summary = driver.run(input.as_bytes(), &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

/// Input text with an empty `size`×`size` header followed by `lines`.
pub fn with_header(size: usize, lines: &[&str]) -> String {
    let mut input = "0".repeat(size * size);
    input.push('\n');
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    input
}
