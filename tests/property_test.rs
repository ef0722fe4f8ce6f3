// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over arbitrary and generated mosaics.

mod common;

use legendrian_mosaics::catalog::Catalog;
use legendrian_mosaics::config::Config;
use legendrian_mosaics::geometry::Mosaic;
use legendrian_mosaics::invariants::InvariantRecord;
use legendrian_mosaics::oracle::{canonical::canonical_form, GaussDiagramOracle, TRIVIAL_KNOT};
use legendrian_mosaics::predicates::MosaicGenerator;
use legendrian_mosaics::traversal::{traverse, CrossingSign, DEFAULT_STEP_LIMIT_FACTOR};
use proptest::prelude::*;
use std::collections::HashMap;

fn mosaic_text(max_size: usize) -> impl Strategy<Value = String> {
    (1..=max_size).prop_flat_map(|n| proptest::collection::vec(0u8..10, n * n))
        .prop_map(|digits| digits.iter().map(|d| char::from(b'0' + d)).collect())
}

proptest! {
    #[test]
    fn arbitrary_lines_never_panic(line in "\\PC{0,40}") {
        let config = Config::default();
        let input = format!("0000\n{}\n", line);
        let _ = common::catalog_with(&config, &input);
    }

    #[test]
    fn random_grids_traverse_without_panicking(text in mosaic_text(5)) {
        let mosaic = Mosaic::parse(&text).unwrap();
        if let Ok(knot) = traverse(&mosaic, DEFAULT_STEP_LIMIT_FACTOR) {
            // A closed front has an even number of cusps in each direction.
            prop_assert_eq!(knot.cusps.total() % 2, 0);
            prop_assert_eq!((knot.cusps.up as i64 - knot.cusps.down as i64) % 2, 0);
            prop_assert!(knot.steps <= DEFAULT_STEP_LIMIT_FACTOR * mosaic.len());
        }
    }

    #[test]
    fn canonical_form_ignores_starting_point(
        text in mosaic_text(4),
        shift in 0usize..64,
    ) {
        let mosaic = Mosaic::parse(&text).unwrap();
        if let Ok(knot) = traverse(&mosaic, DEFAULT_STEP_LIMIT_FACTOR) {
            let code = knot.gauss_code.entries();
            if !code.is_empty() {
                let mut rotated = code.to_vec();
                rotated.rotate_left(shift % code.len());
                // Rotating the code keeps crossing numbers, so signs are unchanged.
                prop_assert_eq!(
                    canonical_form(code, &knot.signs),
                    canonical_form(&rotated, &knot.signs)
                );
            }
        }
    }
}

#[test]
fn every_knot_crossing_is_passed_twice_with_opposite_signs() {
    for n in 1..=4 {
        for mosaic in MosaicGenerator::new(n) {
            let Ok(knot) = traverse(&mosaic, DEFAULT_STEP_LIMIT_FACTOR) else {
                continue;
            };
            let mut seen: HashMap<i32, Vec<i32>> = HashMap::new();
            for &entry in knot.gauss_code.entries() {
                seen.entry(entry.abs()).or_default().push(entry);
            }
            assert_eq!(seen.len(), knot.signs.len(), "{}", mosaic);
            for (id, entries) in &seen {
                assert_eq!(entries.len(), 2, "crossing {} of {}", id, mosaic);
                assert_eq!(entries[0], -entries[1], "crossing {} of {}", id, mosaic);
            }
            assert!(knot.signs.iter().all(|&s| s != CrossingSign::Unresolved));
            let writhe: i64 = knot.signs.iter().map(|s| i64::from(s.value())).sum();
            assert_eq!(writhe, knot.writhe);
        }
    }
}

#[test]
fn catalogue_grows_monotonically() {
    let mut catalog = Catalog::new();
    let mut previous: Vec<String> = Vec::new();
    for mosaic in MosaicGenerator::new(4).skip(1) {
        let Ok(knot) = traverse(&mosaic, DEFAULT_STEP_LIMIT_FACTOR) else {
            continue;
        };
        let record = InvariantRecord::classify(&knot, &GaussDiagramOracle, TRIVIAL_KNOT);
        catalog.insert(record, mosaic.to_string());
        let current: Vec<String> = catalog.entries().iter().map(|e| e.to_string()).collect();
        assert!(current.starts_with(&previous));
        assert!(current.len() <= previous.len() + 1);
        previous = current;
    }
    assert_eq!(previous.len(), 32);
}
