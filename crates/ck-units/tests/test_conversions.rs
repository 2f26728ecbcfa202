//! Round-trip and identity properties of the unit converters.

use ck_core::Error;
use ck_math::comparison::{close_relative, ROUND_TRIP_TOLERANCE};
use ck_units::temperature::{celsius_to_fahrenheit, celsius_to_kelvin, fahrenheit_to_celsius};
use ck_units::{convert, convert_temperature, QuantityKind, UnitRegistry};
use proptest::prelude::*;

fn all_unit_pairs() -> Vec<(QuantityKind, &'static str, &'static str)> {
    let registry = UnitRegistry::standard();
    let mut pairs = Vec::new();
    for kind in QuantityKind::ALL {
        for a in registry.units(kind) {
            for b in registry.units(kind) {
                pairs.push((kind, a.name, b.name));
            }
        }
    }
    pairs
}

// ─── Concrete cases ───────────────────────────────────────────────────────────

#[test]
fn meter_feet_round_trip() {
    let feet = convert(QuantityKind::Length, 1.0, "meter", "feet").unwrap();
    assert!((feet - 3.28084).abs() < 1e-5, "got {feet}");
    let back = convert(QuantityKind::Length, feet, "feet", "meter").unwrap();
    assert!(close_relative(back, 1.0, ROUND_TRIP_TOLERANCE), "got {back}");
}

#[test]
fn every_pair_round_trips_for_sample_values() {
    for (kind, a, b) in all_unit_pairs() {
        for v in [0.0, 1e-3, 1.0, 42.5, 12_345.678] {
            let there = convert(kind, v, a, b).unwrap();
            let back = convert(kind, there, b, a).unwrap();
            assert!(
                close_relative(back, v, ROUND_TRIP_TOLERANCE),
                "{kind}: {v} {a} -> {b} -> {a} gave {back}"
            );
        }
    }
}

#[test]
fn identity_is_exact_for_every_unit() {
    let registry = UnitRegistry::standard();
    for kind in QuantityKind::ALL {
        for unit in registry.units(kind) {
            for v in [0.1 + 0.2, 1.0 / 3.0, 7.0e12] {
                assert_eq!(convert(kind, v, unit.name, unit.name), Ok(v));
            }
        }
    }
}

#[test]
fn temperature_fixed_points() {
    assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    assert_eq!(celsius_to_kelvin(0.0), 273.15);
    assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
    assert_eq!(convert_temperature(100.0, "celsius", "fahrenheit"), Ok(212.0));
}

#[test]
fn invalid_input_rejection() {
    assert!(matches!(
        convert(QuantityKind::Length, f64::NAN, "meter", "feet"),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        convert(QuantityKind::Length, 1.0, "parsec", "meter"),
        Err(Error::UnknownUnit { .. })
    ));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn linear_round_trip(
        idx in 0usize..1000,
        v in 0.0f64..1.0e9,
    ) {
        let pairs = all_unit_pairs();
        let (kind, a, b) = pairs[idx % pairs.len()];
        let there = convert(kind, v, a, b).unwrap();
        let back = convert(kind, there, b, a).unwrap();
        prop_assert!(close_relative(back, v, ROUND_TRIP_TOLERANCE));
    }

    #[test]
    fn temperature_round_trip(c in -273.0f64..10_000.0) {
        for from in ["celsius", "fahrenheit", "kelvin"] {
            for to in ["celsius", "fahrenheit", "kelvin"] {
                let start = convert_temperature(c, "celsius", from).unwrap();
                let there = convert_temperature(start, from, to).unwrap();
                let back = convert_temperature(there, to, from).unwrap();
                prop_assert!((back - start).abs() <= 1e-9 * start.abs().max(1.0));
            }
        }
    }
}
