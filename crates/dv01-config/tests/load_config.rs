//! Loading configuration files from disk.

use std::io::Write;

use approx::assert_relative_eq;
use dv01_analytics::{dv01, Dv01Calculator, InstrumentKind};
use dv01_config::prelude::*;
use dv01_curves::prelude::*;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_round_trip_through_toml() {
    let config = AppConfig::default();
    let text = config.to_toml_string().unwrap();

    assert!(text.contains("not_a_knot"));
    assert!(text.contains("5Y IRS Fixed Leg"));
    assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
        [curve]
        boundary = "natural"
        points = [[10.0, 5.7], [0.5, 5.0], [2.0, 5.2], [5.0, 5.5]]

        [risk]
        bump_bps = 1.0

        [plot]
        samples = 50
        output = "out/curve.svg"

        [[instruments]]
        name = "3Y Quarterly Swap"
        kind = "swap_fixed_leg"
        face = 10000000
        rate = 0.0525
        maturity = 3.0
        frequency = 4
        "#,
    );

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.curve.boundary, SplineBoundary::Natural);
    assert_eq!(config.plot.samples, 50);

    let curve = config.build_curve().unwrap();
    assert_eq!(curve.tenor_bounds(), (0.5, 10.0));

    let instruments = config.instruments();
    let (name, swap) = instruments[0];
    assert_eq!(name, "3Y Quarterly Swap");
    assert_eq!(swap.kind, InstrumentKind::SwapFixedLeg);
    assert_relative_eq!(swap.face, 10_000_000.0);

    let result = config.risk.calculator().calculate(&swap, &curve).unwrap();
    assert!(result.dv01.as_f64() > 0.0);
}

#[test]
fn test_default_config_reproduces_reference_report() {
    let config = AppConfig::load_or_default(None).unwrap();
    let curve = config.build_curve().unwrap();

    let figures: Vec<String> = config
        .instruments()
        .into_iter()
        .map(|(name, inst)| format!("{name} DV01: {}", dv01(&inst, &curve).unwrap()))
        .collect();

    assert_eq!(
        figures,
        vec!["5Y Fixed Bond DV01: $441.34", "5Y IRS Fixed Leg DV01: $61.65"]
    );
    assert_eq!(config.risk.calculator(), Dv01Calculator::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_malformed_toml_is_deserialization_error() {
    let file = write_config("[curve\npoints = ");
    assert!(matches!(
        AppConfig::load(file.path()),
        Err(ConfigError::Deserialization(_))
    ));
}

#[test]
fn test_single_point_curve_rejected() {
    let file = write_config(
        r#"
        [curve]
        points = [[1.0, 5.0]]
        "#,
    );
    match AppConfig::load(file.path()) {
        Err(ConfigError::Validation { field, .. }) => assert_eq!(field, "curve.points"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_duplicate_tenors_surface_as_curve_error() {
    let config = AppConfig::from_toml_str(
        r#"
        [curve]
        points = [[1.0, 5.0], [1.0, 5.2]]
        "#,
    )
    .unwrap();
    assert!(matches!(config.build_curve(), Err(ConfigError::Curve(_))));
}
