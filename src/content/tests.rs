//! Content domain: tests for tuning files and validation.

use std::path::Path;

use super::{TuningError, load_tuning, parse_tuning};
use crate::locomotion::LocomotionTuning;

const SHIPPED_TUNING: &str = include_str!("../../assets/data/locomotion.ron");

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_tuning_matches_defaults() {
    let tuning = parse_tuning(SHIPPED_TUNING).expect("shipped tuning should parse");
    assert_eq!(tuning, LocomotionTuning::default());
}

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning = parse_tuning("(max_speed: 12.0, dash_cooldown: 0.0)").unwrap();

    assert_eq!(tuning.max_speed, 12.0);
    assert_eq!(tuning.dash_cooldown, 0.0);
    assert_eq!(tuning.jump_speed, LocomotionTuning::default().jump_speed);
    assert_eq!(tuning.air_control, LocomotionTuning::default().air_control);
}

#[test]
fn test_malformed_tuning_is_parse_error() {
    let result = parse_tuning("(max_speed: fast)");
    assert!(matches!(result, Err(TuningError::Parse { .. })));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_tuning(Path::new("does/not/exist/locomotion.ron"));
    match result {
        Err(TuningError::Io { path, .. }) => assert!(path.ends_with("locomotion.ron")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_shipped_file_loads_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::DEFAULT_TUNING_PATH);
    let tuning = load_tuning(&path).unwrap();
    assert_eq!(tuning.dash_duration, 0.3);
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_zero_dash_duration_rejected() {
    let result = parse_tuning("(dash_duration: 0.0)");
    assert!(matches!(
        result,
        Err(TuningError::Invalid {
            field: "dash_duration",
            ..
        })
    ));
}

#[test]
fn test_negative_cooldown_rejected() {
    let tuning = LocomotionTuning {
        dash_cooldown: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        tuning.validate(),
        Err(TuningError::Invalid {
            field: "dash_cooldown",
            ..
        })
    ));
}

#[test]
fn test_non_finite_value_rejected() {
    let tuning = LocomotionTuning {
        gravity: f32::NAN,
        ..Default::default()
    };
    assert!(matches!(
        tuning.validate(),
        Err(TuningError::Invalid {
            field: "gravity",
            ..
        })
    ));
}

#[test]
fn test_upward_gravity_rejected() {
    let tuning = LocomotionTuning {
        gravity: 9.81,
        ..Default::default()
    };
    assert!(tuning.validate().is_err());
}

#[test]
fn test_air_control_out_of_range_rejected() {
    let tuning = LocomotionTuning {
        air_control: 1.5,
        ..Default::default()
    };
    let err = tuning.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid tuning field 'air_control': must be between 0 and 1"
    );
}

#[test]
fn test_default_tuning_is_valid() {
    assert!(LocomotionTuning::default().validate().is_ok());
}
