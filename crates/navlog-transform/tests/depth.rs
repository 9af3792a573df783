//! Tests for depth sign correction.

use navlog_model::{CellValue, ValueTransform};
use navlog_transform::{apply_transform, correct_depth};
use proptest::prelude::*;

#[test]
fn sign_convention() {
    assert_eq!(correct_depth("5.2").unwrap(), "-5.2");
    assert_eq!(correct_depth("-5.2").unwrap(), "-5.2");
    assert_eq!(correct_depth("0").unwrap(), "0");
}

#[test]
fn applied_through_column_transform() {
    let cell = CellValue::Text("5.0".to_string());
    assert_eq!(
        apply_transform(ValueTransform::Depth, &cell),
        Ok(CellValue::Text("-5.0".to_string()))
    );
}

proptest! {
    #[test]
    fn correction_is_idempotent(depth in -12_000.0f64..12_000.0) {
        let once = correct_depth(&depth.to_string()).unwrap();
        let twice = correct_depth(&once).unwrap();
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn corrected_value_is_minus_magnitude(depth in -12_000.0f64..12_000.0) {
        let corrected: f64 = correct_depth(&depth.to_string()).unwrap().parse().unwrap();
        prop_assert!(corrected <= 0.0);
        prop_assert_eq!(corrected, -depth.abs());
    }
}
