//! Tests for the serialized form of persisted settings.
//!
//! Only built with the `serde` feature.

#![cfg(feature = "serde")]

use weldpath::prelude::*;

/// Test that options use camelCase keys and missing keys stay unset.
#[test]
fn test_options_deserialize_partial() {
    let options: ConditionOptions =
        serde_json::from_str(r#"{"baseThreshold":0.01,"countMin":10}"#).unwrap();

    assert_eq!(options.base_threshold, Some(0.01));
    assert_eq!(options.count_min, Some(10));
    assert_eq!(options.slice_size, None);
    assert_eq!(options.overlap_size, None);
}

/// Test that an empty object gives the default options.
#[test]
fn test_options_deserialize_empty() {
    let options: ConditionOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, ConditionOptions::default());
}

/// Test the serialized keys of a full record.
#[test]
fn test_options_serialize() {
    let options = ConditionOptions {
        base_threshold: Some(0.5),
        count_min: Some(20),
        slice_size: Some(100),
        overlap_size: Some(40),
    };
    let json = serde_json::to_value(options).unwrap();

    assert_eq!(json["baseThreshold"], 0.5);
    assert_eq!(json["countMin"], 20);
    assert_eq!(json["sliceSize"], 100);
    assert_eq!(json["overlapSize"], 40);
}

/// Test mode names in serialized form.
#[test]
fn test_mode_serde() {
    assert_eq!(serde_json::to_string(&Approximate).unwrap(), r#""approximate""#);
    assert_eq!(serde_json::to_string(&Diff).unwrap(), r#""diff""#);

    let mode: FilterMode = serde_json::from_str(r#""approximate""#).unwrap();
    assert_eq!(mode, Approximate);
}

/// Test that a stored record drives a conditioner.
#[test]
fn test_options_drive_conditioner() {
    let options: ConditionOptions = serde_json::from_str(r#"{"baseThreshold":0.05}"#).unwrap();
    let conditioner = Conditioner::<f64>::from_options(&options).build().unwrap();
    assert_eq!(conditioner.config().base_threshold, 0.05);
}
