//! Serialisation tests for segments, conditions and dictionary config.
//!
//! Run with: `cargo test --features serde`

#![cfg(feature = "serde")]

use phonoseg_core::record::SegmentRecord;
use phonoseg_core::{Conditions, DictionaryConfig, FeatureValue, Segment};

#[test]
fn test_segment_serialises_as_three_lists() {
    let s = Segment::new(["voice", "labial"], ["nasal"], ["long"]);
    let json = serde_json::to_value(&s).expect("serialise");
    assert_eq!(
        json,
        serde_json::json!({
            "positive": ["voice", "labial"],
            "negative": ["nasal"],
            "zero": ["long"],
        })
    );
}

#[test]
fn test_segment_json_restores_equal_segment() {
    let s = Segment::new(["voice"], ["nasal", "round"], ["long"]);
    let text = serde_json::to_string(&s).expect("serialise");
    let restored: Segment = serde_json::from_str(&text).expect("deserialise");
    assert_eq!(restored, s);
    assert_eq!(restored.negative(), ["nasal", "round"]);
}

#[test]
fn test_missing_lists_deserialise_empty() {
    let s: Segment = serde_json::from_str(r#"{"positive": ["voice"]}"#).expect("deserialise");
    assert_eq!(s.positive(), ["voice"]);
    assert!(s.negative().is_empty());
    assert!(s.zero().is_empty());
}

#[test]
fn test_overlapping_record_resolves_last_wins() {
    let s: Segment =
        serde_json::from_str(r#"{"positive": ["a"], "negative": ["a"], "zero": []}"#)
            .expect("deserialise");
    assert_eq!(s.state("a"), Some(FeatureValue::Negative));

    let record = SegmentRecord::from(&s);
    assert_eq!(record.positive, Vec::<String>::new());
    assert_eq!(record.negative, ["a"]);
}

#[test]
fn test_feature_value_uses_symbols() {
    assert_eq!(serde_json::to_string(&FeatureValue::Positive).unwrap(), r#""+""#);
    assert_eq!(serde_json::to_string(&FeatureValue::Negative).unwrap(), r#""-""#);
    assert_eq!(serde_json::to_string(&FeatureValue::Zero).unwrap(), r#""0""#);
    assert!(serde_json::from_str::<FeatureValue>(r#""x""#).is_err());
}

#[test]
fn test_conditions_deserialise_with_omitted_lists() {
    let c: Conditions =
        serde_json::from_str(r#"{"positive": ["voice"], "negative": ["nasal"]}"#).expect("deserialise");
    assert_eq!(c, Conditions::new().positive(["voice"]).negative(["nasal"]));

    let s = Segment::new(["voice"], ["nasal"], ["length"]);
    assert!(s.meets_conditions(&c));

    let empty: Conditions = serde_json::from_str("{}").expect("deserialise");
    assert!(empty.is_empty());
}

#[test]
fn test_dictionary_config_round_trip() {
    let config = DictionaryConfig::default();
    let json = serde_json::to_string(&config).expect("serialise");
    assert_eq!(json, r#"{"reserved_keys":["IPA"]}"#);
    let back: DictionaryConfig = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(back, config);
}

#[test]
fn test_dictionary_config_missing_fields_use_defaults() {
    let config: DictionaryConfig = serde_json::from_str("{}").expect("deserialise");
    assert_eq!(config, DictionaryConfig::default());
    assert!(config.is_reserved("IPA"));
}
