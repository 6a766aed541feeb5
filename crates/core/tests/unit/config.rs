//! # Configuration Tests
//!
//! Tests for the host-facing configuration surface: defaults, JSON loading,
//! and schema strictness.

use remu_core::Config;

#[test]
fn test_config_default_matches_reset_state() {
    let config = Config::default();
    assert_eq!(config.reset_pc, 0);
    assert_eq!(config.mhartid, 0);
    assert!(!config.trace);
}

#[test]
fn test_config_empty_object_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_from_json_full() {
    let config = Config::from_json(
        r#"{ "reset_pc": 2147483648, "mhartid": 3, "trace": true }"#,
    )
    .unwrap();
    assert_eq!(config.reset_pc, 0x8000_0000);
    assert_eq!(config.mhartid, 3);
    assert!(config.trace);
}

#[test]
fn test_config_partial_json_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "mhartid": 1 }"#).unwrap();
    assert_eq!(config.mhartid, 1);
    assert_eq!(config.reset_pc, 0);
}

#[test]
fn test_config_rejects_unknown_fields() {
    assert!(Config::from_json(r#"{ "reset_pcc": 4 }"#).is_err());
}

#[test]
fn test_config_rejects_malformed_json() {
    assert!(Config::from_json("{ not json").is_err());
}
