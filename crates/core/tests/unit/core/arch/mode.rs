//! # Privilege Mode Tests
//!
//! Tests for the privilege mode encoding, ordering, and display.

use remu_core::core::arch::mode::PrivilegeMode;

#[test]
fn test_mode_from_bits_round_trips() {
    for mode in [
        PrivilegeMode::User,
        PrivilegeMode::Supervisor,
        PrivilegeMode::Machine,
    ] {
        assert_eq!(PrivilegeMode::from_bits(mode.to_bits()), mode);
    }
}

#[test]
fn test_mode_encodings_match_architecture() {
    assert_eq!(PrivilegeMode::User.to_bits(), 0b00);
    assert_eq!(PrivilegeMode::Supervisor.to_bits(), 0b01);
    assert_eq!(PrivilegeMode::Machine.to_bits(), 0b11);
}

#[test]
#[should_panic(expected = "reserved privilege encoding")]
fn test_mode_reserved_encoding_panics() {
    let _ = PrivilegeMode::from_bits(0b10);
}

#[test]
#[should_panic(expected = "reserved privilege encoding")]
fn test_mode_out_of_range_encoding_panics() {
    let _ = PrivilegeMode::from_bits(4);
}

#[test]
fn test_mode_ordering_reflects_privilege() {
    assert!(PrivilegeMode::User < PrivilegeMode::Supervisor);
    assert!(PrivilegeMode::Supervisor < PrivilegeMode::Machine);
    assert!(PrivilegeMode::Machine >= PrivilegeMode::Machine);
}

#[test]
fn test_mode_display_names() {
    assert_eq!(PrivilegeMode::User.to_string(), "User");
    assert_eq!(PrivilegeMode::Supervisor.to_string(), "Supervisor");
    assert_eq!(PrivilegeMode::Machine.to_string(), "Machine");
    assert_eq!(PrivilegeMode::Machine.name(), "Machine");
}
