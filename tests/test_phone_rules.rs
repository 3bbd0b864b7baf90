//! Tests for phone number validation and formatting.
//!
//! Validation only accepts a bare run of ten digits, while formatting
//! tolerates punctuation. These tests pin that asymmetry down.

use phone_signin::phone;

#[test]
fn test_validation_examples() {
    assert!(phone::is_valid("5551234567"));
    assert!(!phone::is_valid("555-123-4567"));
    assert!(!phone::is_valid("55512345678"));
    assert!(!phone::is_valid(""));
}

/// A punctuated number is rejected by validation but formats cleanly.
#[test]
fn test_validation_stricter_than_formatting() {
    let raw = "(555) 123-4567";
    assert!(!phone::is_valid(raw));
    assert_eq!(phone::format(raw).as_str(), "(555) 123-4567");
}

#[test]
fn test_format_examples() {
    let cases = [
        ("5551234567", "(555) 123-4567"),
        ("(555) 123-4567", "(555) 123-4567"),
        ("15551234567", "(155) 512-3456"),
        ("555", "555"),
        ("5551", "(555) 1"),
        ("5551234", "(555) 123-4"),
    ];

    for (raw, expected) in cases {
        assert_eq!(phone::format(raw).as_str(), expected, "format({:?})", raw);
    }
}

/// Formatting while typing digit by digit.
#[test]
fn test_format_while_typing() {
    let typed = "5551234567";
    let shown: Vec<String> = (1..=typed.len())
        .map(|n| phone::format(&typed[..n]).into_inner())
        .collect();

    assert_eq!(
        shown,
        vec![
            "5",
            "55",
            "555",
            "(555) 1",
            "(555) 12",
            "(555) 123",
            "(555) 123-4",
            "(555) 123-45",
            "(555) 123-456",
            "(555) 123-4567",
        ]
    );
}

/// Formatted output of a valid number is never itself valid input.
#[test]
fn test_formatted_output_is_not_valid_input() {
    let formatted = phone::format("5551234567");
    assert!(formatted.is_complete());
    assert!(!phone::is_valid(formatted.as_str()));
    assert!(phone::is_valid(&formatted.digits_only()));
}
