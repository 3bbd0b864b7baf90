//! Phone number rules and the canonical PhoneNumber value object.
//!
//! Validation and formatting are deliberately separate. [`is_valid`] only
//! accepts a bare run of exactly ten digits, while [`format`] strips any
//! punctuation first, so `"(555) 123-4567"` is rejected by the former and
//! accepted by the latter.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits in a complete phone number. Extra digits are dropped.
pub const PHONE_DIGITS: usize = 10;

// ASCII class on purpose: `\d` in the regex crate also matches other scripts' digits.
static TEN_DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// Check whether a raw input string is exactly ten digits and nothing else.
///
/// # Example
///
/// ```
/// use phone_signin::domain::phone;
///
/// assert!(phone::is_valid("5551234567"));
/// assert!(!phone::is_valid("(555) 123-4567"));
/// ```
pub fn is_valid(raw: &str) -> bool {
    TEN_DIGITS_REGEX.is_match(raw)
}

/// Normalize raw input into its canonical grouping.
///
/// Non-digits are removed, at most ten digits are kept, and the rest are
/// grouped as `(XXX) XXX-XXXX`. Shorter inputs get a partial grouping so the
/// value can be shown while typing.
///
/// # Example
///
/// ```
/// use phone_signin::domain::phone;
///
/// assert_eq!(phone::format("555").as_str(), "555");
/// assert_eq!(phone::format("5551").as_str(), "(555) 1");
/// assert_eq!(phone::format("555.123.4567").as_str(), "(555) 123-4567");
/// ```
pub fn format(raw: &str) -> PhoneNumber {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    // All ASCII from here on, so byte slicing is on char boundaries.
    let formatted = match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        len => format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..len.min(PHONE_DIGITS)]
        ),
    };

    PhoneNumber(formatted)
}

/// A phone number in canonical form.
///
/// The only way to build one is through [`format`] (or deserialization,
/// which runs the same normalization), so the inner string is always a
/// canonical grouping of at most ten digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Whether all ten digits are present.
    pub fn is_complete(&self) -> bool {
        self.0.chars().filter(|c| c.is_ascii_digit()).count() == PHONE_DIGITS
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string, re-normalizing
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(format(&s))
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
