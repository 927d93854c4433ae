//! Tagged container keys
//!
//! Keys are either integers or string labels. Text entering the crate is
//! classified once, through [`Key::parse`], using a single explicit rule: a
//! label is integer-like iff it is the canonical decimal rendering of an
//! `i64`. That means an optional `-`, then either the lone digit `0` or a
//! non-zero digit followed by more digits, and nothing else. `"-0"`, `"08"`,
//! `" 1"`, `"+1"`, `"1.0"` and out-of-range values all stay string keys.

use std::fmt;

/// Container key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer-like key
    Int(i64),
    /// Any other key
    ///
    /// Holds text that is not a canonical integer. Build keys from text with
    /// [`Key::parse`] or `From<&str>`; a hand-built `Str("5")` sits beside
    /// `Int(5)` in a container and collides with it when rendered to JSON.
    Str(String),
}

impl Key {
    /// Classify a textual key
    pub fn parse(text: &str) -> Self {
        if is_canonical_integer(text) {
            if let Ok(value) = text.parse::<i64>() {
                return Key::Int(value);
            }
        }
        Key::Str(text.to_string())
    }

    /// Whether this key takes part in integer renumbering
    pub fn is_integer_like(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Integer value, if the key is integer-like
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(value) => Some(*value),
            Key::Str(_) => None,
        }
    }

    /// String label, if the key is not integer-like
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(label) => Some(label),
        }
    }
}

fn is_canonical_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    match digits.as_bytes() {
        [] => false,
        // "0" is canonical, "-0" is not
        [b'0'] => digits.len() == text.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(value) => write!(f, "{}", value),
            Key::Str(label) => f.write_str(label),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::parse(text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        if is_canonical_integer(&text) {
            if let Ok(value) = text.parse::<i64>() {
                return Key::Int(value);
            }
        }
        Key::Str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_canonical_integers() {
        let cases = vec![
            ("0", 0),
            ("7", 7),
            ("42", 42),
            ("-1", -1),
            ("-90", -90),
            ("9223372036854775807", i64::MAX),
            ("-9223372036854775808", i64::MIN),
        ];

        for (text, expected) in cases {
            assert_eq!(Key::parse(text), Key::Int(expected), "key {:?}", text);
        }
    }

    #[test]
    fn test_parse_non_canonical_stays_string() {
        let cases = vec![
            "", "-", "-0", "00", "08", " 1", "1 ", "+1", "1.0", "1e3", "0x10", "OR",
            "9223372036854775808", "-9223372036854775809", "١",
        ];

        for text in cases {
            assert_eq!(
                Key::parse(text),
                Key::Str(text.to_string()),
                "key {:?}",
                text
            );
        }
    }

    #[test]
    fn test_from_impls_classify() {
        assert_eq!(Key::from("12"), Key::Int(12));
        assert_eq!(Key::from("label".to_string()), Key::Str("label".into()));
        assert_eq!(Key::from("-3".to_string()), Key::Int(-3));
        assert_eq!(Key::from(5), Key::Int(5));
        assert_eq!(Key::from(5u32), Key::Int(5));
    }

    #[test]
    fn test_accessors() {
        assert!(Key::Int(3).is_integer_like());
        assert!(!Key::from("a").is_integer_like());
        assert_eq!(Key::Int(3).as_int(), Some(3));
        assert_eq!(Key::from("a").as_str(), Some("a"));
        assert_eq!(Key::Int(3).as_str(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Int(-4).to_string(), "-4");
        assert_eq!(Key::from("OR#2").to_string(), "OR#2");
    }

    proptest! {
        #[test]
        fn prop_integer_display_parses_back(value in any::<i64>()) {
            let key = Key::Int(value);
            prop_assert_eq!(Key::parse(&key.to_string()), key);
        }

        #[test]
        fn prop_leading_zero_is_string(value in 0u32..1_000_000) {
            let text = format!("0{}", value);
            prop_assert!(!Key::parse(&text).is_integer_like());
        }
    }
}
