use crate::{
    consts::{FIELD_PAD, FIELD_WIDTH},
    prelude::*,
};

/// A day or month field in canonical width: one digit inputs are zero
/// padded, everything else is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into)]
pub struct NormalizedField(String);

impl NormalizedField {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Pads a single digit day or month to [`FIELD_WIDTH`] characters so `"1"`
/// and `"01"` compare equal. Any other input comes back unchanged, which makes
/// this idempotent.
pub fn normalize(field: &str) -> NormalizedField {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(digit), None) if digit.is_ascii_digit() => {
            let mut padded = String::with_capacity(FIELD_WIDTH);
            padded.push(FIELD_PAD);
            padded.push(digit);
            NormalizedField(padded)
        }
        _ => NormalizedField(field.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pads_single_digits() {
        for d in 1..=9 {
            let field = d.to_string();
            let normalized = normalize(&field);
            assert_eq!(normalized.len(), 2);
            assert_eq!(normalized.as_str(), format!("0{d}"));
        }
    }

    #[test]
    fn test_two_digit_fields_unchanged() {
        for field in ["01", "09", "10", "12", "28", "31"] {
            assert_eq!(normalize(field).as_str(), field);
        }
    }

    #[test]
    fn test_other_input_passes_through() {
        // Not a digit, so not padded
        assert_eq!(normalize("a").as_str(), "a");
        assert_eq!(normalize("").as_str(), "");
        assert_eq!(normalize("123").as_str(), "123");
    }

    #[test]
    fn test_equal_after_normalizing() {
        assert_eq!(normalize("1"), normalize("01"));
        assert_ne!(normalize("1"), normalize("10"));
    }

    #[test]
    fn test_into_string() {
        let value: String = normalize("7").into();
        assert_eq!(value, "07");
    }

    proptest! {
        #[test]
        fn test_normalize_is_idempotent(value in 1u8..=31, padded in any::<bool>()) {
            let field = if padded { format!("{value:02}") } else { value.to_string() };
            let once = normalize(&field);
            let twice = normalize(&once);
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.len(), 2);
        }

        #[test]
        fn test_normalize_any_string_is_idempotent(field in "\\PC{0,4}") {
            let once = normalize(&field);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
