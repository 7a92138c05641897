use tracing::trace;

use crate::{DateFieldTriple, normalize, sanitize_year};

/// Field by field equality of two triples after normalizing day and month
/// and sanitizing the year.
///
/// This says nothing about whether either date exists: `02/29/2021` equals
/// `2/29/2021`. A year field that cannot be sanitized never matches.
pub fn compare_fields(base: &DateFieldTriple, compare: &DateFieldTriple) -> bool {
    let days_match = normalize(base.day()) == normalize(compare.day());
    let months_match = normalize(base.month()) == normalize(compare.month());
    let years_match = match (sanitize_year(base.year()), sanitize_year(compare.year())) {
        (Some(base_year), Some(compare_year)) => base_year == compare_year,
        _ => false,
    };

    trace!(days_match, months_match, years_match, "compared date fields");
    days_match && months_match && years_match
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(month: &str, day: &str, year: &str) -> DateFieldTriple {
        DateFieldTriple::new(month, day, year)
    }

    #[test]
    fn test_leading_zeros_ignored() {
        assert!(compare_fields(&triple("01", "05", "2021"), &triple("1", "5", "2021")));
        assert!(compare_fields(&triple("1", "05", "2021"), &triple("01", "5", "2021")));
    }

    #[test]
    fn test_time_noise_ignored() {
        assert!(compare_fields(
            &triple("1", "1", "2021 10:30:00"),
            &triple("01", "01", "2021 23:59:59")
        ));
    }

    #[test]
    fn test_each_field_must_match() {
        struct TestCase {
            compare:     DateFieldTriple,
            description: &'static str,
        }

        let base = triple("03", "01", "2020");
        let cases = [
            TestCase {
                compare:     triple("03", "02", "2020"),
                description: "different day",
            },
            TestCase {
                compare:     triple("04", "01", "2020"),
                description: "different month",
            },
            TestCase {
                compare:     triple("03", "01", "2021"),
                description: "different year",
            },
            TestCase {
                compare:     triple("01", "03", "2020"),
                description: "day and month swapped",
            },
        ];

        for case in &cases {
            assert!(
                !compare_fields(&base, &case.compare),
                "Expected mismatch for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_nonexistent_dates_still_compare() {
        assert!(compare_fields(&triple("02", "29", "2021"), &triple("2", "29", "2021")));
    }

    #[test]
    fn test_unsanitizable_years_never_match() {
        assert!(!compare_fields(&triple("1", "1", "20"), &triple("1", "1", "20")));
    }
}
