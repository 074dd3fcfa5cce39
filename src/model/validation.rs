use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::{FieldDescriptor, FieldKind};

/// Validation failures for a single form field.
///
/// The display strings are the messages shown beneath the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a valid age")]
    InvalidAge,
}

/// Inclusive bounds for a pet's age in years.
pub const AGE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=50.0;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("valid hardcoded regex")
});

/// Returns `true` if `email` looks like `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns `true` if `phone` is exactly in the `(123) 456-7890` mask.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Returns `true` if `age` parses as a number within [`AGE_RANGE`].
pub fn is_valid_age(age: &str) -> bool {
    age.trim()
        .parse::<f64>()
        .is_ok_and(|years| AGE_RANGE.contains(&years))
}

/// Validates a field value against its descriptor.
///
/// Rules are checked in order and the first failure wins: required, then the
/// kind-specific format check. Kind checks only apply to non-empty values, so
/// an optional field may always be left blank.
pub fn validate(descriptor: &FieldDescriptor, value: &str) -> Result<(), ValidationError> {
    if descriptor.required && value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if value.is_empty() {
        return Ok(());
    }
    match descriptor.kind {
        FieldKind::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(ValidationError::InvalidPhone),
        FieldKind::Age if !is_valid_age(value) => Err(ValidationError::InvalidAge),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::field::{FieldId, InputKind};

    fn descriptor(kind: FieldKind, required: bool) -> FieldDescriptor {
        FieldDescriptor {
            id: FieldId::PetName,
            label: "Test",
            kind,
            input: InputKind::Text,
            required,
        }
    }

    // --- is_valid_email ---

    #[test]
    fn email_simple() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("owner.name+pets@example.org"));
    }

    #[test]
    fn email_without_tld() {
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn email_with_space() {
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn email_empty() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_double_at() {
        assert!(!is_valid_email("a@@b.com"));
    }

    // --- is_valid_phone ---

    #[test]
    fn phone_masked() {
        assert!(is_valid_phone("(123) 456-7890"));
    }

    #[test]
    fn phone_dashes_only() {
        assert!(!is_valid_phone("123-456-7890"));
    }

    #[test]
    fn phone_missing_space_and_dash() {
        assert!(!is_valid_phone("(123)4567890"));
    }

    #[test]
    fn phone_partial_mask() {
        assert!(!is_valid_phone("(123) 456-"));
    }

    #[test]
    fn phone_non_ascii_digits() {
        assert!(!is_valid_phone("(١٢٣) 456-7890"));
    }

    #[quickcheck]
    fn phone_any_ten_digits_in_mask_accepted(digits: Vec<u8>) -> bool {
        let digits: String = digits
            .iter()
            .chain(std::iter::repeat(&0))
            .take(10)
            .map(|d| char::from(b'0' + d % 10))
            .collect();
        let phone = format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]);
        is_valid_phone(&phone)
    }

    // --- is_valid_age ---

    #[test]
    fn age_bounds_inclusive() {
        assert!(is_valid_age("0"));
        assert!(is_valid_age("50"));
        assert!(is_valid_age("2.5"));
    }

    #[test]
    fn age_out_of_range() {
        assert!(!is_valid_age("-1"));
        assert!(!is_valid_age("51"));
    }

    #[test]
    fn age_not_a_number() {
        assert!(!is_valid_age("three"));
        assert!(!is_valid_age("NaN"));
        assert!(!is_valid_age("inf"));
    }

    // --- validate ---

    #[test]
    fn required_empty_fails() {
        let d = descriptor(FieldKind::Generic, true);
        assert_eq!(validate(&d, ""), Err(ValidationError::Required));
    }

    #[test]
    fn required_whitespace_fails() {
        let d = descriptor(FieldKind::Generic, true);
        assert_eq!(validate(&d, "   "), Err(ValidationError::Required));
    }

    #[test]
    fn optional_empty_passes_for_every_kind() {
        for kind in [
            FieldKind::Generic,
            FieldKind::Email,
            FieldKind::Tel,
            FieldKind::Age,
        ] {
            assert_eq!(validate(&descriptor(kind, false), ""), Ok(()), "{kind:?}");
        }
    }

    #[test]
    fn required_wins_over_format() {
        let d = descriptor(FieldKind::Email, true);
        assert_eq!(validate(&d, " "), Err(ValidationError::Required));
    }

    #[test]
    fn email_kind() {
        let d = descriptor(FieldKind::Email, false);
        assert_eq!(validate(&d, "a@b.co"), Ok(()));
        assert_eq!(validate(&d, "a@b"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn tel_kind() {
        let d = descriptor(FieldKind::Tel, false);
        assert_eq!(validate(&d, "(123) 456-7890"), Ok(()));
        assert_eq!(validate(&d, "(123) 456"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn age_kind() {
        let d = descriptor(FieldKind::Age, false);
        assert_eq!(validate(&d, "0"), Ok(()));
        assert_eq!(validate(&d, "50"), Ok(()));
        assert_eq!(validate(&d, "-1"), Err(ValidationError::InvalidAge));
        assert_eq!(validate(&d, "51"), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn required_age_empty_fails() {
        let d = descriptor(FieldKind::Age, true);
        assert_eq!(validate(&d, ""), Err(ValidationError::Required));
    }

    #[test]
    fn generic_accepts_anything_non_empty() {
        let d = descriptor(FieldKind::Generic, true);
        assert_eq!(validate(&d, "Rex"), Ok(()));
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number"
        );
        assert_eq!(
            ValidationError::InvalidAge.to_string(),
            "Please enter a valid age"
        );
    }

    #[quickcheck]
    fn generic_optional_never_fails(s: String) -> bool {
        validate(&descriptor(FieldKind::Generic, false), &s).is_ok()
    }
}
