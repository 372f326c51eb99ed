//! Field-level validation rules for the contact form.
//!
//! `validate_value` is a pure function of the raw value, so the rules are
//! unit-testable without a document.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Phone,
    Url,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Email,
    Phone,
    Url,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::Email => "Please enter a valid email address",
            FieldError::Phone => "Please enter a valid phone number",
            FieldError::Url => "Please enter a valid URL starting with http:// or https://",
        }
    }
}

/// Validate a raw field value. Kind rules only apply to non-empty values, so
/// an optional field left blank is always fine. The required check runs last
/// and its message wins when both rules would fail.
pub fn validate_value(kind: FieldKind, required: bool, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();

    let mut failure = if value.is_empty() {
        None
    } else {
        match kind {
            FieldKind::Email if !is_valid_email(value) => Some(FieldError::Email),
            FieldKind::Phone if !is_valid_phone(value) => Some(FieldError::Phone),
            FieldKind::Url if !is_valid_url(value) => Some(FieldError::Url),
            _ => None,
        }
    };

    if required && value.is_empty() {
        failure = Some(FieldError::Required);
    }

    failure.map_or(Ok(()), Err)
}

/// ASCII `local@domain.tld`: no whitespace, a single split on `@`, and at
/// least one `.` strictly inside the domain part.
fn is_valid_email(value: &str) -> bool {
    if !value.is_ascii() || value.chars().any(|c| c.is_ascii_whitespace()) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// After stripping spaces, hyphens and parentheses: an optional leading `+`,
/// then 1 to 16 digits, the first of which is non-zero.
fn is_valid_phone(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    if digits.is_empty() || digits.len() > 16 {
        return false;
    }
    !digits.starts_with('0') && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_a_dot_after_the_at_sign() {
        assert_eq!(
            validate_value(FieldKind::Email, true, "a@b"),
            Err(FieldError::Email)
        );
        assert_eq!(validate_value(FieldKind::Email, true, "a@b.com"), Ok(()));
    }

    #[test]
    fn email_rejects_whitespace_and_malformed_shapes() {
        for bad in ["a b@c.com", "@b.com", "a@", "a@bcom", "a@.com", "plainaddress"] {
            assert_eq!(
                validate_value(FieldKind::Email, true, bad),
                Err(FieldError::Email),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn phone_strips_formatting_characters() {
        assert_eq!(
            validate_value(FieldKind::Phone, false, "(555) 123-4567"),
            Ok(())
        );
        assert_eq!(
            validate_value(FieldKind::Phone, false, "+358 40 123 4567"),
            Ok(())
        );
    }

    #[test]
    fn phone_rejects_leading_zero_letters_and_overlong_numbers() {
        assert_eq!(
            validate_value(FieldKind::Phone, false, "0123456"),
            Err(FieldError::Phone)
        );
        assert_eq!(
            validate_value(FieldKind::Phone, false, "call me"),
            Err(FieldError::Phone)
        );
        assert_eq!(
            validate_value(FieldKind::Phone, false, "12345678901234567"),
            Err(FieldError::Phone)
        );
        assert_eq!(validate_value(FieldKind::Phone, false, "1234567890123456"), Ok(()));
    }

    #[test]
    fn url_requires_an_http_scheme() {
        assert_eq!(
            validate_value(FieldKind::Url, false, "example.com"),
            Err(FieldError::Url)
        );
        assert_eq!(
            validate_value(FieldKind::Url, false, "https://"),
            Err(FieldError::Url)
        );
        assert_eq!(validate_value(FieldKind::Url, false, "https://example.com"), Ok(()));
        assert_eq!(validate_value(FieldKind::Url, false, "http://x"), Ok(()));
    }

    #[test]
    fn optional_empty_value_is_valid_for_every_kind() {
        for kind in [FieldKind::Email, FieldKind::Phone, FieldKind::Url, FieldKind::Text] {
            assert_eq!(validate_value(kind, false, ""), Ok(()));
            assert_eq!(validate_value(kind, false, "   "), Ok(()));
        }
    }

    #[test]
    fn required_empty_value_is_invalid_for_every_kind() {
        for kind in [FieldKind::Email, FieldKind::Phone, FieldKind::Url, FieldKind::Text] {
            assert_eq!(validate_value(kind, true, "  "), Err(FieldError::Required));
        }
    }

    #[test]
    fn validation_is_pure() {
        for _ in 0..3 {
            assert_eq!(
                validate_value(FieldKind::Email, true, "a@b"),
                Err(FieldError::Email)
            );
        }
    }

    #[test]
    fn error_messages_match_the_annotations() {
        assert_eq!(FieldError::Required.message(), "This field is required");
        assert_eq!(
            FieldError::Email.message(),
            "Please enter a valid email address"
        );
        assert_eq!(FieldError::Phone.message(), "Please enter a valid phone number");
        assert_eq!(
            FieldError::Url.message(),
            "Please enter a valid URL starting with http:// or https://"
        );
    }
}
