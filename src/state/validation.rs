//! Personal info validation rules

use regex::Regex;
use std::sync::LazyLock;
use strum::{EnumIter, IntoEnumIterator};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const NAME_MESSAGE: &str = "Name can only contain letters";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern compiles"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,}$").expect("phone pattern compiles"));

/// Personal info inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "e.g. Stephen King",
            Self::Email => "e.g. stephenking@lorem.com",
            Self::Phone => "e.g. +1 234 567 890",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Field at `index`, clamped to the last one
    pub fn from_index(index: usize) -> Self {
        Self::iter().nth(index).unwrap_or(Self::Phone)
    }

    pub fn count() -> usize {
        Self::iter().count()
    }
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Outcome of validating the whole personal info step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step1Validation {
    pub valid: bool,
    pub name: ValidationResult,
    pub email: ValidationResult,
    pub phone: ValidationResult,
}

impl Step1Validation {
    pub fn field(&self, field: Field) -> &ValidationResult {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }
}

/// Validation rules for the personal info step.
///
/// The step controller only talks to this trait, so other rule sets can be
/// dropped in without touching navigation.
pub trait Validator {
    fn validate_name(&self, raw: &str) -> ValidationResult;

    fn validate_email(&self, raw: &str) -> ValidationResult;

    fn validate_phone(&self, raw: &str) -> ValidationResult;

    fn validate_field(&self, field: Field, raw: &str) -> ValidationResult {
        match field {
            Field::Name => self.validate_name(raw),
            Field::Email => self.validate_email(raw),
            Field::Phone => self.validate_phone(raw),
        }
    }

    /// Validate all three fields. Every field is checked so each error can be shown.
    fn validate_step1(&self, name: &str, email: &str, phone: &str) -> Step1Validation {
        let name = self.validate_name(name);
        let email = self.validate_email(email);
        let phone = self.validate_phone(phone);
        Step1Validation {
            valid: name.valid && email.valid && phone.valid,
            name,
            email,
            phone,
        }
    }
}

/// Default rules: simple regular expressions over the trimmed input
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternValidator;

impl Validator for PatternValidator {
    fn validate_name(&self, raw: &str) -> ValidationResult {
        let value = raw.trim();
        if value.is_empty() {
            ValidationResult::invalid(REQUIRED_MESSAGE)
        } else if !NAME_RE.is_match(value) {
            ValidationResult::invalid(NAME_MESSAGE)
        } else {
            ValidationResult::ok()
        }
    }

    fn validate_email(&self, raw: &str) -> ValidationResult {
        let value = raw.trim();
        if value.is_empty() {
            ValidationResult::invalid(REQUIRED_MESSAGE)
        } else if !EMAIL_RE.is_match(value) {
            ValidationResult::invalid(EMAIL_MESSAGE)
        } else {
            ValidationResult::ok()
        }
    }

    fn validate_phone(&self, raw: &str) -> ValidationResult {
        if raw.trim().is_empty() {
            return ValidationResult::invalid(REQUIRED_MESSAGE);
        }
        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
            .collect();
        if PHONE_RE.is_match(&cleaned) {
            ValidationResult::ok()
        } else {
            ValidationResult::invalid(PHONE_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: &ValidationResult) -> Option<&str> {
        result.message.as_deref()
    }

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_letters_and_spaces_are_valid() {
            let v = PatternValidator;
            assert!(v.validate_name("Stephen King").valid);
            assert!(v.validate_name("  ada  ").valid);
        }

        #[test]
        fn test_empty_is_required() {
            let v = PatternValidator;
            for raw in ["", "   ", "\t\n"] {
                let result = v.validate_name(raw);
                assert!(!result.valid);
                assert_eq!(message(&result), Some(REQUIRED_MESSAGE));
            }
        }

        #[test]
        fn test_non_letters_are_rejected() {
            let v = PatternValidator;
            for raw in ["R2D2", "Jean-Luc", "O'Brien", "José", "a.b"] {
                let result = v.validate_name(raw);
                assert!(!result.valid, "{raw} should be rejected");
                assert_eq!(message(&result), Some(NAME_MESSAGE));
            }
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_simple_shape_is_valid() {
            let v = PatternValidator;
            assert!(v.validate_email("a@b.co").valid);
            assert!(v.validate_email(" stephenking@lorem.com ").valid);
            assert!(v.validate_email("first+tag@mail.example.org").valid);
        }

        #[test]
        fn test_missing_tld_is_invalid() {
            let v = PatternValidator;
            let result = v.validate_email("a@b");
            assert!(!result.valid);
            assert_eq!(message(&result), Some(EMAIL_MESSAGE));
        }

        #[test]
        fn test_empty_is_required() {
            let v = PatternValidator;
            assert_eq!(message(&v.validate_email("")), Some(REQUIRED_MESSAGE));
        }

        #[test]
        fn test_malformed_addresses() {
            let v = PatternValidator;
            for raw in ["@b.co", "a@@b.co", "a b@c.de", "a@b.", "plain"] {
                assert!(!v.validate_email(raw).valid, "{raw} should be rejected");
            }
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ten_digits_with_separators_are_valid() {
            let v = PatternValidator;
            assert!(v.validate_phone("1234567890").valid);
            assert!(v.validate_phone("+1 234 567 8901").valid);
            assert!(v.validate_phone("(123) 456-7890").valid);
        }

        #[test]
        fn test_too_few_digits() {
            let v = PatternValidator;
            let result = v.validate_phone("123-456-78");
            assert!(!result.valid);
            assert_eq!(message(&result), Some(PHONE_MESSAGE));
        }

        #[test]
        fn test_empty_is_required() {
            let v = PatternValidator;
            assert_eq!(message(&v.validate_phone("  ")), Some(REQUIRED_MESSAGE));
        }

        #[test]
        fn test_plus_only_allowed_in_front() {
            let v = PatternValidator;
            assert!(!v.validate_phone("123+4567890").valid);
            assert!(!v.validate_phone("++1234567890").valid);
            assert!(!v.validate_phone("12345abcde67890").valid);
        }
    }

    mod step1 {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_valid() {
            let result =
                PatternValidator.validate_step1("Ada Lovelace", "ada@example.com", "0123456789");
            assert!(result.valid);
            assert_eq!(result.field(Field::Email), &ValidationResult::ok());
        }

        #[test]
        fn test_reports_every_failure() {
            let result = PatternValidator.validate_step1("", "nope", "12");
            assert!(!result.valid);
            assert_eq!(message(&result.name), Some(REQUIRED_MESSAGE));
            assert_eq!(message(&result.email), Some(EMAIL_MESSAGE));
            assert_eq!(message(&result.phone), Some(PHONE_MESSAGE));
        }

        #[test]
        fn test_one_bad_field_invalidates_step() {
            let result = PatternValidator.validate_step1("Ada", "ada@example.com", "");
            assert!(!result.valid);
            assert!(result.name.valid);
            assert!(result.email.valid);
        }
    }

    #[test]
    fn test_validate_field_dispatch() {
        let v = PatternValidator;
        assert!(v.validate_field(Field::Name, "Ada").valid);
        assert!(!v.validate_field(Field::Phone, "Ada").valid);
    }

    #[test]
    fn test_field_index_round_trip() {
        for field in Field::iter() {
            assert_eq!(Field::from_index(field.index()), field);
        }
        assert_eq!(Field::from_index(99), Field::Phone);
        assert_eq!(Field::count(), 3);
    }
}
