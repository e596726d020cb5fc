//! Signup form validation.
//!
//! Six fields, each checked by its own validator. A validator is a pure
//! function of the field value (the confirmation also sees the password) and
//! reports at most one message: the first rule the value breaks.

use std::fmt;
use std::sync::LazyLock;

use pagedom::{Surface, SurfaceResult};

use crate::validation::{FieldError, FieldResult, Rules};

static FULL_NAME_RULES: LazyLock<Rules<str>> = LazyLock::new(|| {
    Rules::new()
        .required("Full name is required")
        .min_length(2, "Name must be at least 2 characters long")
        .pattern(r"^[A-Za-z\s]+$", "Name can only contain letters and spaces")
});

static EMAIL_RULES: LazyLock<Rules<str>> = LazyLock::new(|| {
    Rules::new()
        .required("Email is required")
        .pattern(
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            "Please enter a valid email address",
        )
});

static PASSWORD_RULES: LazyLock<Rules<str>> = LazyLock::new(|| {
    Rules::new()
        .required("Password is required")
        .min_length(8, "Password must be at least 8 characters long")
        .pattern("[a-z]", "Password must contain at least one lowercase letter")
        .pattern("[A-Z]", "Password must contain at least one uppercase letter")
        .pattern("[0-9]", "Password must contain at least one number")
});

static AGE_RULES: LazyLock<Rules<Option<i64>>> = LazyLock::new(|| {
    Rules::new()
        .present("Age is required")
        .at_least(MIN_AGE, "You must be at least 13 years old")
        .at_most(MAX_AGE, "Please enter a valid age")
});

static TERMS_RULES: LazyLock<Rules<bool>> =
    LazyLock::new(|| Rules::new().checked("You must agree to the terms and conditions"));

pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 120;

/// ID of the signup `<form>` element.
pub const FORM_ID: &str = "signup-form";

/// ID of the element shown after a successful submit.
pub const SUCCESS_ID: &str = "success-message";

/// The signup form's fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Age,
    Terms,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::Terms,
    ];

    /// ID of the input element.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::FullName => "fullname",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
            Field::Age => "age",
            Field::Terms => "terms",
        }
    }

    /// ID of the element that displays this field's error.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::FullName => "fullname-error",
            Field::Email => "email-error",
            Field::Password => "password-error",
            Field::ConfirmPassword => "confirm-password-error",
            Field::Age => "age-error",
            Field::Terms => "terms-error",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.element_id() == id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Current values of every signup field, read in one go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub terms: bool,
}

impl FormSnapshot {
    /// Read all field values from the surface.
    pub fn read(surface: &dyn Surface) -> SurfaceResult<Self> {
        Ok(Self {
            full_name: surface.value(Field::FullName.element_id())?,
            email: surface.value(Field::Email.element_id())?,
            password: surface.value(Field::Password.element_id())?,
            confirm_password: surface.value(Field::ConfirmPassword.element_id())?,
            age: surface.value(Field::Age.element_id())?,
            terms: surface.is_checked(Field::Terms.element_id())?,
        })
    }

    /// Validate a single field.
    pub fn validate(&self, field: Field) -> FieldResult {
        match field {
            Field::FullName => validate_full_name(&self.full_name),
            Field::Email => validate_email(&self.email),
            Field::Password => validate_password(&self.password),
            Field::ConfirmPassword => {
                validate_confirm_password(&self.password, &self.confirm_password)
            }
            Field::Age => validate_age(&self.age),
            Field::Terms => validate_terms(self.terms),
        }
    }

    /// Validate every field.
    pub fn validate_all(&self) -> FormReport {
        FormReport {
            results: Field::ALL
                .into_iter()
                .map(|field| (field, self.validate(field)))
                .collect(),
        }
    }
}

/// Per-field results of validating the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    results: Vec<(Field, FieldResult)>,
}

impl FormReport {
    /// True if every field passed. This is what allows a submit.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, r)| r.is_valid())
    }

    pub fn get(&self, field: Field) -> Option<&FieldResult> {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldResult)> {
        self.results.iter().map(|(f, r)| (*f, r))
    }

    /// All failures, in field order.
    pub fn errors(&self) -> Vec<FieldError> {
        self.results
            .iter()
            .filter_map(|(field, result)| {
                result.message().map(|message| FieldError {
                    field_name: field.to_string(),
                    element_id: field.element_id().to_string(),
                    message: message.to_string(),
                })
            })
            .collect()
    }

    /// ID of the first invalid input (for focusing).
    pub fn first_invalid_element(&self) -> Option<&'static str> {
        self.results
            .iter()
            .find(|(_, r)| !r.is_valid())
            .map(|(f, _)| f.element_id())
    }
}

pub fn validate_full_name(value: &str) -> FieldResult {
    FULL_NAME_RULES.check(value.trim())
}

pub fn validate_email(value: &str) -> FieldResult {
    EMAIL_RULES.check(value.trim())
}

/// Passwords are checked untrimmed.
pub fn validate_password(value: &str) -> FieldResult {
    PASSWORD_RULES.check(value)
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> FieldResult {
    Rules::<str>::new()
        .required("Please confirm your password")
        .equals(password, "Passwords do not match")
        .check(confirm)
}

pub fn validate_age(value: &str) -> FieldResult {
    AGE_RULES.check(&parse_age(value))
}

pub fn validate_terms(checked: bool) -> FieldResult {
    TERMS_RULES.check(&checked)
}

/// Parse the leading integer of `value`.
///
/// Leading whitespace is skipped and an optional sign accepted. A `0x`/`0X`
/// prefix switches to hexadecimal. The run of digits that follows is taken
/// and anything after it ignored (`"12abc"` is 12, `"3.9"` is 3, `"0x14"` is
/// 20). Returns `None` when there are no digits. Values too large for `i64`
/// saturate.
pub fn parse_age(value: &str) -> Option<i64> {
    let rest = value.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut seen = false;
    let mut magnitude: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        magnitude = magnitude
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    seen.then(|| if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_age_takes_integer_prefix() {
        assert_eq!(parse_age("42"), Some(42));
        assert_eq!(parse_age("  17 "), Some(17));
        assert_eq!(parse_age("12abc"), Some(12));
        assert_eq!(parse_age("3.9"), Some(3));
        assert_eq!(parse_age("-5"), Some(-5));
        assert_eq!(parse_age("+20"), Some(20));
    }

    #[test]
    fn parse_age_reads_hex_prefix() {
        assert_eq!(parse_age("0x14"), Some(20));
        assert_eq!(parse_age("0X1e"), Some(30));
        assert_eq!(parse_age("-0x10"), Some(-16));
        assert_eq!(parse_age("0x1fg"), Some(31));
        assert_eq!(parse_age("0x"), None);
        assert_eq!(parse_age("0"), Some(0));
    }

    #[test]
    fn parse_age_rejects_non_numeric() {
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("-"), None);
        assert_eq!(parse_age(" - 5"), None);
        assert_eq!(parse_age("0xg"), None);
    }

    #[test]
    fn parse_age_saturates() {
        assert_eq!(parse_age("99999999999999999999999"), Some(i64::MAX));
    }
}
