use pagekit::form::{
    Field, FormSnapshot, validate_age, validate_confirm_password, validate_email,
    validate_full_name, validate_password, validate_terms,
};
use pagekit::validation::{FieldResult, Rules};

fn valid_snapshot() -> FormSnapshot {
    FormSnapshot {
        full_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        password: "Abc12345".to_string(),
        confirm_password: "Abc12345".to_string(),
        age: "30".to_string(),
        terms: true,
    }
}

fn message(result: FieldResult) -> String {
    result.message().unwrap_or_default().to_string()
}

// ============================================================================
// Full name
// ============================================================================

#[test]
fn test_full_name_valid() {
    assert!(validate_full_name("Jane Doe").is_valid());
    assert!(validate_full_name("Al").is_valid());
    assert!(validate_full_name("  Jo  ").is_valid());
}

#[test]
fn test_full_name_required() {
    assert_eq!(message(validate_full_name("")), "Full name is required");
    assert_eq!(message(validate_full_name("   ")), "Full name is required");
}

#[test]
fn test_full_name_too_short() {
    assert_eq!(
        message(validate_full_name("A")),
        "Name must be at least 2 characters long"
    );
    assert_eq!(
        message(validate_full_name(" A ")),
        "Name must be at least 2 characters long"
    );
}

#[test]
fn test_full_name_letters_only() {
    assert_eq!(
        message(validate_full_name("John123")),
        "Name can only contain letters and spaces"
    );
    assert_eq!(
        message(validate_full_name("Jean-Luc")),
        "Name can only contain letters and spaces"
    );
}

// ============================================================================
// Email
// ============================================================================

#[test]
fn test_email_valid() {
    assert!(validate_email("a@b.com").is_valid());
    assert!(validate_email(" jane@example.co.uk ").is_valid());
}

#[test]
fn test_email_invalid() {
    assert_eq!(message(validate_email("")), "Email is required");
    for bad in ["not-an-email", "a@b", "a b@c.com", "@b.com", "a@.com"] {
        assert_eq!(
            message(validate_email(bad)),
            "Please enter a valid email address",
            "{bad}"
        );
    }
}

// ============================================================================
// Password
// ============================================================================

#[test]
fn test_password_valid() {
    assert!(validate_password("Abc12345").is_valid());
}

#[test]
fn test_password_first_failure_wins() {
    assert_eq!(message(validate_password("")), "Password is required");
    assert_eq!(
        message(validate_password("short1A")),
        "Password must be at least 8 characters long"
    );
    assert_eq!(
        message(validate_password("ABC12345")),
        "Password must contain at least one lowercase letter"
    );
    assert_eq!(
        message(validate_password("abc12345")),
        "Password must contain at least one uppercase letter"
    );
    assert_eq!(
        message(validate_password("Abcdefgh")),
        "Password must contain at least one number"
    );
}

#[test]
fn test_password_is_not_trimmed() {
    // Eight characters only when the spaces count.
    assert!(validate_password(" Abc123 ").is_valid());
}

// ============================================================================
// Confirmation
// ============================================================================

#[test]
fn test_confirm_password() {
    assert!(validate_confirm_password("Abc12345", "Abc12345").is_valid());
    assert_eq!(
        message(validate_confirm_password("Abc12345", "Abc12346")),
        "Passwords do not match"
    );
    assert_eq!(
        message(validate_confirm_password("Abc12345", "")),
        "Please confirm your password"
    );
}

// ============================================================================
// Age
// ============================================================================

#[test]
fn test_age_bounds() {
    assert_eq!(message(validate_age("12")), "You must be at least 13 years old");
    assert!(validate_age("13").is_valid());
    assert!(validate_age("120").is_valid());
    assert_eq!(message(validate_age("121")), "Please enter a valid age");
}

#[test]
fn test_age_malformed() {
    assert_eq!(message(validate_age("")), "Age is required");
    assert_eq!(message(validate_age("abc")), "Age is required");
    assert_eq!(message(validate_age("-3")), "You must be at least 13 years old");
    // Leading digits count, the rest is ignored.
    assert!(validate_age("25 years").is_valid());
}

#[test]
fn test_age_hex_prefix() {
    assert!(validate_age("0x14").is_valid());
    assert!(validate_age("0X1e").is_valid());
    assert_eq!(message(validate_age("0xc")), "You must be at least 13 years old");
    assert_eq!(message(validate_age("0xzz")), "Age is required");
}

// ============================================================================
// Terms
// ============================================================================

#[test]
fn test_terms() {
    assert!(validate_terms(true).is_valid());
    assert_eq!(
        message(validate_terms(false)),
        "You must agree to the terms and conditions"
    );
}

// ============================================================================
// Whole form
// ============================================================================

#[test]
fn test_validate_all_valid() {
    let report = valid_snapshot().validate_all();
    assert!(report.is_valid());
    assert!(report.errors().is_empty());
    assert_eq!(report.first_invalid_element(), None);
}

#[test]
fn test_flipping_any_field_invalidates() {
    let breakers: [(Field, fn(&mut FormSnapshot)); 6] = [
        (Field::FullName, |s| s.full_name = "J".into()),
        (Field::Email, |s| s.email = "jane".into()),
        (Field::Password, |s| {
            s.password = "abc".into();
            s.confirm_password = "abc".into();
        }),
        (Field::ConfirmPassword, |s| s.confirm_password = "Abc1234".into()),
        (Field::Age, |s| s.age = "9".into()),
        (Field::Terms, |s| s.terms = false),
    ];

    for (field, break_it) in breakers {
        let mut snapshot = valid_snapshot();
        break_it(&mut snapshot);
        let report = snapshot.validate_all();
        assert!(!report.is_valid(), "{field}");
        let errors = report.errors();
        assert_eq!(errors.len(), 1, "{field}");
        assert_eq!(errors[0].element_id, field.element_id());
        assert_eq!(report.first_invalid_element(), Some(field.element_id()));
    }
}

#[test]
fn test_validate_all_is_idempotent() {
    let mut snapshot = valid_snapshot();
    snapshot.email = "nope".into();
    assert_eq!(snapshot.validate_all(), snapshot.validate_all());
}

#[test]
fn test_empty_form_reports_every_field() {
    let report = FormSnapshot::default().validate_all();
    assert_eq!(report.errors().len(), 6);
    assert_eq!(
        report.get(Field::Terms).and_then(|r| r.message()),
        Some("You must agree to the terms and conditions")
    );
}

// ============================================================================
// Rules
// ============================================================================

#[test]
fn test_custom_rules() {
    let rules = Rules::<str>::new()
        .required("Required")
        .max_length(3, "Too long")
        .rule(|v: &str| v != "bad", "Forbidden");

    assert_eq!(rules.len(), 3);
    assert!(!rules.is_empty());
    assert!(Rules::<str>::new().is_empty());
    assert!(Rules::<str>::new().check("anything").is_valid());
    assert!(rules.check("ok").is_valid());
    assert_eq!(rules.check("").message(), Some("Required"));
    assert_eq!(rules.check("long").message(), Some("Too long"));
    assert_eq!(rules.check("bad").message(), Some("Forbidden"));
}
