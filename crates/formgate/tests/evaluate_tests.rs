//! Integration tests for formgate evaluation
//!
//! Cover the public behaviour of `Validator::evaluate`:
//! - default rule table end to end
//! - required / optional handling, including the "0" value
//! - override merging and ordering
//! - configuration errors
//! - determinism and thread sharing

use std::sync::atomic::{AtomicUsize, Ordering};

use formgate::checks::{is_valid_credit_card, is_valid_email, is_valid_password};
use formgate::{
    default_message, Config, ConfigError, FieldRule, InputRecord, RuleId, RuleRegistry, RuleTable,
    Validator,
};
use pretty_assertions::assert_eq;

fn complete_record() -> InputRecord {
    InputRecord::new()
        .with("email", "user@example.co.jp")
        .with("phone", "09012345678")
        .with("password", "MyPass123")
        .with("birthDate", "1990-05-20")
        .with("postalCode", "100-0001")
}

#[test]
fn test_complete_record_is_valid() {
    let result = Validator::builtin()
        .evaluate(&complete_record(), None)
        .unwrap();

    assert!(result.is_valid());
    assert_eq!(result.errors(), Vec::<&str>::new());
}

#[test]
fn test_invalid_email_and_password_reported_in_order() {
    let record = InputRecord::new()
        .with("email", "not-an-email")
        .with("password", "weak");

    let result = Validator::builtin().evaluate(&record, None).unwrap();

    assert!(!result.is_valid());
    assert_eq!(
        result.errors(),
        vec![
            default_message(RuleId::Email),
            default_message(RuleId::Password)
        ]
    );
    // optional fields that were not submitted produce nothing
    assert_eq!(result.error_for("phone"), None);
    assert_eq!(result.error_for("birthDate"), None);
    assert_eq!(result.error_for("postalCode"), None);
}

#[test]
fn test_every_field_evaluated_after_failures() {
    let record = InputRecord::new()
        .with("email", "bad")
        .with("phone", "bad")
        .with("password", "bad")
        .with("birthDate", "2000-02-30")
        .with("postalCode", "12-34567");

    let result = Validator::builtin().evaluate(&record, None).unwrap();

    let fields: Vec<&str> = result
        .field_errors()
        .iter()
        .map(|e| e.field.as_str())
        .collect();
    assert_eq!(
        fields,
        vec!["email", "phone", "password", "birthDate", "postalCode"]
    );
}

#[test]
fn test_missing_required_fields_use_labels() {
    let result = Validator::builtin()
        .evaluate(&InputRecord::new(), None)
        .unwrap();

    assert_eq!(
        result.errors(),
        vec!["Email is required", "Password is required"]
    );
}

#[test]
fn test_null_and_empty_count_as_missing() {
    let mut record = InputRecord::new().with("email", "");
    record.insert_null("password");

    let result = Validator::builtin().evaluate(&record, None).unwrap();
    assert_eq!(
        result.errors(),
        vec!["Email is required", "Password is required"]
    );
}

#[test]
fn test_empty_optional_field_is_skipped() {
    let record = complete_record().with("phone", "").with("birthDate", "");
    let result = Validator::builtin().evaluate(&record, None).unwrap();
    assert!(result.is_valid());
}

static CARD_CALLS: AtomicUsize = AtomicUsize::new(0);

fn counting_card_checker(value: &str) -> bool {
    CARD_CALLS.fetch_add(1, Ordering::SeqCst);
    is_valid_credit_card(value)
}

#[test]
fn test_missing_required_field_skips_checker() {
    let registry = RuleRegistry::builtin().bind(RuleId::CreditCard, counting_card_checker);
    let overrides = RuleTable::new().with(
        "card",
        FieldRule::required(RuleId::CreditCard).with_label("Card number"),
    );

    let result = Validator::new(&registry)
        .evaluate(&complete_record(), Some(&overrides))
        .unwrap();
    assert_eq!(result.errors(), vec!["Card number is required"]);
    assert_eq!(CARD_CALLS.load(Ordering::SeqCst), 0);

    let record = complete_record().with("card", "4111 1111 1111 1111");
    let result = Validator::new(&registry)
        .evaluate(&record, Some(&overrides))
        .unwrap();
    assert!(result.is_valid());
    assert_eq!(CARD_CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_required_zero_is_present() {
    let overrides = RuleTable::new()
        .with("quantity", FieldRule::required(RuleId::Json))
        .with("pin", FieldRule::required(RuleId::Password));
    let record = complete_record().with("quantity", "0").with("pin", "0");

    let result = Validator::builtin()
        .evaluate(&record, Some(&overrides))
        .unwrap();

    // "0" is checked by its rule instead of being reported as missing
    assert_eq!(result.error_for("quantity"), None);
    assert_eq!(
        result.error_for("pin"),
        Some(default_message(RuleId::Password))
    );
}

#[test]
fn test_override_replaces_whole_rule() {
    let registry = RuleRegistry::builtin().with_default_table(RuleTable::new().with(
        "email",
        FieldRule::required(RuleId::Email)
            .with_label("Work email")
            .with_message("Use your work address"),
    ));
    let overrides = RuleTable::new().with("email", FieldRule::required(RuleId::Email));
    let validator = Validator::new(&registry);

    let missing = validator
        .evaluate(&InputRecord::new(), Some(&overrides))
        .unwrap();
    assert_eq!(missing.errors(), vec!["Email is required"]);

    let invalid = validator
        .evaluate(&InputRecord::new().with("email", "nope"), Some(&overrides))
        .unwrap();
    assert_eq!(invalid.errors(), vec![default_message(RuleId::Email)]);

    let without_override = validator
        .evaluate(&InputRecord::new().with("email", "nope"), None)
        .unwrap();
    assert_eq!(without_override.errors(), vec!["Use your work address"]);
}

#[test]
fn test_override_makes_optional_field_required() {
    let overrides = RuleTable::new().with("phone", FieldRule::required(RuleId::Phone));
    let record = InputRecord::new()
        .with("email", "user@example.com")
        .with("password", "MyPass123");

    let result = Validator::builtin()
        .evaluate(&record, Some(&overrides))
        .unwrap();
    assert_eq!(result.errors(), vec!["Phone is required"]);
}

#[test]
fn test_override_only_fields_follow_defaults() {
    let overrides = RuleTable::new()
        .with("card_number", FieldRule::required(RuleId::CreditCard))
        .with("password", FieldRule::optional(RuleId::Password))
        .with("profile", FieldRule::optional(RuleId::Json).with_message("Profile must be JSON"));

    let record = InputRecord::new()
        .with("profile", "{broken")
        .with("email", "oops");

    let result = Validator::builtin()
        .evaluate(&record, Some(&overrides))
        .unwrap();

    assert_eq!(
        result.errors(),
        vec![
            default_message(RuleId::Email),
            "Card Number is required",
            "Profile must be JSON",
        ]
    );
}

#[test]
fn test_unbound_rule_fails_before_any_field() {
    let registry = RuleRegistry::empty()
        .bind(RuleId::Email, is_valid_email)
        .bind(RuleId::Password, is_valid_password)
        .with_default_table(RuleRegistry::builtin().default_rule_table());

    let err = Validator::new(&registry)
        .evaluate(&complete_record(), None)
        .unwrap_err();
    assert_eq!(err, ConfigError::UnboundRule(RuleId::Phone));
}

#[test]
fn test_unknown_rule_from_config_fails_loudly() {
    let config = Config::parse(
        r#"
        [[fields]]
        name = "ssn"
        rule = "socialSecurity"
        required = true
        "#,
    )
    .unwrap();

    assert_eq!(
        config.rule_table().unwrap_err(),
        ConfigError::UnknownRule("socialSecurity".to_string())
    );
}

#[test]
fn test_config_overrides_evaluate() {
    let config = Config::parse(
        r#"
        [[fields]]
        name = "postalCode"
        rule = "postal_code"
        required = true
        label = "ZIP"
        "#,
    )
    .unwrap();
    let overrides = config.rule_table().unwrap();

    let record = InputRecord::new()
        .with("email", "user@example.com")
        .with("password", "MyPass123");
    let result = Validator::builtin()
        .evaluate(&record, Some(&overrides))
        .unwrap();

    assert_eq!(result.errors(), vec!["ZIP is required"]);
}

#[test]
fn test_evaluate_is_idempotent() {
    let record = InputRecord::new()
        .with("email", "not-an-email")
        .with("phone", "03-1234-5678")
        .with("password", "weak");
    let overrides = RuleTable::new().with("card", FieldRule::required(RuleId::CreditCard));
    let validator = Validator::builtin();

    let first = validator.evaluate(&record, Some(&overrides)).unwrap();
    let second = validator.evaluate(&record, Some(&overrides)).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_record_from_json_end_to_end() {
    let record = InputRecord::from_json(
        r#"{
            "email": "user@example.co.jp",
            "phone": null,
            "password": "MyPass123",
            "birthDate": "1990-05-20",
            "postalCode": 1000001
        }"#,
    )
    .unwrap();

    let result = Validator::builtin().evaluate(&record, None).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_shared_across_threads() {
    let validator = Validator::builtin();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let record = if i % 2 == 0 {
                    complete_record()
                } else {
                    InputRecord::new().with("email", "bad")
                };
                validator.evaluate(&record, None).unwrap().is_valid()
            })
        })
        .collect();

    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes, vec![true, false, true, false]);
}
