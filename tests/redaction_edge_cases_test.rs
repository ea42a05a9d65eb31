//! Edge case tests for detection patterns and coercion rules

use kavach::redaction::{RecordRedactor, RedactionConfig};
use serde_json::{json, Map, Value};

fn redactor() -> RecordRedactor {
    RecordRedactor::new(RedactionConfig::default()).unwrap()
}

fn record(value: Value) -> Map<String, Value> {
    value.as_object().expect("object literal").clone()
}

#[test]
fn test_phone_prefix_and_length_bounds() {
    for bad in ["5876543210", "987654321", "98765432100", "987-654-3210"] {
        let result = redactor()
            .redact("rec-1", &record(json!({ "phone": bad })))
            .unwrap();
        assert!(!result.is_pii, "{bad} should not match the phone rule");
        assert_eq!(result.data["phone"], bad);
    }
}

#[test]
fn test_aadhaar_spacing_variants() {
    for good in ["1234 5678 9012", "123456789012", "1234 56789012"] {
        let result = redactor()
            .redact("rec-1", &record(json!({ "aadhar": good })))
            .unwrap();
        assert!(result.is_pii, "{good} should match the Aadhaar rule");
        assert_eq!(result.data["aadhar"], "XXXX XXXX 9012");
    }

    // Separators only between the 4-digit groups
    for bad in ["1234-5678-9012", "123456789 012"] {
        let result = redactor()
            .redact("rec-1", &record(json!({ "aadhar": bad })))
            .unwrap();
        assert!(!result.is_pii, "{bad} should not match the Aadhaar rule");
    }
}

#[test]
fn test_passport_series_letters() {
    for bad in ["Q1234567", "X1234567", "Z1234567"] {
        let result = redactor()
            .redact("rec-1", &record(json!({ "passport": bad })))
            .unwrap();
        assert!(!result.is_pii, "{bad} uses a series letter that is not issued");
    }

    let result = redactor()
        .redact("rec-1", &record(json!({"passport": "y7654321"})))
        .unwrap();
    assert!(result.is_pii);
    assert_eq!(result.data["passport"], "yXXXXXXX");
}

#[test]
fn test_upi_and_email_dispatch_by_field_name() {
    // A dotted domain satisfies the email rule but not the UPI rule, so
    // the same value behaves differently depending on the field it is in.
    let as_upi = redactor()
        .redact("rec-1", &record(json!({"upi_id": "ab@example.com"})))
        .unwrap();
    assert!(!as_upi.signals.upi);
    assert!(!as_upi.is_pii);

    let as_email = redactor()
        .redact("rec-1", &record(json!({"email": "ab@example.com"})))
        .unwrap();
    assert!(as_email.signals.email);
}

#[test]
fn test_ipv4_matcher_is_permissive() {
    let input = record(json!({
        "ip_address": "999.999.999.999",
        "name": "Jane Doe"
    }));
    let result = redactor().redact("rec-1", &input).unwrap();

    // No octet range validation: the malformed address still counts
    assert!(result.signals.device_ip);
    assert!(result.is_pii);
    assert_eq!(result.data["ip_address"], "[REDACTED_PII]");
}

#[test]
fn test_numeric_phone_is_coerced_and_masked() {
    let input = record(json!({"phone": 9876543210u64}));
    let result = redactor().redact("rec-1", &input).unwrap();

    assert!(result.is_pii);
    assert_eq!(result.data["phone"], "98XXXXXX10");
}

#[test]
fn test_null_fields_are_absent_signals() {
    let input = record(json!({
        "phone": null,
        "email": null,
        "device_id": null
    }));
    let result = redactor().redact("rec-1", &input).unwrap();

    assert!(!result.is_pii);
    assert_eq!(result.data, input);
}

#[test]
fn test_falsy_device_id_does_not_fire() {
    for falsy in [json!(""), json!(0), json!(false)] {
        let input = record(json!({
            "device_id": falsy,
            "name": "Jane Doe"
        }));
        let result = redactor().redact("rec-1", &input).unwrap();
        assert!(!result.signals.device_ip);
        assert!(!result.is_pii);
    }
}

#[test]
fn test_single_token_name_is_not_a_full_name() {
    let input = record(json!({
        "name": "Madonna",
        "email": "m@example.com"
    }));
    let result = redactor().redact("rec-1", &input).unwrap();

    // Only one weak signal fires
    assert!(!result.signals.name_full);
    assert!(!result.is_pii);
    assert_eq!(result.data["name"], "Madonna");
}

#[test]
fn test_address_keywords_are_case_insensitive() {
    let input = record(json!({
        "address": "14 MG ROAD",
        "name": "Jane Doe"
    }));
    let result = redactor().redact("rec-1", &input).unwrap();

    assert!(result.signals.address);
    assert!(result.is_pii);
    assert_eq!(result.data["address"], "[REDACTED_PII]");
}

#[test]
fn test_address_without_keyword_or_pin() {
    let input = record(json!({
        "address": "Lakeside Apartments",
        "name": "Jane Doe"
    }));
    let result = redactor().redact("rec-1", &input).unwrap();

    assert!(!result.signals.address);
    // Full name alone is one weak signal
    assert!(!result.is_pii);
}

#[test]
fn test_unicode_name_masking() {
    let input = record(json!({
        "name": "Ångström Ωmega",
        "email": "a@example.com"
    }));
    let result = redactor().redact("rec-1", &input).unwrap();

    assert!(result.is_pii);
    assert_eq!(result.data["name"], "ÅXXX ΩXXX");
}

#[test]
fn test_email_local_shorter_than_keep_length() {
    let input = record(json!({
        "email": "a@example.com",
        "name": "Jane Doe"
    }));
    let result = redactor().redact("rec-1", &input).unwrap();

    assert!(result.is_pii);
    assert_eq!(result.data["email"], "a***@example.com");
}
