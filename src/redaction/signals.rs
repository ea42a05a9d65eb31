//! Per-record detection signals
//!
//! A [`SignalSet`] is computed once per record, lives on the stack for the
//! duration of the decision and masking step, and is never persisted.

use super::patterns;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Literal substrings that mark address text as a physical address
const ADDRESS_KEYWORDS: [&str; 5] = ["road", "street", "lane", "nagar", "block"];

/// Detection flags for a single record.
///
/// One named boolean per detection rule. A fixed struct rather than a
/// dynamic map gives compile-time field-name safety for the decision
/// policy below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    /// `phone` matched the 10-digit mobile pattern
    pub phone: bool,
    /// `aadhar` matched the 12-digit Aadhaar pattern
    pub aadhaar: bool,
    /// `passport` matched the passport pattern
    pub passport: bool,
    /// `upi_id` matched the UPI handle pattern
    pub upi: bool,
    /// `email` matched the email pattern
    pub email: bool,
    /// `name` contains at least two whitespace-separated tokens
    pub name_full: bool,
    /// `address` contains a 6-digit PIN or an address keyword
    pub address: bool,
    /// `ip_address` matched IPv4, or `device_id` is present and non-empty
    pub device_ip: bool,
}

impl SignalSet {
    /// Compute all signals for a record mapping.
    ///
    /// Absent fields and pattern misses leave the corresponding flag
    /// false; this never fails.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let mut signals = Self::default();

        if let Some(text) = field_text(record, "phone") {
            signals.phone = patterns::PHONE.is_match(&text);
        }
        if let Some(text) = field_text(record, "aadhar") {
            signals.aadhaar = patterns::AADHAAR.is_match(&text);
        }
        if let Some(text) = field_text(record, "passport") {
            signals.passport = patterns::PASSPORT.is_match(&text);
        }
        if let Some(text) = field_text(record, "upi_id") {
            signals.upi = patterns::UPI.is_match(&text);
        }
        if let Some(text) = field_text(record, "email") {
            signals.email = patterns::EMAIL.is_match(&text);
        }
        if let Some(text) = field_text(record, "name") {
            signals.name_full = text.split_whitespace().count() >= 2;
        }
        if let Some(text) = field_text(record, "address") {
            let addr = text.to_lowercase();
            signals.address = patterns::PIN_CODE.is_match(&addr)
                || ADDRESS_KEYWORDS.iter().any(|word| addr.contains(word));
        }

        let ip_matches = field_text(record, "ip_address")
            .map_or(false, |text| patterns::IPV4.is_match(&text));
        let device_present = record.get("device_id").map_or(false, is_truthy);
        signals.device_ip = ip_matches || device_present;

        signals
    }

    /// Any one of the four individually identifying fields.
    pub fn standalone(&self) -> bool {
        self.phone || self.aadhaar || self.passport || self.upi
    }

    /// A device or IP identifier corroborated by at least one other
    /// quasi-identifier.
    pub fn device_tied(&self) -> bool {
        self.device_ip && (self.email || self.name_full || self.phone)
    }

    /// Two or more of the weak signals, or a corroborated device identifier.
    pub fn combinatorial(&self) -> bool {
        let weak = [self.email, self.name_full, self.address]
            .iter()
            .filter(|flag| **flag)
            .count();
        weak >= 2 || self.device_tied()
    }

    /// Final verdict for the record.
    pub fn is_pii(&self) -> bool {
        self.standalone() || self.combinatorial()
    }

    /// True if any flag is set.
    pub fn any(&self) -> bool {
        self.phone
            || self.aadhaar
            || self.passport
            || self.upi
            || self.email
            || self.name_full
            || self.address
            || self.device_ip
    }
}

/// String form of a field value, for pattern matching.
///
/// Strings are used as-is, numbers and booleans are coerced to their text
/// representation, and `null` is treated as an absent field.
pub(crate) fn field_text(record: &Map<String, Value>, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Truthiness of a JSON value, used for the bare `device_id` presence check.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn test_empty_record_has_no_signals() {
        let signals = SignalSet::from_record(&Map::new());
        assert!(!signals.any());
        assert!(!signals.is_pii());
    }

    #[test]
    fn test_standalone_signals() {
        let signals = SignalSet::from_record(&record(json!({"phone": "9876543210"})));
        assert!(signals.phone);
        assert!(signals.standalone());
        assert!(signals.is_pii());
    }

    #[test]
    fn test_name_full_is_a_token_count_heuristic() {
        let one = SignalSet::from_record(&record(json!({"name": "Madonna"})));
        assert!(!one.name_full);

        let two = SignalSet::from_record(&record(json!({"name": "  Jane   Doe  "})));
        assert!(two.name_full);
    }

    #[test]
    fn test_address_keyword_and_pin() {
        let keyword = SignalSet::from_record(&record(json!({"address": "14 MG ROAD"})));
        assert!(keyword.address);

        let pin = SignalSet::from_record(&record(json!({"address": "Sector 9 - 560001"})));
        assert!(pin.address);

        let neither = SignalSet::from_record(&record(json!({"address": "Lakeside Apartments"})));
        assert!(!neither.address);
    }

    #[test]
    fn test_device_ip_signal() {
        let ip = SignalSet::from_record(&record(json!({"ip_address": "10.0.0.1"})));
        assert!(ip.device_ip);

        let device = SignalSet::from_record(&record(json!({"device_id": "dev123"})));
        assert!(device.device_ip);

        let empty_device = SignalSet::from_record(&record(json!({"device_id": ""})));
        assert!(!empty_device.device_ip);

        let null_device = SignalSet::from_record(&record(json!({"device_id": null})));
        assert!(!null_device.device_ip);
    }

    #[test]
    fn test_device_alone_is_not_pii() {
        let signals = SignalSet::from_record(&record(json!({"device_id": "dev123"})));
        assert!(signals.device_ip);
        assert!(!signals.device_tied());
        assert!(!signals.is_pii());
    }

    #[test]
    fn test_two_weak_signals_cross_the_threshold() {
        let one = SignalSet::from_record(&record(json!({"email": "ab@example.com"})));
        assert!(!one.is_pii());

        let two = SignalSet::from_record(&record(json!({
            "email": "ab@example.com",
            "name": "Jane Doe"
        })));
        assert!(two.combinatorial());
        assert!(two.is_pii());
    }

    #[test]
    fn test_numeric_values_are_coerced_before_matching() {
        let signals = SignalSet::from_record(&record(json!({"phone": 9876543210u64})));
        assert!(signals.phone);
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("dev")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([1])));
    }
}
