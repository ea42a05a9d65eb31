//! Field-specific masking functions
//!
//! Callers pass values that already matched the corresponding pattern in
//! [`super::patterns`], so the pattern-shaped inputs here are ASCII.
//! Masked output never re-matches the pattern that produced it, which
//! makes a second redaction pass over already-masked data a no-op.

/// Keep the first two and last two digits: `9876543210` -> `98XXXXXX10`.
pub fn mask_phone(value: &str) -> String {
    format!("{}XXXXXX{}", &value[..2], &value[value.len() - 2..])
}

/// Keep the last four digits: `1234 5678 9012` -> `XXXX XXXX 9012`.
pub fn mask_aadhaar(value: &str) -> String {
    format!("XXXX XXXX {}", &value[value.len() - 4..])
}

/// Keep the series letter: `P1234567` -> `PXXXXXXX`.
pub fn mask_passport(value: &str) -> String {
    format!("{}XXXXXXX", &value[..1])
}

/// Mask the local part of a UPI handle or email address, keeping the
/// domain: `alice@okaxis` -> `al***@okaxis`. A value without `@` is
/// replaced wholesale with the marker.
pub fn mask_handle(value: &str, marker: &str) -> String {
    match value.split_once('@') {
        Some((local, domain)) => {
            let keep: String = local.chars().take(2).collect();
            format!("{keep}***@{domain}")
        }
        None => marker.to_string(),
    }
}

/// Reduce each name token to its initial: `Jane Doe` -> `JXXX DXXX`.
/// Tokens are rejoined with single spaces.
pub fn mask_name(value: &str) -> String {
    value
        .split_whitespace()
        .filter_map(|token| token.chars().next().map(|initial| format!("{initial}XXX")))
        .collect::<Vec<_>>()
        .join(" ")
}
