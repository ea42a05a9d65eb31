//! Precompiled identifier patterns
//!
//! Every matcher is a full-string anchored pattern except [`PIN_CODE`],
//! which searches anywhere inside address text. Patterns are compiled once
//! on first use and shared immutably across threads.

use once_cell::sync::Lazy;
use regex::Regex;

/// Indian 10-digit mobile number, first digit 6-9
pub static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("valid regex"));

/// 12-digit Aadhaar number grouped 4-4-4, spaces between groups optional
pub static AADHAAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}\s?\d{4}\s?\d{4}$").expect("valid regex"));

/// Passport number: series letter (Q, X and Z are not issued) + 7 digits
pub static PASSPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-PR-WYa-pr-wy]\d{7}$").expect("valid regex"));

/// UPI handle: `user@bank`, no dot required in the bank part
pub static UPI: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.\-]{2,}@\w{2,}$").expect("valid regex"));

/// Email address with a dotted TLD of at least two letters
pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.\-]+@[A-Za-z0-9\-]+\.[A-Za-z]{2,}$").expect("valid regex"));

/// Bare 6-digit postal code, searched (not full-matched) in address text
pub static PIN_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{6}\b").expect("valid regex"));

/// Dotted-quad IPv4 address. Octet ranges are deliberately not validated,
/// so values like `999.999.999.999` match.
pub static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").expect("valid regex"));
