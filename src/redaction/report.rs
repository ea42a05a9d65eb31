//! Scan reporting
//!
//! Aggregated detection statistics for `scan` and `redact --dry-run`,
//! with console and JSON output formats.

use super::models::RedactedRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of sample detections kept in a report
const MAX_SAMPLES: usize = 20;
/// Maximum samples taken from a single record
const MAX_SAMPLES_PER_RECORD: usize = 3;
/// Truncation length for original values shown in samples
const SAMPLE_VALUE_LEN: usize = 50;

/// Scan report with PII detection statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Total records analyzed
    pub total_records: usize,

    /// Records classified as PII-bearing
    pub records_with_pii: usize,

    /// Records classified as clean
    pub records_without_pii: usize,

    /// Rows whose JSON payload failed to parse (processed as empty records)
    pub parse_failures: usize,

    /// Total masked fields across all records
    pub total_detections: usize,

    /// Masked-field counts by field label
    pub detections_by_field: HashMap<String, usize>,

    /// Sample detections (original values truncated)
    pub samples: Vec<DetectionSample>,

    /// Warnings raised while processing
    pub warnings: Vec<String>,
}

/// Sample detection showing before/after
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSample {
    /// Record the detection came from
    pub record_id: String,

    /// Field label
    pub field: String,

    /// Original value, truncated for privacy
    pub original: String,

    /// Masked replacement
    pub masked: String,
}

impl ScanReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add results from a redacted record
    pub fn add_record(&mut self, record: &RedactedRecord) {
        self.total_records += 1;

        if record.is_pii {
            self.records_with_pii += 1;
        } else {
            self.records_without_pii += 1;
        }

        self.total_detections += record.detections.len();

        for detection in &record.detections {
            *self
                .detections_by_field
                .entry(detection.field.label().to_string())
                .or_insert(0) += 1;
        }

        for detection in record.detections.iter().take(MAX_SAMPLES_PER_RECORD) {
            if self.samples.len() >= MAX_SAMPLES {
                break;
            }
            self.samples.push(DetectionSample {
                record_id: record.record_id.clone(),
                field: detection.field.label().to_string(),
                original: truncate(&detection.original_value, SAMPLE_VALUE_LEN),
                masked: detection.masked_value.clone(),
            });
        }
    }

    /// Record a row whose JSON payload could not be parsed
    pub fn record_parse_failure(&mut self, record_id: &str) {
        self.parse_failures += 1;
        self.add_warning(format!(
            "Record '{record_id}': malformed JSON payload, processed as empty record"
        ));
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                       PII SCAN REPORT                         \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Records Analyzed:        {}\n",
            self.total_records
        ));
        output.push_str(&format!(
            "  Records with PII:        {}\n",
            self.records_with_pii
        ));
        output.push_str(&format!(
            "  Records without PII:     {}\n",
            self.records_without_pii
        ));
        output.push_str(&format!(
            "  Masked Fields:           {}\n",
            self.total_detections
        ));
        if self.parse_failures > 0 {
            output.push_str(&format!(
                "  Malformed JSON Payloads: {}\n",
                self.parse_failures
            ));
        }
        output.push('\n');

        if !self.detections_by_field.is_empty() {
            output.push_str("🔍 DETECTIONS BY FIELD\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut fields: Vec<_> = self.detections_by_field.iter().collect();
            fields.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (field, count) in fields {
                output.push_str(&format!("  {field:<30} {count:>5}\n"));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE REDACTIONS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            for (i, sample) in self.samples.iter().take(10).enumerate() {
                output.push_str(&format!("\n  Sample #{}\n", i + 1));
                output.push_str(&format!("    Record:  {}\n", sample.record_id));
                output.push_str(&format!("    Field:   {}\n", sample.field));
                output.push_str(&format!("    Before:  \"{}\"\n", sample.original));
                output.push_str(&format!("    After:   \"{}\"\n", sample.masked));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Truncate a value for display, appending an ellipsis when cut.
fn truncate(value: &str, max_len: usize) -> String {
    if value.chars().count() > max_len {
        let cut: String = value.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::models::{Detection, PiiField};
    use crate::redaction::signals::SignalSet;
    use chrono::Utc;
    use serde_json::Map;

    fn redacted(record_id: &str, is_pii: bool, detections: Vec<Detection>) -> RedactedRecord {
        RedactedRecord {
            record_id: record_id.to_string(),
            data: Map::new(),
            is_pii,
            signals: SignalSet::default(),
            detections,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_report_creation() {
        let report = ScanReport::new();
        assert_eq!(report.total_records, 0);
        assert!(report.detections_by_field.is_empty());
        assert!(report.samples.is_empty());
    }

    #[test]
    fn test_add_record_without_pii() {
        let mut report = ScanReport::new();
        report.add_record(&redacted("rec-1", false, vec![]));

        assert_eq!(report.total_records, 1);
        assert_eq!(report.records_without_pii, 1);
        assert_eq!(report.records_with_pii, 0);
        assert_eq!(report.total_detections, 0);
    }

    #[test]
    fn test_add_record_with_pii() {
        let mut report = ScanReport::new();
        report.add_record(&redacted(
            "rec-1",
            true,
            vec![Detection::new(
                PiiField::Phone,
                "9876543210".to_string(),
                "98XXXXXX10".to_string(),
            )],
        ));

        assert_eq!(report.records_with_pii, 1);
        assert_eq!(report.total_detections, 1);
        assert_eq!(report.detections_by_field.get("PHONE"), Some(&1));
        assert_eq!(report.samples.len(), 1);
    }

    #[test]
    fn test_sample_cap() {
        let mut report = ScanReport::new();
        for i in 0..30 {
            report.add_record(&redacted(
                &format!("rec-{i}"),
                true,
                vec![Detection::new(
                    PiiField::Phone,
                    "9876543210".to_string(),
                    "98XXXXXX10".to_string(),
                )],
            ));
        }
        assert_eq!(report.samples.len(), 20);
        assert_eq!(report.total_detections, 30);
    }

    #[test]
    fn test_parse_failure_adds_warning() {
        let mut report = ScanReport::new();
        report.record_parse_failure("rec-9");

        assert_eq!(report.parse_failures, 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("rec-9"));
    }

    #[test]
    fn test_format_console() {
        let mut report = ScanReport::new();
        report.add_record(&redacted(
            "rec-1",
            true,
            vec![Detection::new(
                PiiField::Email,
                "ab@example.com".to_string(),
                "ab***@example.com".to_string(),
            )],
        ));

        let output = report.format_console();
        assert!(output.contains("PII SCAN REPORT"));
        assert!(output.contains("Records Analyzed:        1"));
        assert!(output.contains("EMAIL"));
    }

    #[test]
    fn test_truncate_long_values() {
        let long = "x".repeat(80);
        let cut = truncate(&long, 50);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 50);
    }
}
