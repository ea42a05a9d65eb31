//! CSV/JSON processing pipeline
//!
//! Thin boundary around the redaction engine: reads rows carrying a
//! record identifier and a JSON-encoded payload, invokes the engine per
//! row, and writes one output row per input row. No detection logic
//! lives here.

use crate::domain::{KavachError, Result};
use crate::redaction::{RecordRedactor, ScanReport};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Output column headers
const OUTPUT_HEADERS: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// Record identifier column
const ID_COLUMN: &str = "record_id";

/// Accepted case variants of the JSON payload column, in lookup order
const DATA_COLUMNS: [&str; 2] = ["Data_json", "data_json"];

/// Summary of a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Rows read from the input file
    pub records_read: usize,

    /// Records classified as PII-bearing
    pub records_flagged: usize,

    /// Rows whose JSON payload failed to parse
    pub parse_failures: usize,

    /// Wall-clock processing time in milliseconds
    pub duration_ms: u64,

    /// Output file, when one was written
    pub output_path: Option<PathBuf>,
}

/// CSV-to-CSV redaction pipeline
pub struct Pipeline<'a> {
    redactor: &'a RecordRedactor,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline over a redactor
    pub fn new(redactor: &'a RecordRedactor) -> Self {
        Self { redactor }
    }

    /// Process an input file, optionally writing redacted output.
    ///
    /// Each input row contributes exactly one output row with columns
    /// `record_id`, `redacted_data_json`, `is_pii`. A missing or
    /// malformed JSON payload is processed as an empty record, which the
    /// engine classifies as non-PII; the row is still written.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the output cannot
    /// be written, or the audit log (when enabled) cannot be appended.
    pub fn run(&self, input: &Path, output: Option<&Path>) -> Result<(RunSummary, ScanReport)> {
        let start = Instant::now();

        let mut reader = csv::Reader::from_path(input)?;
        let headers = reader.headers()?.clone();
        let id_index = headers.iter().position(|header| header == ID_COLUMN);
        let data_indices: Vec<usize> = DATA_COLUMNS
            .iter()
            .filter_map(|column| headers.iter().position(|header| header == *column))
            .collect();

        if data_indices.is_empty() {
            tracing::warn!(
                input = %input.display(),
                "No JSON payload column found, all records will be empty"
            );
        }

        let mut writer = match output {
            Some(path) => {
                let mut writer = csv::Writer::from_path(path)?;
                writer.write_record(OUTPUT_HEADERS)?;
                Some(writer)
            }
            None => None,
        };

        let mut report = ScanReport::new();
        let mut records_read = 0;
        let mut records_flagged = 0;

        for row in reader.records() {
            let row = row?;
            records_read += 1;

            let record_id = id_index
                .and_then(|index| row.get(index))
                .unwrap_or_default()
                .to_string();

            // First non-empty payload among the accepted column variants
            let raw_json = data_indices
                .iter()
                .filter_map(|index| row.get(*index))
                .find(|payload| !payload.is_empty())
                .unwrap_or("{}");

            let record = parse_payload(&record_id, raw_json, &mut report);

            let redacted = self
                .redactor
                .redact(&record_id, &record)
                .map_err(|e| KavachError::Audit(format!("{e:#}")))?;

            if redacted.is_pii {
                records_flagged += 1;
            }

            if let Some(ref mut writer) = writer {
                let json = serde_json::to_string(&redacted.data)?;
                let verdict = if redacted.is_pii { "true" } else { "false" };
                writer.write_record([record_id.as_str(), json.as_str(), verdict])?;
            }

            report.add_record(&redacted);
        }

        if let Some(ref mut writer) = writer {
            writer.flush()?;
        }

        let summary = RunSummary {
            records_read,
            records_flagged,
            parse_failures: report.parse_failures,
            duration_ms: start.elapsed().as_millis() as u64,
            output_path: output.map(Path::to_path_buf),
        };

        tracing::info!(
            records_read = summary.records_read,
            records_flagged = summary.records_flagged,
            parse_failures = summary.parse_failures,
            duration_ms = summary.duration_ms,
            "Pipeline run completed"
        );

        Ok((summary, report))
    }
}

/// Parse a JSON payload into a record mapping.
///
/// Anything that is not a JSON object (parse errors included) is
/// substituted with an empty record, which the engine classifies as
/// non-PII.
fn parse_payload(record_id: &str, raw_json: &str, report: &mut ScanReport) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw_json) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(
                record_id,
                payload_type = type_name(&other),
                "JSON payload is not an object, substituting empty record"
            );
            report.record_parse_failure(record_id);
            Map::new()
        }
        Err(error) => {
            tracing::warn!(
                record_id,
                error = %error,
                "Malformed JSON payload, substituting empty record"
            );
            report.record_parse_failure(record_id);
            Map::new()
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
