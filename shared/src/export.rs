//! CSV serialization of prediction results.

use crate::model::PredictionResult;
use std::borrow::Cow;

pub const CSV_HEADER: [&str; 3] = ["Filename", "Label", "Confidence"];
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Header plus one row per result, joined by `\n` without a trailing newline.
///
/// Confidence is written as the raw fraction. Fields containing a comma,
/// quote or line break are quoted RFC 4180 style; everything else is written
/// verbatim.
pub fn results_to_csv(results: &[PredictionResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for result in results {
        let confidence = result
            .confidence
            .map(|c| c.to_string())
            .unwrap_or_default();
        let row = [
            escape_field(&result.filename),
            escape_field(&result.label),
            Cow::Owned(confidence),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
