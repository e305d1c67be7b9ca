use crate::model::PredictionResult;

/// Formats a confidence fraction as a percentage with one decimal place.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Percentage line for a result, `None` when the service sent no confidence.
pub fn confidence_label(result: &PredictionResult) -> Option<String> {
    result.confidence.map(format_confidence)
}

/// Alt text for the preview at `index`. Previews can outlive the selection
/// they were read from, so no file name is attached.
pub fn preview_alt(index: usize) -> String {
    format!("Preview {}", index)
}
