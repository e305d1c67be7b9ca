use serde::{Deserialize, Deserializer, Serialize};

/// Label the inference service uses for images it considers authentic.
pub const REAL_LABEL: &str = "Real";

/// One entry of the `/multi_predict` response array.
///
/// The service decides both the order and the filenames. Entries it failed to
/// process come back with label `"Error"`, no confidence and an `error` text.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PredictionResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub label: String,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Badge variant for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Authentic,
    Flagged,
}

impl Verdict {
    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::Authentic => "not-ai",
            Verdict::Flagged => "ai-detected",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Verdict::Authentic => "fa-solid fa-circle-check",
            Verdict::Flagged => "fa-solid fa-triangle-exclamation",
        }
    }
}

impl PredictionResult {
    pub fn verdict(&self) -> Verdict {
        if self.label == REAL_LABEL {
            Verdict::Authentic
        } else {
            Verdict::Flagged
        }
    }
}

// A confidence that is not a JSON number is treated as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

// Null becomes an empty string; other scalars are kept as their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    })
}
