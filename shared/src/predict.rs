use crate::error::PredictError;
use crate::model::PredictionResult;

/// Multipart field name shared by every uploaded file.
pub const FILES_FIELD: &str = "files";

/// Sends one batch of files to the inference service.
// Futures run on the single-threaded browser executor, so no Send bound.
#[allow(async_fn_in_trait)]
pub trait Predictor {
    type File;

    async fn predict(&self, files: &[Self::File]) -> Result<Vec<PredictionResult>, PredictError>;
}

/// Maps a settled HTTP exchange onto the result array or an error.
///
/// Non-2xx bodies are kept verbatim in the error.
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<PredictionResult>, PredictError> {
    if !(200..300).contains(&status) {
        return Err(PredictError::HttpStatus {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str::<Vec<PredictionResult>>(body)
        .map_err(|e| PredictError::Decode(e.to_string()))
}
