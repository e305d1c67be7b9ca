use gloo_file::{Blob, File as GlooFile};
use gloo_net::http::Request;
use shared::{interpret_response, PredictError, PredictionResult, Predictor, FILES_FIELD};
use wasm_bindgen::JsValue;
use web_sys::FormData;

/// Posts the whole selection to the batch prediction endpoint in one request.
pub struct HttpPredictor {
    endpoint: String,
}

impl HttpPredictor {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    fn build_form(files: &[GlooFile]) -> Result<FormData, JsValue> {
        let form_data = FormData::new()?;
        for file in files {
            let blob: &Blob = file;
            form_data.append_with_blob_and_filename(FILES_FIELD, blob.as_ref(), &file.name())?;
        }
        Ok(form_data)
    }
}

impl Predictor for HttpPredictor {
    type File = GlooFile;

    async fn predict(&self, files: &[GlooFile]) -> Result<Vec<PredictionResult>, PredictError> {
        let form_data = Self::build_form(files)
            .map_err(|e| PredictError::Transport(format!("Failed to build form data: {:?}", e)))?;

        let response = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        if !response.ok() {
            log::warn!("Inference service answered {} for {} file(s)", status, files.len());
        }

        interpret_response(status, &body)
    }
}

fn transport_error(err: gloo_net::Error) -> PredictError {
    PredictError::Transport(err.to_string())
}
