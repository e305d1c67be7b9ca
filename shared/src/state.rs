//! Upload, preview, predict and export workflow as an explicit state machine.
//!
//! The UI owns one [`DetectorState`] and applies transitions to it from its
//! event handlers. Async work (file reads, the HTTP call) happens outside and
//! reports back through [`DetectorState::apply_previews`] and
//! [`DetectorState::finish_submit`].

use crate::error::{PredictError, PreviewReadError, SubmitRejected};
use crate::export::results_to_csv;
use crate::model::PredictionResult;
use log::{debug, error, info};

/// Message shown to the user when a prediction request fails.
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed. See console for details.";

/// Message shown to the user when previews could not be generated.
pub const PREVIEW_FAILED_MESSAGE: &str = "Could not read one or more images for preview.";

/// Identifies the selection a batch of previews was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionId(u64);

/// How a submitted request settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Completed { count: usize },
    Failed { notice: &'static str },
    /// The selection changed while the request was in flight; the outcome
    /// was dropped.
    Superseded,
}

pub struct DetectorState<F> {
    files: Vec<F>,
    previews: Vec<String>,
    results: Vec<PredictionResult>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    submitted_generation: u64,
}

impl<F> Default for DetectorState<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            previews: Vec::new(),
            results: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
            submitted_generation: 0,
        }
    }
}

impl<F> DetectorState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn previews(&self) -> &[String] {
        &self.previews
    }

    pub fn results(&self) -> &[PredictionResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Whether the predict action is currently available.
    pub fn can_submit(&self) -> bool {
        !self.files.is_empty() && !self.loading
    }

    /// Replaces the selection wholesale and drops any previous results.
    ///
    /// Previews are kept until [`apply_previews`](Self::apply_previews)
    /// delivers the set for the returned selection.
    pub fn select_files(&mut self, files: Vec<F>) -> SelectionId {
        self.generation += 1;
        self.files = files;
        self.results.clear();
        self.error = None;
        debug!(
            "Selection {} holds {} file(s)",
            self.generation,
            self.files.len()
        );
        SelectionId(self.generation)
    }

    /// Applies the outcome of the preview reads for `selection`.
    ///
    /// Returns `false` when the outcome belongs to a superseded selection and
    /// was ignored. A failed batch leaves the previous previews in place.
    pub fn apply_previews(
        &mut self,
        selection: SelectionId,
        outcome: Result<Vec<String>, PreviewReadError>,
    ) -> bool {
        if selection.0 != self.generation {
            debug!(
                "Discarding previews of selection {} (current is {})",
                selection.0, self.generation
            );
            return false;
        }

        match outcome {
            Ok(previews) => self.previews = previews,
            Err(e) => {
                error!("Preview generation failed: {}", e);
                self.error = Some(PREVIEW_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Marks a request as in flight and hands out the files to send.
    pub fn begin_submit(&mut self) -> Result<Vec<F>, SubmitRejected>
    where
        F: Clone,
    {
        if self.files.is_empty() {
            return Err(SubmitRejected::EmptySelection);
        }
        if self.loading {
            return Err(SubmitRejected::InFlight);
        }

        self.loading = true;
        self.submitted_generation = self.generation;
        self.error = None;
        info!("Submitting {} file(s) for prediction", self.files.len());
        Ok(self.files.clone())
    }

    /// Settles the in-flight request. The loading flag is cleared for every
    /// outcome; a failure keeps the previous results. Outcomes for a
    /// selection that has since been replaced are ignored.
    pub fn finish_submit(
        &mut self,
        outcome: Result<Vec<PredictionResult>, PredictError>,
    ) -> Settlement {
        self.loading = false;

        if self.submitted_generation != self.generation {
            match &outcome {
                Ok(results) => debug!(
                    "Discarding {} prediction(s) for selection {} (current is {})",
                    results.len(),
                    self.submitted_generation,
                    self.generation
                ),
                Err(e) => error!(
                    "Prediction for replaced selection {} failed: {}",
                    self.submitted_generation, e
                ),
            }
            return Settlement::Superseded;
        }

        match outcome {
            Ok(results) => {
                let count = results.len();
                info!("Received {} prediction(s)", count);
                self.results = results;
                self.error = None;
                Settlement::Completed { count }
            }
            Err(e) => {
                error!("Prediction failed: {}", e);
                self.error = Some(PREDICTION_FAILED_MESSAGE.to_string());
                Settlement::Failed {
                    notice: PREDICTION_FAILED_MESSAGE,
                }
            }
        }
    }

    /// CSV for the current results, `None` when there is nothing to export.
    pub fn export_csv(&self) -> Option<String> {
        if self.results.is_empty() {
            None
        } else {
            Some(results_to_csv(&self.results))
        }
    }
}
