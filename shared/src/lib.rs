//! Core of the deepfake detector client: data model, workflow state machine,
//! response handling, preview join and CSV export. Nothing here touches the
//! browser, so it runs and tests natively.

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod model;
pub mod predict;
pub mod preview;
pub mod state;

pub use config::ClientConfig;
pub use error::{ConfigError, PredictError, PreviewReadError, SubmitRejected};
pub use model::{PredictionResult, Verdict};
pub use predict::{interpret_response, Predictor, FILES_FIELD};
pub use state::{DetectorState, SelectionId, Settlement};
