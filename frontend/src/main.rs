mod api;
mod components;

use api::HttpPredictor;
use components::{handlers, header, preview_area, results, upload_section, utils};
use gloo_file::File as GlooFile;
use shared::{ClientConfig, DetectorState, PredictError, PredictionResult, PreviewReadError, SelectionId};
use std::rc::Rc;
use web_sys::DragEvent;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // File operations
    FilesSelected(Vec<GlooFile>),
    PreviewsReady(SelectionId, Result<Vec<String>, PreviewReadError>),

    // Prediction
    Predict,
    PredictionSettled(Result<Vec<PredictionResult>, PredictError>),

    // Export
    DownloadCsv,

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
}

// Main component
pub struct Model {
    state: DetectorState<GlooFile>,
    config: ClientConfig,
    predictor: Rc<HttpPredictor>,
    is_dragging: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ClientConfig::load().unwrap_or_else(|e| {
            log::error!("Invalid detector config, falling back to defaults: {}", e);
            ClientConfig::default()
        });
        log::info!("Predictions will be sent to {}", config.predict_url());

        Self {
            state: DetectorState::new(),
            predictor: Rc::new(HttpPredictor::new(config.predict_url())),
            config,
            is_dragging: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FilesSelected(files) => handlers::handle_files_selected(self, ctx, files),
            Msg::PreviewsReady(selection, outcome) => {
                self.state.apply_previews(selection, outcome)
            }

            // Prediction
            Msg::Predict => handlers::handle_predict(self, ctx),
            Msg::PredictionSettled(outcome) => handlers::handle_prediction_settled(self, outcome),

            // Export
            Msg::DownloadCsv => handlers::handle_download_csv(self),

            // UI states
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <main class="main-content">
                { upload_section::render_upload_section(self, ctx) }
                { preview_area::render_preview_area(self, ctx) }
                { utils::render_error_message(self) }
                { results::render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Deepfake Image Detector | Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
