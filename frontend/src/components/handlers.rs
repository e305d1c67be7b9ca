use super::super::{Model, Msg};
use super::utils::{extract_image_files, show_alert, trigger_download};
use gloo_file::File as GlooFile;
use gloo_file::futures::read_as_data_url;
use shared::export::CSV_MIME_TYPE;
use shared::preview::join_previews;
use shared::{PredictError, PredictionResult, Predictor, Settlement};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_files_selected(model: &mut Model, ctx: &Context<Model>, files: Vec<GlooFile>) -> bool {
    let selection = model.state.select_files(files.clone());

    let link = ctx.link().clone();
    spawn_local(async move {
        let reads = files
            .into_iter()
            .map(|file| async move { read_as_data_url(&file).await });
        let outcome = join_previews(reads).await;
        link.send_message(Msg::PreviewsReady(selection, outcome));
    });

    true
}

pub fn handle_predict(model: &mut Model, ctx: &Context<Model>) -> bool {
    let batch = match model.state.begin_submit() {
        Ok(batch) => batch,
        Err(reason) => {
            log::debug!("Ignoring predict request: {}", reason);
            return false;
        }
    };

    let predictor = Rc::clone(&model.predictor);
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = predictor.predict(&batch).await;
        link.send_message(Msg::PredictionSettled(outcome));
    });

    true
}

pub fn handle_prediction_settled(
    model: &mut Model,
    outcome: Result<Vec<PredictionResult>, PredictError>,
) -> bool {
    if let Settlement::Failed { notice } = model.state.finish_submit(outcome) {
        show_alert(notice);
    }
    true
}

pub fn handle_download_csv(model: &mut Model) -> bool {
    let Some(csv) = model.state.export_csv() else {
        return false;
    };

    match trigger_download(&model.config.export_filename, CSV_MIME_TYPE, &csv) {
        Ok(()) => false,
        Err(e) => {
            log::error!("CSV download failed: {:?}", e);
            model.state.set_error("Could not start the CSV download.");
            true
        }
    }
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        let files = extract_image_files(&file_list);
        if !files.is_empty() {
            ctx.link().send_message(Msg::FilesSelected(files));
        }
    }

    true
}
