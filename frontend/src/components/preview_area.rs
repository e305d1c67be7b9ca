use super::super::{Model, Msg};
use super::utils::debounce;
use shared::display::preview_alt;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div id="preview-container">
            { render_preview_grid(model) }
            { render_action_buttons(model, ctx) }
        </div>
    }
}

fn render_preview_grid(model: &Model) -> Html {
    let previews = model.state.previews();
    if previews.is_empty() {
        return html! {};
    }

    html! {
        <div id="image-previews">
            { for previews.iter().enumerate().map(|(idx, url)| {
                html! {
                    <div class="preview-item" key={idx}>
                        <img src={url.clone()} alt={preview_alt(idx)} />
                    </div>
                }
            })}
        </div>
    }
}

fn render_action_buttons(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let has_results = !model.state.results().is_empty();

    html! {
        <div class="button-container">
            <button
                class="analyze-btn"
                style="background-color: var(--primary-color);"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.send_message(Msg::Predict)
                })}
                disabled={!model.state.can_submit()}
            >
                { render_predict_button_content(model) }
            </button>
            {
                if has_results {
                    html! {
                        <button
                            class="analyze-btn"
                            style="background-color: var(--success-color);"
                            onclick={link.callback(|_| Msg::DownloadCsv)}
                        >
                            <i class="fa-solid fa-file-csv"></i>{" Download CSV"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_predict_button_content(model: &Model) -> Html {
    if model.state.is_loading() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        let count = model.state.files().len();
        let label = match count {
            0 => " Predict".to_string(),
            1 => " Predict (1 image)".to_string(),
            n => format!(" Predict ({} images)", n),
        };
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{ label }</> }
    }
}
