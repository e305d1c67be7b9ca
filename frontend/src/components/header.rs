use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-user-secret"></i> {" Deepfake Image Detector"}</h1>
            <p class="subtitle">{"Upload multiple images to detect AI-generated faces"}</p>
        </header>
    }
}
