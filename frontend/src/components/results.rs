use super::super::Model;
use shared::display::confidence_label;
use shared::PredictionResult;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let results = model.state.results();
    if results.is_empty() {
        return html! {};
    }

    html! {
        <div class="results-list">
            { for results.iter().enumerate().map(|(idx, result)| render_result_card(idx, result)) }
        </div>
    }
}

fn render_result_card(idx: usize, result: &PredictionResult) -> Html {
    let verdict = result.verdict();

    html! {
        <div class={classes!("results-container", verdict.css_class())} key={idx}>
            <div class="result-header">
                <h2 title={format!("Analysis results for: {}", result.filename)}>
                    { result.filename.clone() }
                </h2>
                <div class={classes!("result-badge", verdict.css_class())}>
                    <i class={verdict.icon_class()}></i>
                    { format!(" {}", result.label) }
                </div>
                {
                    match confidence_label(result) {
                        Some(percentage) => html! {
                            <div class="confidence-meter">
                                <div class="meter-label">{"Confidence:"}</div>
                                <div class="meter-value"><b>{ percentage }</b></div>
                            </div>
                        },
                        None => html! {},
                    }
                }
                {
                    match &result.error {
                        Some(error) => html! { <p class="result-error">{ error.clone() }</p> },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}
