use super::super::Model;
use super::item_card::render_item_card;
use super::recommendation::render_recommendation;
use shared::ResultView;
use shared::view::ReadyView;
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(result) = model.session.result() else {
        return html! {};
    };

    let body = match ResultView::build(result) {
        ResultView::Failed => html! {
            <div class="error-message">
                {"오류가 발생했습니다. 다시 시도해주세요."}
            </div>
        },
        ResultView::Ready(view) => render_ready(model, ctx, &view),
    };

    html! {
        <section id="results" class="results-container" ref={model.results_ref.clone()}>
            <div class="capture-area" ref={model.capture_ref.clone()}>
                { body }
            </div>
        </section>
    }
}

fn render_ready(model: &Model, ctx: &Context<Model>, view: &ReadyView) -> Html {
    html! {
        <>
            <div class="user-summary">
                <h3>{"👤 입력하신 정보"}</h3>
                <ul>
                    { for view.user_info.iter().map(|(label, value)| html! {
                        <li><strong>{ format!("{}: ", label) }</strong>{ value.clone() }</li>
                    })}
                </ul>
            </div>

            <div class="analyzed-items">
                <h3>{"📸 업로드하신 옷 분석 결과"}</h3>
                <div class="item-grid">
                    { for view.items.iter().map(|card| render_item_card(model, ctx, card)) }
                </div>
            </div>

            {
                match &view.recommendation {
                    Some(recommendation) => render_recommendation(recommendation),
                    None => html! {},
                }
            }
        </>
    }
}
