use super::super::{Model, Msg};
use yew::prelude::*;

/// Call to action shown while saved edits have not been sent back.
pub fn render_re_recommend_bar(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.session.is_dirty() {
        return html! {};
    }

    html! {
        <div id="re-recommend-bar" class="re-recommend-bar">
            <p>{"✏️ 수정사항이 저장되었습니다!"}</p>
            <button
                class="analyze-btn"
                disabled={model.loading}
                onclick={ctx.link().callback(|_| Msg::ReRecommend)}
            >
                {"🔄 수정된 정보로 다시 추천받기"}
            </button>
        </div>
    }
}
