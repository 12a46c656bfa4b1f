use super::super::{Model, Msg};
use yew::prelude::*;

/// Renders the application header
pub fn render_header(ctx: &Context<Model>) -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-snowflake"></i> {" 겨울 코디 마법사"}</h1>
            <p class="subtitle">{"가지고 있는 옷을 올리면 AI가 겨울 코디를 추천해드려요"}</p>
            <button
                id="info-button"
                class="info-btn"
                title="서비스 안내"
                onclick={ctx.link().callback(|_| Msg::ShowInfo)}
            >
                <i class="fa-solid fa-circle-info"></i>
            </button>
        </header>
    }
}

/// Service description. Closes on the backdrop, the close button, or Escape.
pub fn render_info_modal(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.show_info {
        return html! {};
    }

    let link = ctx.link();
    let close = link.callback(|_| Msg::CloseInfo);
    let close_on_backdrop = link.batch_callback(|e: MouseEvent| {
        let on_backdrop = e.target() == e.current_target();
        on_backdrop.then_some(Msg::CloseInfo)
    });

    html! {
        <div id="info-modal" class="modal-backdrop" onclick={close_on_backdrop}>
            <div class="modal" role="dialog" aria-modal="true">
                <button class="modal-close" title="닫기" onclick={close}>
                    <i class="fa-solid fa-xmark"></i>
                </button>
                <h2>{"이용 방법"}</h2>
                <ol>
                    <li>{"성별, 연령대, 체형, TPO를 선택해주세요."}</li>
                    <li>{"가지고 있는 아우터, 상의, 하의 사진을 올려주세요."}</li>
                    <li>{"AI가 옷의 종류, 색상, 무늬를 분석합니다."}</li>
                    <li>{"부족한 아이템까지 채운 전체 코디를 추천받으세요."}</li>
                </ol>
                <p>
                    {"분석이 틀렸다면 종류나 무늬를 수정하고 다시 추천받을 수 있습니다. "}
                    {"결과는 이미지나 PDF로 저장할 수 있습니다."}
                </p>
            </div>
        </div>
    }
}
