use super::super::{Model, Msg};
use super::utils::open_file_picker;
use crate::files::first_file;
use shared::upload::SlotState;
use shared::{Category, SlotSource};
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

fn input_id(category: Category) -> String {
    format!("file-input-{}", category)
}

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section class="upload-section">
            <h2><i class="fa-solid fa-shirt"></i>{" 옷 사진"}</h2>
            <p class="hint">{"사진을 1장 이상 올려주세요. 드래그, 클릭, 붙여넣기 모두 가능합니다."}</p>
            <div class="upload-grid">
                { for Category::UPLOADABLE.into_iter().map(|category| render_slot(model, ctx, category)) }
            </div>
        </section>
    }
}

fn render_slot(model: &Model, ctx: &Context<Model>, category: Category) -> Html {
    let Some(slot) = model.slots.slot(category) else {
        return html! {};
    };
    let link = ctx.link();
    let id = input_id(category);

    let handle_change = link.batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let photo = input.files().and_then(|files| first_file(&files));
        input.set_value("");
        photo.map(|photo| Msg::FileSelected(category, photo, SlotSource::Click))
    });

    let handle_drag_over = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::SetDragOver(category, true)
    });

    let handle_drag_leave = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::SetDragOver(category, false)
    });

    let handle_drop = link.callback(move |e: DragEvent| Msg::HandleDrop(category, e));

    let trigger_file_input = {
        let id = id.clone();
        Callback::from(move |_: MouseEvent| open_file_picker(&id))
    };

    let body = match (slot.state(), slot.preview()) {
        (SlotState::Preview, Some(preview)) => {
            let remove = link.callback(move |e: MouseEvent| {
                e.stop_propagation();
                Msg::RemoveFile(category)
            });
            html! {
                <div class="preview">
                    <img src={preview.to_string()} alt={category.display_name()} />
                    <button class="remove-btn" title="삭제" onclick={remove}>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
            }
        }
        (SlotState::Reading, _) => html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-spinner fa-spin"></i>
                <p>{"미리보기 불러오는 중..."}</p>
            </div>
        },
        _ => html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"사진을 끌어다 놓거나 클릭하세요"}</p>
            </div>
        },
    };

    html! {
        <div class="upload-slot">
            <h3>{ category.display_name() }</h3>
            <input
                type="file"
                id={id}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />
            <div
                class={classes!("upload-area", slot.is_drag_over().then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={trigger_file_input}
            >
                { body }
            </div>
        </div>
    }
}
