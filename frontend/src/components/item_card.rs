use super::super::{Model, Msg};
use shared::catalog::{SelectOption, pattern_select_options, type_select_options};
use shared::view::{ColorBadge, ItemCard};
use shared::{CardMode, DraftField, EditDraft};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub fn render_item_card(model: &Model, ctx: &Context<Model>, card: &ItemCard) -> Html {
    let pane = match model.session.card_mode(card.category) {
        CardMode::Display => render_display_pane(ctx, card),
        CardMode::Editing(draft) => render_edit_pane(ctx, card, draft),
    };

    html! {
        <div class="item-card" data-category={card.category.to_string()}>
            <h4>{ card.title }</h4>
            { pane }
        </div>
    }
}

fn render_display_pane(ctx: &Context<Model>, card: &ItemCard) -> Html {
    let category = card.category;
    let edit = ctx.link().callback(move |_| Msg::BeginEdit(category));

    html! {
        <div class="display-pane">
            <p>
                <strong>{"종류: "}</strong>
                { card.type_label.clone() }
                <span class="confidence">{ format!(" ({}%)", card.type_confidence) }</span>
            </p>
            <div class="colors">
                <strong>{"색상: "}</strong>
                { render_colors(&card.colors) }
            </div>
            <p>
                <strong>{"무늬: "}</strong>
                { card.pattern_label.clone() }
                <span class="confidence">{ format!(" ({}%)", card.pattern_confidence) }</span>
            </p>
            <button class="edit-btn" onclick={edit}>
                {"✏️ 수정"}
            </button>
        </div>
    }
}

fn render_colors(colors: &[ColorBadge]) -> Html {
    if colors.is_empty() {
        return html! { <span class="no-colors">{"색상 정보 없음"}</span> };
    }
    html! {
        <>
            { for colors.iter().map(|badge| html! {
                <span class="color-badge" style={badge.style()}>{ badge.text() }</span>
            })}
        </>
    }
}

fn render_edit_pane(ctx: &Context<Model>, card: &ItemCard, draft: &EditDraft) -> Html {
    let category = card.category;
    let link = ctx.link();
    let save = link.callback(move |_| Msg::SaveEdit(category));
    let cancel = link.callback(move |_| Msg::CancelEdit(category));

    html! {
        <div class="edit-pane">
            <label>
                {"종류"}
                { render_draft_select(
                    ctx,
                    card,
                    DraftField::Type,
                    type_select_options(category, &draft.type_label),
                ) }
            </label>
            <label>
                {"무늬"}
                { render_draft_select(
                    ctx,
                    card,
                    DraftField::Pattern,
                    pattern_select_options(&draft.pattern_label),
                ) }
            </label>
            <div class="edit-actions">
                <button class="save-btn" onclick={save}>{"✓ 저장"}</button>
                <button class="cancel-btn" onclick={cancel}>{"취소"}</button>
            </div>
        </div>
    }
}

fn render_draft_select(
    ctx: &Context<Model>,
    card: &ItemCard,
    field: DraftField,
    options: Vec<SelectOption>,
) -> Html {
    let category = card.category;
    let onchange = ctx.link().callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::UpdateDraft(category, field, select.value())
    });

    html! {
        <select {onchange}>
            { for options.into_iter().map(|option| {
                let caption = if option.value.is_empty() {
                    "선택하세요".to_string()
                } else {
                    option.value.clone()
                };
                html! {
                    <option value={option.value} selected={option.selected}>{ caption }</option>
                }
            })}
        </select>
    }
}
