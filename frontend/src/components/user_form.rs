use super::super::{Model, Msg};
use shared::catalog::user_field_options;
use shared::UserField;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn render_user_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form id="outfit-form" class="user-form" onsubmit={submit}>
            <h2><i class="fa-solid fa-user"></i>{" 기본 정보"}</h2>
            { render_gender(model, ctx) }
            { render_select(model, ctx, UserField::AgeGroup) }
            { render_select(model, ctx, UserField::BodyType) }
            { render_select(model, ctx, UserField::Tpo) }
            <button
                type="submit"
                form="outfit-form"
                class="analyze-btn"
                disabled={model.loading}
            >
                <i class="fa-solid fa-wand-magic-sparkles"></i>{" 코디 추천받기"}
            </button>
        </form>
    }
}

fn render_gender(model: &Model, ctx: &Context<Model>) -> Html {
    let field = UserField::Gender;
    let current = model.user_info.get(field);
    html! {
        <fieldset class="form-group">
            <legend>{ field.label() }</legend>
            { for user_field_options(field).iter().map(|&value| {
                let onchange = ctx.link().callback(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetUserField(field, input.value())
                });
                html! {
                    <label class="radio">
                        <input
                            type="radio"
                            name={field.form_name()}
                            value={value}
                            checked={current == value}
                            {onchange}
                        />
                        { value }
                    </label>
                }
            })}
        </fieldset>
    }
}

fn render_select(model: &Model, ctx: &Context<Model>, field: UserField) -> Html {
    let current = model.user_info.get(field);
    let onchange = ctx.link().callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetUserField(field, select.value())
    });

    html! {
        <div class="form-group">
            <label for={field.form_name()}>{ field.label() }</label>
            <select id={field.form_name()} name={field.form_name()} {onchange}>
                <option value="" selected={current.is_empty()}>{"선택하세요"}</option>
                { for user_field_options(field).iter().map(|&value| html! {
                    <option value={value} selected={current == value}>{ value }</option>
                })}
            </select>
        </div>
    }
}
