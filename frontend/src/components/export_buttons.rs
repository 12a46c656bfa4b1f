use super::super::{Model, Msg};
use super::utils::debounce;
use shared::export::ExportFormat;
use yew::prelude::*;

pub fn render_export_buttons(model: &Model, ctx: &Context<Model>) -> Html {
    let ready = model
        .session
        .result()
        .is_some_and(|result| result.success);
    if !ready {
        return html! {};
    }

    if let Some(format) = model.exporting {
        let what = match format {
            ExportFormat::Png => "이미지",
            ExportFormat::Pdf => "PDF",
        };
        return html! {
            <div class="export-section">
                <p class="generating">
                    <i class="fa-solid fa-spinner fa-spin"></i>
                    { format!(" {} 생성 중...", what) }
                </p>
            </div>
        };
    }

    let link = ctx.link().clone();
    let save_image = debounce(300, {
        let link = link.clone();
        move || link.send_message(Msg::Export(ExportFormat::Png))
    });
    let save_pdf = debounce(300, move || link.send_message(Msg::Export(ExportFormat::Pdf)));

    html! {
        <div class="export-section">
            <button class="export-btn" onclick={save_image}>
                <i class="fa-solid fa-image"></i>{" 이미지로 저장"}
            </button>
            <button class="export-btn" onclick={save_pdf}>
                <i class="fa-solid fa-file-pdf"></i>{" PDF로 저장"}
            </button>
        </div>
    }
}
