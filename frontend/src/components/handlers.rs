use super::super::{Model, Msg};
use crate::api;
use crate::components::utils::{alert, alert_after_render};
use crate::export;
use crate::files::{first_file, first_image_file, ClothingPhoto};
use gloo_file::callbacks::read_as_data_url;
use shared::export::ExportFormat;
use shared::{submission, AnalysisResult, Category, ReadTicket, Recommendation, SlotSource};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, HtmlElement};
use yew::prelude::*;

/// Logs a rejected session transition. These come from stale clicks on a
/// card that already changed mode, so they never reach the user.
pub fn report<T>(outcome: Result<T, shared::SessionError>) {
    if let Err(e) = outcome {
        log::warn!("Ignored card action: {}", e);
    }
}

pub fn handle_file_selected(
    model: &mut Model,
    ctx: &Context<Model>,
    category: Category,
    photo: ClothingPhoto,
    source: SlotSource,
) -> bool {
    let file = photo.0.clone();
    match model.slots.select(category, photo, source) {
        Ok(ticket) => {
            let link = ctx.link().clone();
            let reader = read_as_data_url(&file, move |result| match result {
                Ok(data_url) => link.send_message(Msg::PreviewLoaded(ticket, data_url)),
                Err(e) => link.send_message(Msg::PreviewFailed(ticket, e.to_string())),
            });
            // Replacing the handle aborts the previous read for this slot.
            model.readers.insert(category, reader);
            true
        }
        Err(e) => {
            alert(&e.to_string());
            true
        }
    }
}

pub fn handle_preview_loaded(model: &mut Model, ticket: ReadTicket, data_url: String) -> bool {
    if model.slots.set_preview(ticket, data_url) {
        model.readers.remove(&ticket.category);
        true
    } else {
        false
    }
}

pub fn handle_preview_failed(model: &mut Model, ticket: ReadTicket, error: String) -> bool {
    log::error!("{}: preview read failed: {}", ticket.category, error);
    if !model.slots.fail_read(ticket) {
        return false;
    }
    model.readers.remove(&ticket.category);
    alert("사진을 읽지 못했습니다. 다시 선택해주세요.");
    true
}

pub fn handle_remove_file(model: &mut Model, category: Category) -> bool {
    model.readers.remove(&category);
    if model.slots.remove(category) {
        log::info!("{}: photo removed", category);
        true
    } else {
        false
    }
}

pub fn handle_drop(
    model: &mut Model,
    ctx: &Context<Model>,
    category: Category,
    event: DragEvent,
) -> bool {
    event.prevent_default();
    model.slots.set_drag_over(category, false);

    let photo = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    match photo {
        Some(photo) => handle_file_selected(model, ctx, category, photo, SlotSource::Drop),
        None => true,
    }
}

/// A pasted image goes into the first free slot.
pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    let photo = event
        .clipboard_data()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_image_file(&file_list));

    let Some(photo) = photo else {
        return false;
    };
    event.prevent_default();

    match model.slots.first_empty() {
        Some(category) => handle_file_selected(model, ctx, category, photo, SlotSource::Assigned),
        None => {
            alert("모든 칸이 채워져 있습니다. 먼저 사진을 삭제해주세요.");
            false
        }
    }
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.loading {
        log::debug!("Submit ignored, a request is in flight");
        return false;
    }

    let form_data = match submission::prepare(&model.user_info, &model.slots)
        .map_err(|e| e.to_string())
        .and_then(|prepared| api::analysis_form(&prepared).map_err(|e| e.to_string()))
    {
        Ok(form_data) => form_data,
        Err(message) => {
            alert(&message);
            return false;
        }
    };

    model.loading = true;
    let url = model.config.analyze_url.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::analyze(&url, form_data).await {
            Ok(result) => link.send_message(Msg::AnalysisLoaded(result)),
            Err(e) => {
                log::error!("Analysis failed: {}", e);
                link.send_message(Msg::RequestFailed(format!("오류가 발생했습니다: {}", e)));
            }
        }
    });

    true
}

pub fn handle_analysis_loaded(model: &mut Model, result: AnalysisResult) -> bool {
    model.loading = false;
    model.session.replace(result);
    model.scroll_to_results = true;
    true
}

pub fn handle_save_edit(model: &mut Model, category: Category) -> bool {
    match model.session.save_edit(category) {
        Ok(newly_dirty) => {
            if newly_dirty {
                log::info!("Edits pending, offering a re-recommendation");
            }
            true
        }
        Err(e) => {
            log::warn!("Ignored save: {}", e);
            false
        }
    }
}

pub fn handle_re_recommend(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.loading {
        log::debug!("Re-recommend ignored, a request is in flight");
        return false;
    }

    let body = match model.session.re_recommend_request() {
        Ok(request) => serde_json::to_string(&request).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    let body = match body {
        Ok(body) => body,
        Err(message) => {
            alert(&message);
            return false;
        }
    };

    model.loading = true;
    let url = model.config.re_recommend_url.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::re_recommend(&url, body).await {
            Ok(recommendation) => link.send_message(Msg::RecommendationLoaded(recommendation)),
            Err(e) => {
                log::error!("Re-recommendation failed: {}", e);
                link.send_message(Msg::RequestFailed(format!(
                    "재추천 중 오류가 발생했습니다: {}",
                    e
                )));
            }
        }
    });

    true
}

pub fn handle_recommendation_loaded(model: &mut Model, recommendation: Recommendation) -> bool {
    model.loading = false;
    if let Err(e) = model.session.apply_recommendation(recommendation) {
        alert(&e.to_string());
        return true;
    }
    model.scroll_to_results = true;
    alert_after_render("✅ 새로운 코디 추천을 받았습니다!");
    true
}

pub fn handle_request_failed(model: &mut Model, message: String) -> bool {
    model.loading = false;
    alert(&message);
    true
}

pub fn handle_export(model: &mut Model, ctx: &Context<Model>, format: ExportFormat) -> bool {
    if model.exporting.is_some() {
        return false;
    }
    let Some(element) = model.capture_ref.cast::<HtmlElement>() else {
        alert("저장할 결과가 없습니다.");
        return false;
    };

    model.exporting = Some(format);
    let config = model.config.export.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = export::export(element, config, format)
            .await
            .map_err(|e| e.to_string());
        link.send_message(Msg::ExportFinished(format, outcome));
    });

    true
}

pub fn handle_export_finished(
    model: &mut Model,
    format: ExportFormat,
    outcome: Result<(), String>,
) -> bool {
    model.exporting = None;
    match outcome {
        Ok(()) => log::info!("{:?} export finished", format),
        Err(e) => {
            log::error!("{:?} export failed: {}", format, e);
            let message = match format {
                ExportFormat::Png => "이미지 생성 중 오류가 발생했습니다.",
                ExportFormat::Pdf => "PDF 생성 중 오류가 발생했습니다.",
            };
            // The placeholder must be gone before the blocking alert.
            alert_after_render(message);
        }
    }
    true
}
