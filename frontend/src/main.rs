mod api;
mod components;
mod export;
mod files;

use components::handlers;
use components::{
    export_buttons::render_export_buttons, header::render_header, header::render_info_modal,
    re_recommend_bar::render_re_recommend_bar, results::render_results,
    upload_section::render_upload_section, user_form::render_user_form, utils::render_loading,
};
use files::ClothingPhoto;
use gloo_events::EventListener;
use gloo_file::callbacks::FileReader;
use shared::export::ExportFormat;
use shared::{
    AnalysisResult, Category, ClientConfig, DraftField, ReadTicket, Recommendation, Session,
    SlotSource, UploadSlots, UserField, UserInfo,
};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, KeyboardEvent};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Upload slots
    FileSelected(Category, ClothingPhoto, SlotSource),
    PreviewLoaded(ReadTicket, String),
    PreviewFailed(ReadTicket, String),
    RemoveFile(Category),
    SetDragOver(Category, bool),
    HandleDrop(Category, DragEvent),
    HandlePaste(ClipboardEvent),

    // Form and analysis
    SetUserField(UserField, String),
    Submit,
    AnalysisLoaded(AnalysisResult),

    // Editing and re-recommendation
    BeginEdit(Category),
    UpdateDraft(Category, DraftField, String),
    CancelEdit(Category),
    SaveEdit(Category),
    ReRecommend,
    RecommendationLoaded(Recommendation),
    RequestFailed(String),

    // Export
    Export(ExportFormat),
    ExportFinished(ExportFormat, Result<(), String>),

    // UI states
    ShowInfo,
    CloseInfo,
}

// Main component
pub struct Model {
    config: ClientConfig,
    slots: UploadSlots<ClothingPhoto>,
    readers: HashMap<Category, FileReader>,
    user_info: UserInfo,
    session: Session,
    loading: bool,
    exporting: Option<ExportFormat>,
    show_info: bool,
    scroll_to_results: bool,
    results_ref: NodeRef,
    capture_ref: NodeRef,
    keydown_listener: Option<EventListener>,
    paste_listener: Option<EventListener>,
}

/// Reads the optional inline `#client-config` JSON, falling back to defaults.
fn load_config() -> ClientConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("client-config"))
        .and_then(|element| element.text_content());

    match text.as_deref().map(str::trim) {
        None | Some("") => ClientConfig::default(),
        Some(json) => ClientConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid client config: {}", e);
            ClientConfig::default()
        }),
    }
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let window = web_sys::window().expect("no global `window` exists");

        let link = ctx.link().clone();
        let keydown_listener = EventListener::new(&window, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if key_event.key() == "Escape" {
                    link.send_message(Msg::CloseInfo);
                }
            }
        });

        let link = ctx.link().clone();
        let paste_listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });

        let config = load_config();
        log::info!("Endpoints: {} / {}", config.analyze_url, config.re_recommend_url);

        Self {
            config,
            slots: UploadSlots::new(),
            readers: HashMap::new(),
            user_info: UserInfo::default(),
            session: Session::new(),
            loading: false,
            exporting: None,
            show_info: false,
            scroll_to_results: false,
            results_ref: NodeRef::default(),
            capture_ref: NodeRef::default(),
            keydown_listener: Some(keydown_listener),
            paste_listener: Some(paste_listener),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Upload slots
            Msg::FileSelected(category, photo, source) => {
                handlers::handle_file_selected(self, ctx, category, photo, source)
            }
            Msg::PreviewLoaded(ticket, data_url) => {
                handlers::handle_preview_loaded(self, ticket, data_url)
            }
            Msg::PreviewFailed(ticket, error) => handlers::handle_preview_failed(self, ticket, error),
            Msg::RemoveFile(category) => handlers::handle_remove_file(self, category),
            Msg::SetDragOver(category, drag_over) => self.slots.set_drag_over(category, drag_over),
            Msg::HandleDrop(category, event) => handlers::handle_drop(self, ctx, category, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),

            // Form and analysis
            Msg::SetUserField(field, value) => {
                self.user_info.set(field, value);
                true
            }
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::AnalysisLoaded(result) => handlers::handle_analysis_loaded(self, result),

            // Editing and re-recommendation
            Msg::BeginEdit(category) => {
                handlers::report(self.session.begin_edit(category));
                true
            }
            Msg::UpdateDraft(category, field, value) => {
                handlers::report(self.session.update_draft(category, field, value));
                true
            }
            Msg::CancelEdit(category) => {
                handlers::report(self.session.cancel_edit(category));
                true
            }
            Msg::SaveEdit(category) => handlers::handle_save_edit(self, category),
            Msg::ReRecommend => handlers::handle_re_recommend(self, ctx),
            Msg::RecommendationLoaded(recommendation) => {
                handlers::handle_recommendation_loaded(self, recommendation)
            }
            Msg::RequestFailed(error) => handlers::handle_request_failed(self, error),

            // Export
            Msg::Export(format) => handlers::handle_export(self, ctx, format),
            Msg::ExportFinished(format, outcome) => {
                handlers::handle_export_finished(self, format, outcome)
            }

            // UI states
            Msg::ShowInfo => {
                self.show_info = true;
                components::utils::lock_body_scroll(true);
                true
            }
            Msg::CloseInfo => {
                if !self.show_info {
                    return false;
                }
                self.show_info = false;
                components::utils::lock_body_scroll(false);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(ctx) }

                <main class="main-content">
                    { render_user_form(self, ctx) }
                    { render_upload_section(self, ctx) }
                    { render_results(self, ctx) }
                    { render_export_buttons(self, ctx) }
                </main>

                { render_loading(self.loading) }
                { render_re_recommend_bar(self, ctx) }
                { render_info_modal(self, ctx) }

                <footer class="app-footer">
                    <p>{"겨울 코디 마법사 | Rust + WebAssembly"}</p>
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_to_results {
            self.scroll_to_results = false;
            if let Some(results) = self.results_ref.cast::<web_sys::Element>() {
                results.scroll_into_view();
            }
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
