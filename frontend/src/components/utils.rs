use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    log::warn!("{}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Alert shown once the pending re-render has reached the page.
pub fn alert_after_render(message: impl Into<String>) {
    let message = message.into();
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        alert(&message);
    });
}

/// Opens the native file picker behind a hidden input.
pub fn open_file_picker(input_id: &str) {
    if let Some(input) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
    {
        if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
            html_input.click();
        }
    }
}

/// Suppresses page scrolling while a modal is open.
pub fn lock_body_scroll(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let overflow = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

pub fn render_loading(loading: bool) -> Html {
    if !loading {
        return html! {};
    }
    html! {
        <div id="loading" class="loading-overlay">
            <div class="loading-box">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"AI가 옷을 분석하고 있습니다..."}</p>
            </div>
        </div>
    }
}
