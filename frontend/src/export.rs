//! Image and PDF download of the rendered results.
//!
//! Capturing is delegated to `html2canvas` and document assembly to `jsPDF`,
//! both loaded by `index.html` as globals.

use gloo_file::ObjectUrl;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use shared::ExportConfig;
use shared::export::{ExportFormat, PageLayout, file_name};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement, HtmlElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas, catch)]
    async fn html2canvas(element: &HtmlElement, options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_namespace = jspdf, js_class = "jsPDF", catch)]
    fn new(orientation: &str, unit: &str, format: &JsValue) -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, js_name = addImage, catch)]
    fn add_image(
        this: &JsPdf,
        image_data: &str,
        format: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        alias: &JsValue,
        compression: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = addPage)]
    fn add_page(this: &JsPdf);

    #[wasm_bindgen(method, catch)]
    fn save(this: &JsPdf, file_name: &str) -> Result<(), JsValue>;
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("capture failed: {0}")]
    Capture(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("browser API failed: {0}")]
    Dom(String),

    #[error("capture options could not be encoded: {0}")]
    Options(#[from] serde_json::Error),
}

fn describe(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Options passed to `html2canvas`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CaptureOptions<'a> {
    scale: f64,
    background_color: &'a str,
    logging: bool,
    #[serde(rename = "useCORS")]
    use_cors: bool,
    allow_taint: bool,
    image_timeout: u32,
    scroll_x: f64,
    scroll_y: f64,
    window_width: i32,
    window_height: i32,
}

async fn capture(
    element: &HtmlElement,
    config: &ExportConfig,
) -> Result<HtmlCanvasElement, ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Dom("no document".into()))?;

    let fonts = document.fonts().ready().map_err(|e| ExportError::Dom(describe(e)))?;
    JsFuture::from(fonts)
        .await
        .map_err(|e| ExportError::Dom(describe(e)))?;

    let root = document.document_element();
    let options = CaptureOptions {
        scale: config.scale,
        background_color: &config.background,
        logging: false,
        use_cors: true,
        allow_taint: false,
        image_timeout: 15_000,
        scroll_x: -window.scroll_x().unwrap_or_default(),
        scroll_y: -window.scroll_y().unwrap_or_default(),
        window_width: root.as_ref().map(|r| r.scroll_width()).unwrap_or_default(),
        window_height: root.as_ref().map(|r| r.scroll_height()).unwrap_or_default(),
    };
    let options = js_sys::JSON::parse(&serde_json::to_string(&options)?)
        .map_err(|e| ExportError::Capture(describe(e)))?;

    let canvas = html2canvas(element, options)
        .await
        .map_err(|e| ExportError::Capture(describe(e)))?;
    canvas
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|e| ExportError::Capture(describe(e)))
}

fn today() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// PNG encoding of the canvas, via `toBlob`.
async fn canvas_blob(canvas: &HtmlCanvasElement) -> Result<web_sys::Blob, ExportError> {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = canvas.to_blob(&resolve) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| ExportError::Capture(describe(e)))?
        .dyn_into::<web_sys::Blob>()
        .map_err(|_| ExportError::Capture("canvas produced no image".into()))
}

fn download(url: &str, name: &str) -> Result<(), ExportError> {
    let anchor = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Dom("no document".into()))?
        .create_element("a")
        .map_err(|e| ExportError::Dom(describe(e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ExportError::Dom(describe(e.into())))?;
    anchor.set_download(name);
    anchor.set_href(url);
    anchor.click();
    Ok(())
}

async fn save_png(canvas: &HtmlCanvasElement, name: &str) -> Result<(), ExportError> {
    let blob = canvas_blob(canvas).await?;
    let url = ObjectUrl::from(gloo_file::Blob::from(blob));
    download(&url, name)?;
    log::info!("Saved {}", name);
    // The URL has to outlive the download the click started.
    Timeout::new(10_000, move || drop(url)).forget();
    Ok(())
}

fn save_pdf(canvas: &HtmlCanvasElement, config: &ExportConfig, name: &str) -> Result<(), ExportError> {
    let image_data = canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| ExportError::Capture(describe(e)))?;
    let layout = PageLayout::paginate(config, canvas.width() as f64, canvas.height() as f64);
    let page_size = js_sys::Array::of2(
        &JsValue::from_f64(config.page_width_mm),
        &JsValue::from_f64(config.page_height_mm),
    );
    let pdf = JsPdf::new("p", "mm", &page_size).map_err(|e| ExportError::Pdf(describe(e)))?;

    for (page, offset) in layout.offsets_mm.iter().enumerate() {
        if page > 0 {
            pdf.add_page();
        }
        pdf.add_image(
            &image_data,
            "PNG",
            0.0,
            *offset,
            layout.image_width_mm,
            layout.image_height_mm,
            &JsValue::UNDEFINED,
            "FAST",
        )
        .map_err(|e| ExportError::Pdf(describe(e)))?;
    }

    log::info!("Saving {} ({} pages)", name, layout.page_count());
    pdf.save(name).map_err(|e| ExportError::Pdf(describe(e)))
}

/// Captures `element` once and downloads it in `format`.
pub async fn export(
    element: HtmlElement,
    config: ExportConfig,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let canvas = capture(&element, &config).await?;
    let name = file_name(&config, &today(), format);

    match format {
        ExportFormat::Png => save_png(&canvas, &name).await,
        ExportFormat::Pdf => save_pdf(&canvas, &config, &name),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn canvas_encodes_to_png_blob() {
        let canvas = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        canvas.set_width(4);
        canvas.set_height(4);

        let blob = canvas_blob(&canvas).await.unwrap();
        assert_eq!(blob.type_(), "image/png");
        assert!(blob.size() > 0.0);
    }
}
