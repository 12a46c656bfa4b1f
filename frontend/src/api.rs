use crate::files::ClothingPhoto;
use gloo_net::http::{Request, Response};
use shared::submission::Submission;
use shared::{AnalysisResult, ReRecommendResponse, Recommendation};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("네트워크 오류: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("서버 오류: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("응답을 해석하지 못했습니다: {0}")]
    Decode(gloo_net::Error),

    #[error("요청을 만들지 못했습니다: {0}")]
    Body(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Body(format!("{:?}", value))
    }
}

/// Multipart body for the analysis endpoint: the four info fields, then one
/// part per filled slot named after its category.
pub fn analysis_form(submission: &Submission<'_, ClothingPhoto>) -> Result<FormData, ApiError> {
    let form_data = FormData::new()?;
    for (name, value) in &submission.fields {
        form_data.append_with_str(name, value)?;
    }
    for (category, photo) in &submission.files {
        form_data.append_with_blob_and_filename(
            category.field_name(),
            photo.as_ref(),
            &photo.name(),
        )?;
    }
    Ok(form_data)
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("{} failed with status {}: {}", response.url(), status, body);
        Err(ApiError::Status { status, body })
    }
}

pub async fn analyze(url: &str, form_data: FormData) -> Result<AnalysisResult, ApiError> {
    log::info!("POST {}", url);
    let response = Request::post(url).body(form_data)?.send().await?;
    let response = ensure_ok(response).await?;
    let result = response
        .json::<AnalysisResult>()
        .await
        .map_err(ApiError::Decode)?;
    log::info!(
        "Analysis received: success={}, items={:?}",
        result.success,
        result.uploaded_items.keys().collect::<Vec<_>>()
    );
    Ok(result)
}

/// `body` is the serialized re-recommendation request.
pub async fn re_recommend(url: &str, body: String) -> Result<Recommendation, ApiError> {
    log::info!("POST {}", url);
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .body(body)?
        .send()
        .await?;
    let response = ensure_ok(response).await?;
    let parsed = response
        .json::<ReRecommendResponse>()
        .await
        .map_err(ApiError::Decode)?;
    Ok(parsed.recommendation)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::upload::{SlotSource, UploadSlots};
    use shared::{Category, UserInfo, submission};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn photo(name: &str) -> ClothingPhoto {
        let parts = js_sys::Array::of1(&JsValue::from_str("jpeg-bytes"));
        let options = web_sys::FilePropertyBag::new();
        options.set_type("image/jpeg");
        web_sys::File::new_with_str_sequence_and_options(&parts, name, &options)
            .unwrap()
            .into()
    }

    #[wasm_bindgen_test]
    fn form_contains_fields_and_named_parts() {
        let info = UserInfo {
            gender: "남성".into(),
            age_group: "20대 후반".into(),
            body_type: "슬림".into(),
            tpo: "데이트".into(),
        };
        let mut slots = UploadSlots::new();
        slots
            .select(Category::Bottom, photo("jeans.jpg"), SlotSource::Drop)
            .unwrap();
        let submission = submission::prepare(&info, &slots).unwrap();

        let form = analysis_form(&submission).unwrap();
        assert_eq!(form.get("tpo").as_string().as_deref(), Some("데이트"));
        assert_eq!(form.get("body_type").as_string().as_deref(), Some("슬림"));
        assert!(form.has("bottom"));
        assert!(!form.has("outer"));
        let file: web_sys::File = wasm_bindgen::JsCast::dyn_into(form.get("bottom")).unwrap();
        assert_eq!(file.name(), "jeans.jpg");
    }
}
