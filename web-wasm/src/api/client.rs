//! HTTP 클라이언트 래퍼
//!
//! fetch 호출・응답 언랩・에러 정규화의 단일 창구.
//! 2xx 이외와 네트워크 실패 모두 [`Error`]로 변환되므로
//! 호출 측의 실패 경로는 하나뿐이다.

use cleanup_ai_common::{Error, ErrorBody, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// API 베이스 URL. 빌드 시 `API_BASE_URL` 환경변수로 지정, 미지정 시
/// 로컬 개발 주소를 쓴다.
pub fn api_base_url() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or("http://localhost:8000")
        .to_string()
}

/// JS 쪽 실패를 표시용 문자열로
pub(crate) fn js_message(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn js_error(value: JsValue) -> Error {
    Error::Network(js_message(value))
}

async fn fetch_response(
    method: &str,
    url: &str,
    body: Option<&JsValue>,
    json_body: bool,
) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(body);
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if json_body {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window 없음"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}

async fn response_text(resp: &Response) -> std::result::Result<String, JsValue> {
    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

/// 2xx 이외 응답 → 에러. 본문의 detail/message를 우선 사용한다
async fn error_from_response(action: &str, resp: &Response) -> Error {
    let status = resp.status();
    let detail = match response_text(resp).await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(ErrorBody::into_message),
        Err(_) => None,
    };
    Error::from_status(action, status, detail)
}

async fn request<T: DeserializeOwned>(
    action: &str,
    method: &str,
    path: &str,
    body: Option<&JsValue>,
    json_body: bool,
) -> Result<T> {
    let url = format!("{}{}", api_base_url(), path);
    let resp = fetch_response(method, &url, body, json_body)
        .await
        .map_err(js_error)?;

    if !resp.ok() {
        return Err(error_from_response(action, &resp).await);
    }

    let text = response_text(&resp).await.map_err(js_error)?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn get_json<T: DeserializeOwned>(action: &str, path: &str) -> Result<T> {
    request(action, "GET", path, None, false).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    action: &str,
    path: &str,
    body: &B,
) -> Result<T> {
    let json = serde_json::to_string(body)?;
    request(action, "POST", path, Some(&JsValue::from_str(&json)), true).await
}

/// 본문 없는 POST (게시 등 상태 전이용)
pub async fn post_empty<T: DeserializeOwned>(action: &str, path: &str) -> Result<T> {
    request(action, "POST", path, None, false).await
}

/// multipart POST. Content-Type은 브라우저가 boundary와 함께 채운다
pub async fn post_form<T: DeserializeOwned>(
    action: &str,
    path: &str,
    form: &FormData,
) -> Result<T> {
    request(action, "POST", path, Some(form.as_ref()), false).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    action: &str,
    path: &str,
    body: &B,
) -> Result<T> {
    let json = serde_json::to_string(body)?;
    request(action, "PUT", path, Some(&JsValue::from_str(&json)), true).await
}

/// DELETE. 응답 본문은 버린다
pub async fn delete(action: &str, path: &str) -> Result<()> {
    let url = format!("{}{}", api_base_url(), path);
    let resp = fetch_response("DELETE", &url, None, false)
        .await
        .map_err(js_error)?;

    if !resp.ok() {
        return Err(error_from_response(action, &resp).await);
    }
    Ok(())
}
