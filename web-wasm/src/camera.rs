//! 카메라 스트림과 프레임 캡처
//!
//! getUserMedia로 비디오 스트림을 열고, 현재 프레임을 canvas로 떠서
//! data URL → Blob으로 변환해 업로드에 쓴다. 스트림은 캡처 화면을
//! 떠나는 모든 경로에서 [`stop_stream`]으로 정지해야 한다. 안 하면
//! 카메라 표시등이 계속 켜져 있다.

use std::cell::RefCell;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

/// 카메라 스트림을 연다 (비디오만, 오디오 없음)
pub async fn open_stream() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window 없음"))?;
    let devices = window.navigator().media_devices()?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices.get_user_media_with_constraints(&constraints)?;
    JsFuture::from(promise).await?.dyn_into::<MediaStream>()
}

thread_local! {
    // 열려 있는 스트림은 하나뿐이고 wasm은 단일 스레드라 전역 슬롯으로 관리한다
    static ACTIVE: RefCell<Option<MediaStream>> = const { RefCell::new(None) };
}

/// 스트림을 활성 슬롯에 등록한다. 이미 열려 있던 스트림은 먼저 정지
pub fn set_active(stream: MediaStream) {
    stop_active();
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(stream));
}

/// 활성 스트림을 정지하고 비운다. 없으면 no-op
pub fn stop_active() {
    if let Some(stream) = ACTIVE.with(|slot| slot.borrow_mut().take()) {
        stop_stream(&stream);
    }
}

/// 스트림의 모든 트랙을 정지한다
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// 비디오의 현재 프레임을 JPEG data URL로 캡처한다
pub fn capture_frame(video: &HtmlVideoElement) -> Result<String, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document 없음"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d 컨텍스트 없음"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
    context.draw_image_with_html_video_element(video, 0.0, 0.0)?;

    canvas.to_data_url_with_type("image/jpeg")
}

/// data URL에서 base64 본체를 추출한다
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// data URL에서 MIME 타입을 추출한다. 판별 불가면 image/jpeg
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|mime| !mime.is_empty())
        .unwrap_or("image/jpeg")
}

/// data URL → Blob. 업로드 폼에 넣기 위한 변환
pub fn data_url_to_blob(data_url: &str) -> Option<Blob> {
    let encoded = extract_base64_from_data_url(data_url)?;
    let bytes = STANDARD.decode(encoded).ok()?;

    let array = Uint8Array::from(bytes.as_slice());
    let parts = Array::new();
    parts.push(&array.buffer());

    let options = BlobPropertyBag::new();
    options.set_type(extract_mime_type_from_data_url(data_url));
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).ok()
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_data_url_to_blob_restores_bytes() {
        // "hello" 5바이트
        let blob = data_url_to_blob("data:image/jpeg;base64,aGVsbG8=").expect("Blob 변환 실패");
        assert_eq!(blob.size(), 5.0);
        assert_eq!(blob.type_(), "image/jpeg");
    }

    #[wasm_bindgen_test]
    fn wasm_data_url_to_blob_keeps_mime_type() {
        let blob = data_url_to_blob("data:image/png;base64,aGVsbG8=").expect("Blob 변환 실패");
        assert_eq!(blob.type_(), "image/png");
    }

    #[wasm_bindgen_test]
    fn wasm_data_url_to_blob_rejects_invalid() {
        assert!(data_url_to_blob("data:image/jpeg;base64,@@@@").is_none());
        assert!(data_url_to_blob("구분자 없는 문자열").is_none());
    }
}
