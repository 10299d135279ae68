//! 분석 화면 (촬영・업로드 → AI 분석)

use cleanup_ai_common::AnalysisView;
use gloo::console;
use gloo::dialogs::alert;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement};

use crate::api;
use crate::app::{use_route, Route};
use crate::camera;
use crate::components::loading::Loading;
use crate::store;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let route = use_route();

    // 선택된 이미지는 data URL로 들고 있다가 업로드 직전에 Blob으로 변환한다
    let preview = RwSignal::new(None::<String>);
    let file_name = RwSignal::new(String::new());
    let location_input = RwSignal::new(String::new());

    let (camera_active, set_camera_active) = signal(false);
    let video_ref = NodeRef::<html::Video>::new();

    let (analyzing, set_analyzing) = signal(false);
    let result = RwSignal::new(None::<AnalysisView>);

    // 화면을 떠날 때 카메라가 켜진 채로 남지 않게
    on_cleanup(|| camera::stop_active());

    let on_open_camera = move |_| {
        set_camera_active.set(true);
        spawn_local(async move {
            match camera::open_stream().await {
                Ok(stream) => {
                    if let Some(video) = video_ref.get_untracked() {
                        video.set_src_object(Some(&stream));
                        let _ = video.play();
                    }
                    camera::set_active(stream);
                }
                Err(err) => {
                    console::error!("카메라 열기 실패", err);
                    alert("카메라를 열 수 없습니다. 브라우저 권한을 확인해 주세요.");
                    set_camera_active.set(false);
                }
            }
        });
    };

    let on_close_camera = move |_| {
        camera::stop_active();
        set_camera_active.set(false);
    };

    let on_capture = move |_| {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        match camera::capture_frame(&video) {
            Ok(data_url) => {
                preview.set(Some(data_url));
                file_name.set("capture.jpg".to_string());
                result.set(None);
            }
            Err(err) => {
                console::error!("프레임 캡처 실패", err);
                alert("촬영에 실패했습니다. 다시 시도해 주세요.");
            }
        }
        camera::stop_active();
        set_camera_active.set(false);
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        camera::stop_active();
        set_camera_active.set(false);
        file_name.set(file.name());
        result.set(None);
        read_file(file, preview);
    };

    let on_analyze = move |_| {
        let Some(data_url) = preview.get_untracked() else {
            alert("먼저 사진을 선택해 주세요.");
            return;
        };
        let Some(blob) = camera::data_url_to_blob(&data_url) else {
            alert("이미지를 읽을 수 없습니다. 다른 사진으로 시도해 주세요.");
            return;
        };

        set_analyzing.set(true);
        let name = file_name.get_untracked();
        let location = location_input.get_untracked();
        spawn_local(async move {
            match api::analysis::analyze_image(&blob, &name, Some(&location)).await {
                Ok(view) => {
                    store::ownership().add_analysis(view.id);
                    result.set(Some(view));
                }
                Err(err) => alert(&err.to_string()),
            }
            set_analyzing.set(false);
        });
    };

    let on_reset = move |_| {
        camera::stop_active();
        set_camera_active.set(false);
        preview.set(None);
        file_name.set(String::new());
        location_input.set(String::new());
        result.set(None);
    };

    view! {
        <div class="page analysis-page">
            <h2>"쓰레기 분석"</h2>

            <Show when=move || camera_active.get()>
                <div class="camera-view">
                    <video node_ref=video_ref autoplay=true muted=true></video>
                    <div class="camera-actions">
                        <button class="btn btn-primary" on:click=on_capture>"촬영"</button>
                        <button class="btn btn-secondary" on:click=on_close_camera>"닫기"</button>
                    </div>
                </div>
            </Show>

            <Show when=move || !camera_active.get()>
                <div class="picker">
                    {move || preview.get().map(|url| view! {
                        <img class="preview" src=url alt="선택한 사진" />
                    })}
                    <div class="picker-actions">
                        <button class="btn btn-secondary" on:click=on_open_camera>
                            "카메라로 촬영"
                        </button>
                        <label class="btn btn-secondary file-label">
                            "앨범에서 선택"
                            <input type="file" accept="image/*" on:change=on_file_change />
                        </label>
                    </div>
                    <input
                        type="text"
                        placeholder="활동 위치 (선택)"
                        prop:value=move || location_input.get()
                        on:input=move |ev| location_input.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn-primary"
                        disabled=move || analyzing.get()
                        on:click=on_analyze
                    >
                        {move || if analyzing.get() { "분석 중..." } else { "분석하기" }}
                    </button>
                </div>
            </Show>

            <Show when=move || analyzing.get()>
                <Loading label="AI가 사진을 분석하고 있어요..." />
            </Show>

            {move || result.get().map(|analysis| {
                let analysis_id = analysis.id;
                view! {
                    <div class="card result-card">
                        <h3>"분석 결과"</h3>
                        <p class="result-location">{analysis.location.clone()}</p>
                        <p class="result-total">
                            {format!("감지된 쓰레기 총 {}개", analysis.total_trash)}
                        </p>
                        <ul class="count-list">
                            {analysis.trash_items.iter().map(|item| view! {
                                <li>{item.label.clone()}" "{item.count}"개"</li>
                            }).collect_view()}
                        </ul>
                        <h4>"권장 자원"</h4>
                        <p>
                            {format!(
                                "인원 {}명, 예상 소요 시간 {}분",
                                analysis.people, analysis.estimated_time_min,
                            )}
                        </p>
                        <ul class="count-list">
                            {analysis.tools.iter().map(|item| view! {
                                <li>{item.label.clone()}" "{item.count}"개"</li>
                            }).collect_view()}
                        </ul>
                        <div class="result-actions">
                            <button
                                class="btn btn-primary"
                                on:click=move |_| route.set(Route::RecruitmentCreate(analysis_id))
                            >
                                "이 결과로 공고 만들기"
                            </button>
                            <button class="btn btn-secondary" on:click=on_reset>
                                "다시 선택"
                            </button>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

/// 파일을 data URL로 읽어 미리보기 시그널에 넣는다
fn read_file(file: File, preview: RwSignal<Option<String>>) {
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                preview.set(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
