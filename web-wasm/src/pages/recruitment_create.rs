//! 공고 작성 화면
//!
//! 분석 결과를 바탕으로 모집 공고를 만들고 즉시 게시한다.

use cleanup_ai_common::mapper::NO_LOCATION;
use cleanup_ai_common::{build_create_request, AnalysisView};
use gloo::dialogs::alert;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::{use_route, Route};
use crate::components::loading::Loading;
use crate::store;

#[component]
pub fn RecruitmentCreatePage(analysis_id: u32) -> impl IntoView {
    let route = use_route();
    let (analysis, set_analysis) = signal(None::<AnalysisView>);
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);

    let date = RwSignal::new(tomorrow());
    let place = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());

    spawn_local(async move {
        match api::analysis::fetch_detail(analysis_id).await {
            Ok(view) => {
                // 분석에 위치가 있으면 집결 장소 기본값으로
                if view.location != NO_LOCATION {
                    place.set(view.location.clone());
                }
                set_analysis.set(Some(view));
            }
            Err(err) => {
                alert(&err.to_string());
                route.set(Route::History);
            }
        }
        set_loading.set(false);
    });

    let on_submit = move |_| {
        let activity_date = date.get_untracked();
        let meeting_place = place.get_untracked();
        if activity_date.trim().is_empty() || meeting_place.trim().is_empty() {
            alert("활동 날짜와 집결 장소를 입력해 주세요.");
            return;
        }

        set_submitting.set(true);
        let additional_note = note.get_untracked();
        spawn_local(async move {
            let req = build_create_request(&activity_date, &meeting_place, Some(&additional_note));
            match api::recruitment::create_and_publish(analysis_id, &req).await {
                Ok(post) => {
                    store::ownership().add_recruitment(post.id);
                    alert("모집 공고가 생성되었습니다!");
                    route.set(Route::RecruitmentDetail(post.id));
                }
                Err(err) => alert(&err.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page recruitment-create-page">
            <button
                class="btn btn-text"
                on:click=move |_| route.set(Route::AnalysisDetail(analysis_id))
            >
                "분석 결과로 돌아가기"
            </button>
            <h2>"모집 공고 만들기"</h2>

            <Show when=move || loading.get()>
                <Loading />
            </Show>

            {move || analysis.get().map(|view| view! {
                <div class="card summary-card">
                    <p>{view.location.clone()}</p>
                    <p>
                        {format!(
                            "쓰레기 {}개 / 권장 인원 {}명",
                            view.total_trash, view.people,
                        )}
                    </p>
                </div>
            })}

            <Show when=move || analysis.get().is_some()>
                <div class="form">
                    <label>
                        "활동 날짜"
                        <input
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "집결 장소"
                        <input
                            type="text"
                            placeholder="예: 광안리 해수욕장 2번 입구"
                            prop:value=move || place.get()
                            on:input=move |ev| place.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "추가 안내 (선택)"
                        <textarea
                            placeholder="준비물, 주차 안내 등"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                        on:click=on_submit
                    >
                        {move || if submitting.get() { "게시 중..." } else { "공고 게시하기" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// 내일 날짜 (YYYY-MM-DD). 활동 날짜 기본값
fn tomorrow() -> String {
    let date = js_sys::Date::new_0();
    date.set_date(date.get_date() + 1);
    String::from(date.to_iso_string()).chars().take(10).collect()
}
