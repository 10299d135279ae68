//! 공고 상세 화면
//!
//! 참가 신청은 누구나, 수정・삭제는 내가 만든 공고에만 보인다.

use cleanup_ai_common::{estimated_minutes, update_request_from_view, RecruitmentView};
use gloo::dialogs::{alert, confirm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::{use_route, Route};
use crate::components::loading::Loading;
use crate::store;

#[component]
pub fn RecruitmentDetailPage(id: u32) -> impl IntoView {
    let route = use_route();
    let (recruitment, set_recruitment) = signal(None::<RecruitmentView>);
    let (loading, set_loading) = signal(true);
    let (editing, set_editing) = signal(false);
    let (saving, set_saving) = signal(false);

    let edit_title = RwSignal::new(String::new());
    let edit_content = RwSignal::new(String::new());
    let edit_people = RwSignal::new(String::new());
    let edit_date = RwSignal::new(String::new());
    let edit_place = RwSignal::new(String::new());
    let edit_note = RwSignal::new(String::new());

    let is_mine = store::ownership().is_my_recruitment(id);

    spawn_local(async move {
        match api::recruitment::detail(id).await {
            Ok(view) => set_recruitment.set(Some(view)),
            Err(err) => {
                alert(&err.to_string());
                route.set(Route::RecruitmentList);
            }
        }
        set_loading.set(false);
    });

    let on_join = move |_| {
        store::ownership().add_participation(id);
        alert("참가 신청이 완료되었습니다!");
    };

    let begin_edit = move |_| {
        let Some(view) = recruitment.get_untracked() else {
            return;
        };
        edit_title.set(view.title);
        edit_content.set(view.content);
        edit_people.set(view.required_people.to_string());
        edit_date.set(view.activity_date);
        edit_place.set(view.meeting_place);
        edit_note.set(view.additional_note.unwrap_or_default());
        set_editing.set(true);
    };

    let on_save = move |_| {
        let Some(mut view) = recruitment.get_untracked() else {
            return;
        };
        view.title = edit_title.get_untracked().trim().to_string();
        view.content = edit_content.get_untracked();
        view.required_people = edit_people
            .get_untracked()
            .trim()
            .parse()
            .unwrap_or(view.required_people);
        view.activity_date = edit_date.get_untracked().trim().to_string();
        view.meeting_place = edit_place.get_untracked().trim().to_string();
        let note = edit_note.get_untracked().trim().to_string();
        view.additional_note = (!note.is_empty()).then_some(note);

        if view.title.is_empty() || view.activity_date.is_empty() || view.meeting_place.is_empty() {
            alert("제목, 활동 날짜, 집결 장소는 비울 수 없습니다.");
            return;
        }

        set_saving.set(true);
        spawn_local(async move {
            let req = update_request_from_view(&view);
            match api::recruitment::update(id, &req).await {
                Ok(updated) => {
                    set_recruitment.set(Some(updated));
                    set_editing.set(false);
                }
                Err(err) => alert(&err.to_string()),
            }
            set_saving.set(false);
        });
    };

    let on_delete = move |_| {
        if !confirm("이 공고를 삭제할까요? 되돌릴 수 없습니다.") {
            return;
        }
        spawn_local(async move {
            match api::recruitment::remove(id).await {
                Ok(()) => {
                    alert("공고가 삭제되었습니다.");
                    route.set(Route::RecruitmentList);
                }
                Err(err) => alert(&err.to_string()),
            }
        });
    };

    view! {
        <div class="page recruitment-detail-page">
            <button class="btn btn-text" on:click=move |_| route.set(Route::RecruitmentList)>
                "목록으로 돌아가기"
            </button>

            <Show when=move || loading.get()>
                <Loading />
            </Show>

            {move || recruitment.get().map(|view| {
                if editing.get() {
                    view! {
                        <div class="form edit-form">
                            <label>
                                "제목"
                                <input
                                    type="text"
                                    prop:value=move || edit_title.get()
                                    on:input=move |ev| edit_title.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "본문"
                                <textarea
                                    prop:value=move || edit_content.get()
                                    on:input=move |ev| edit_content.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <label>
                                "모집 인원"
                                <input
                                    type="number"
                                    min="1"
                                    prop:value=move || edit_people.get()
                                    on:input=move |ev| edit_people.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "활동 날짜"
                                <input
                                    type="date"
                                    prop:value=move || edit_date.get()
                                    on:input=move |ev| edit_date.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "집결 장소"
                                <input
                                    type="text"
                                    prop:value=move || edit_place.get()
                                    on:input=move |ev| edit_place.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "추가 안내 (선택)"
                                <textarea
                                    prop:value=move || edit_note.get()
                                    on:input=move |ev| edit_note.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <div class="form-actions">
                                <button
                                    class="btn btn-primary"
                                    disabled=move || saving.get()
                                    on:click=on_save
                                >
                                    {move || if saving.get() { "저장 중..." } else { "저장" }}
                                </button>
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| set_editing.set(false)
                                >
                                    "취소"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    let recruiting = view.status.is_recruiting();
                    let status_class = if recruiting { "recruiting" } else { "completed" };
                    let tool_total: u32 = view.tools.iter().map(|t| t.count).sum();
                    view! {
                        <div class="card detail-card">
                            {(!view.image_url.is_empty()).then(|| view! {
                                <img
                                    class="detail-image"
                                    src=view.image_url.clone()
                                    alt=view.title.clone()
                                />
                            })}
                            <div class="card-top">
                                <span class=format!("status-badge {}", status_class)>
                                    {view.status.label()}
                                </span>
                                <span class="card-people">
                                    {format!(
                                        "{}/{}명",
                                        view.current_applicants, view.required_people,
                                    )}
                                </span>
                            </div>
                            <h3>{view.title.clone()}</h3>
                            <p class="detail-content">{view.content.clone()}</p>

                            <div class="info-rows">
                                <p>{format!("활동 날짜: {}", view.activity_date)}</p>
                                <p>{format!("집결 장소: {}", view.meeting_place)}</p>
                                <p>{format!("예상 소요 시간: 약 {}분", estimated_minutes(tool_total))}</p>
                            </div>

                            {(!view.tools.is_empty()).then(|| view! {
                                <h4>"준비 도구"</h4>
                                <ul class="count-list">
                                    {view.tools.iter().map(|item| view! {
                                        <li>{item.label.clone()}" "{item.count}"개"</li>
                                    }).collect_view()}
                                </ul>
                            })}

                            {view.additional_note.clone().map(|note| view! {
                                <p class="detail-note">{format!("추가 안내: {note}")}</p>
                            })}

                            <div class="detail-actions">
                                {recruiting.then(|| view! {
                                    <button class="btn btn-primary" on:click=on_join>
                                        "참가 신청"
                                    </button>
                                })}
                                {is_mine.then(|| view! {
                                    <button class="btn btn-secondary" on:click=begin_edit>
                                        "수정"
                                    </button>
                                    <button class="btn btn-danger" on:click=on_delete>
                                        "삭제"
                                    </button>
                                })}
                            </div>
                        </div>
                    }
                    .into_any()
                }
            })}
        </div>
    }
}
