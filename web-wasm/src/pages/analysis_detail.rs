//! 분석 상세 화면

use cleanup_ai_common::AnalysisView;
use gloo::dialogs::alert;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::{use_route, Route};
use crate::components::loading::Loading;

#[component]
pub fn AnalysisDetailPage(id: u32) -> impl IntoView {
    let route = use_route();
    let (analysis, set_analysis) = signal(None::<AnalysisView>);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::analysis::fetch_detail(id).await {
            Ok(view) => set_analysis.set(Some(view)),
            Err(err) => {
                alert(&err.to_string());
                route.set(Route::History);
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="page analysis-detail-page">
            <button class="btn btn-text" on:click=move |_| route.set(Route::History)>
                "이력으로 돌아가기"
            </button>

            <Show when=move || loading.get()>
                <Loading />
            </Show>

            {move || analysis.get().map(|view| {
                let analysis_id = view.id;
                view! {
                    <div class="card detail-card">
                        {(!view.image_url.is_empty()).then(|| view! {
                            <img class="detail-image" src=view.image_url.clone() alt="분석한 사진" />
                        })}
                        <p class="detail-location">{view.location.clone()}</p>
                        {view.area_type.clone().map(|area| view! {
                            <p class="detail-area">{format!("지역 유형: {area}")}</p>
                        })}
                        <p class="detail-total">
                            {format!("감지된 쓰레기 총 {}개", view.total_trash)}
                        </p>
                        <ul class="count-list">
                            {view.trash_items.iter().map(|item| view! {
                                <li>{item.label.clone()}" "{item.count}"개"</li>
                            }).collect_view()}
                        </ul>

                        <h4>"권장 자원"</h4>
                        <p>
                            {format!(
                                "인원 {}명, 예상 소요 시간 {}분",
                                view.people, view.estimated_time_min,
                            )}
                        </p>
                        <ul class="count-list">
                            {view.tools.iter().map(|item| view! {
                                <li>{item.label.clone()}" "{item.count}"개"</li>
                            }).collect_view()}
                        </ul>
                        <p class="detail-date">{format!("분석 일시: {}", view.created_at)}</p>

                        <button
                            class="btn btn-primary"
                            on:click=move |_| route.set(Route::RecruitmentCreate(analysis_id))
                        >
                            "이 결과로 공고 만들기"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
