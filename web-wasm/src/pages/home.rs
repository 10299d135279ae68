//! 홈 화면

use cleanup_ai_common::RecruitmentSummaryView;
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::{use_route, Route};
use crate::components::loading::Loading;
use crate::components::recruitment_card::RecruitmentCard;

#[component]
pub fn HomePage() -> impl IntoView {
    let route = use_route();
    let (recruitments, set_recruitments) = signal(Vec::<RecruitmentSummaryView>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::recruitment::list(Some("published")).await {
            Ok(cards) => set_recruitments.set(cards.into_iter().take(3).collect()),
            Err(err) => console::error!(format!("홈 공고 조회 실패: {err}")),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page home-page">
            <section class="banner">
                <h2>"사진 한 장으로 시작하는 정화 활동"</h2>
                <p>"해변・공원 사진을 올리면 AI가 쓰레기를 분석하고 필요한 인원과 도구를 알려드려요."</p>
                <button class="btn btn-primary" on:click=move |_| route.set(Route::Analysis)>
                    "사진 분석하러 가기"
                </button>
            </section>

            <section class="section">
                <h2>"모집 중인 활동"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    <Show
                        when=move || !recruitments.get().is_empty()
                        fallback=|| view! { <p class="empty">"모집 중인 활동이 없습니다."</p> }
                    >
                        <For
                            each=move || recruitments.get()
                            key=|card| card.id
                            children=|card| view! { <RecruitmentCard card=card /> }
                        />
                    </Show>
                </Show>
                <button class="btn btn-secondary" on:click=move |_| route.set(Route::RecruitmentList)>
                    "모든 공고 보기"
                </button>
            </section>
        </div>
    }
}
