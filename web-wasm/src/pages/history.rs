//! 이력 화면 (내 분석・내가 만든 공고・참여한 활동)
//!
//! 백엔드에 사용자 구분이 없으므로 로컬 소유 기록으로 걸러서 보여준다.

use cleanup_ai_common::{AnalysisHistoryView, RecruitmentSummaryView};
use gloo::dialogs::alert;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::{use_route, Route};
use crate::components::loading::Loading;
use crate::components::recruitment_card::RecruitmentCard;
use crate::store;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let (analyses, set_analyses) = signal(Vec::<AnalysisHistoryView>::new());
    let (created, set_created) = signal(Vec::<RecruitmentSummaryView>::new());
    let (joined, set_joined) = signal(Vec::<RecruitmentSummaryView>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        let store = store::ownership();

        match api::analysis::fetch_history().await {
            Ok(all) => {
                let my_ids = store.my_analyses();
                set_analyses.set(all.into_iter().filter(|a| my_ids.contains(&a.id)).collect());
            }
            Err(err) => alert(&err.to_string()),
        }

        match api::recruitment::list(None).await {
            Ok(all) => {
                let mut mine = Vec::new();
                let mut participated = Vec::new();
                for card in all {
                    if store.is_my_recruitment(card.id) {
                        mine.push(card.clone());
                    }
                    if store.is_my_participation(card.id) {
                        participated.push(card);
                    }
                }
                set_created.set(mine);
                set_joined.set(participated);
            }
            Err(err) => alert(&err.to_string()),
        }

        set_loading.set(false);
    });

    view! {
        <div class="page history-page">
            <h2>"나의 활동 이력"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <section class="section">
                    <h3>"내 분석"</h3>
                    <Show
                        when=move || !analyses.get().is_empty()
                        fallback=|| view! { <p class="empty">"분석 이력이 없습니다."</p> }
                    >
                        <For
                            each=move || analyses.get()
                            key=|item| item.id
                            children=|item| view! { <HistoryCard item=item /> }
                        />
                    </Show>
                </section>

                <section class="section">
                    <h3>"내가 만든 공고"</h3>
                    <Show
                        when=move || !created.get().is_empty()
                        fallback=|| view! { <p class="empty">"만든 공고가 없습니다."</p> }
                    >
                        <For
                            each=move || created.get()
                            key=|card| card.id
                            children=|card| view! { <RecruitmentCard card=card /> }
                        />
                    </Show>
                </section>

                <section class="section">
                    <h3>"참여한 활동"</h3>
                    <Show
                        when=move || !joined.get().is_empty()
                        fallback=|| view! { <p class="empty">"참여한 활동이 없습니다."</p> }
                    >
                        <For
                            each=move || joined.get()
                            key=|card| card.id
                            children=|card| view! { <RecruitmentCard card=card /> }
                        />
                    </Show>
                </section>
            </Show>
        </div>
    }
}

#[component]
fn HistoryCard(item: AnalysisHistoryView) -> impl IntoView {
    let route = use_route();
    let id = item.id;
    let labels = item.trash_labels.join(", ");

    view! {
        <div
            class="card history-card"
            on:click=move |_| route.set(Route::AnalysisDetail(id))
        >
            {(!item.image_url.is_empty()).then(|| view! {
                <img class="card-image" src=item.image_url.clone() alt="분석한 사진" />
            })}
            <div class="card-body">
                <h4>{item.location.clone()}</h4>
                <p class="card-meta">{format!("총 {}개", item.total_trash)}" / "{labels}</p>
                <p class="card-date">{item.created_at.clone()}</p>
            </div>
        </div>
    }
}
