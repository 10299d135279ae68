//! 공고 목록 화면

use cleanup_ai_common::RecruitmentSummaryView;
use gloo::dialogs::alert;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::loading::Loading;
use crate::components::recruitment_card::RecruitmentCard;

#[component]
pub fn RecruitmentListPage() -> impl IntoView {
    let (recruitments, set_recruitments) = signal(Vec::<RecruitmentSummaryView>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::recruitment::list(None).await {
            Ok(cards) => set_recruitments.set(cards),
            Err(err) => alert(&err.to_string()),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page recruitment-list-page">
            <h2>"모집 공고"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || !recruitments.get().is_empty()
                    fallback=|| view! { <p class="empty">"등록된 공고가 없습니다."</p> }
                >
                    <For
                        each=move || recruitments.get()
                        key=|card| card.id
                        children=|card| view! { <RecruitmentCard card=card /> }
                    />
                </Show>
            </Show>
        </div>
    }
}
