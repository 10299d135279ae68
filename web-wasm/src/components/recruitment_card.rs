//! 공고 카드 컴포넌트
//!
//! 홈과 공고 목록에서 공용. 카드 클릭은 상세로 이동하고,
//! 모집 중일 때만 참가 신청 버튼을 보인다.

use cleanup_ai_common::RecruitmentSummaryView;
use gloo::dialogs::alert;
use leptos::prelude::*;

use crate::app::{use_route, Route};
use crate::store;

#[component]
pub fn RecruitmentCard(card: RecruitmentSummaryView) -> impl IntoView {
    let route = use_route();
    let id = card.id;
    let recruiting = card.status.is_recruiting();
    let status_label = card.status.label();
    let status_class = if recruiting { "recruiting" } else { "completed" };

    let on_join = move |ev: leptos::ev::MouseEvent| {
        // 카드 클릭(상세 이동)과 겹치지 않게
        ev.stop_propagation();
        store::ownership().add_participation(id);
        alert("참가 신청이 완료되었습니다!");
    };

    view! {
        <div
            class="card recruitment-card"
            on:click=move |_| route.set(Route::RecruitmentDetail(id))
        >
            {(!card.image_url.is_empty()).then(|| view! {
                <img class="card-image" src=card.image_url.clone() alt=card.title.clone() />
            })}
            <div class="card-body">
                <div class="card-top">
                    <span class=format!("status-badge {}", status_class)>{status_label}</span>
                    <span class="card-people">
                        {format!("{}/{}명", card.current_applicants, card.required_people)}
                    </span>
                </div>
                <h3>{card.title.clone()}</h3>
                <p class="card-meta">{card.activity_date.clone()}" / "{card.meeting_place.clone()}</p>
                {recruiting.then(|| view! {
                    <button class="btn btn-small btn-primary" on:click=on_join>
                        "참가 신청"
                    </button>
                })}
            </div>
        </div>
    }
}
