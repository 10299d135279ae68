//! 로딩 스피너

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{label.unwrap_or("불러오는 중...")}</p>
        </div>
    }
}
