//! 공통 레이아웃 (헤더 + 하단 탭 바)

use leptos::prelude::*;

use crate::app::{use_route, Route, Tab};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <header class="header">
                <h1>"Cleanup AI - 우리 동네 정화 활동"</h1>
            </header>
            <main class="content">{children()}</main>
            <TabBar />
        </div>
    }
}

#[component]
fn TabBar() -> impl IntoView {
    view! {
        <nav class="tab-bar">
            <TabButton tab=Tab::Home label="홈" target=Route::Home />
            <TabButton tab=Tab::Analysis label="분석" target=Route::Analysis />
            <TabButton tab=Tab::History label="이력" target=Route::History />
            <TabButton tab=Tab::Recruitment label="공고" target=Route::RecruitmentList />
        </nav>
    }
}

#[component]
fn TabButton(tab: Tab, label: &'static str, target: Route) -> impl IntoView {
    let route = use_route();
    view! {
        <button
            class="tab-button"
            class:active=move || route.get().tab() == tab
            on:click=move |_| route.set(target)
        >
            {label}
        </button>
    }
}
