//! 메인 애플리케이션 컴포넌트

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::layout::Layout;
use crate::pages::{
    AnalysisDetailPage, AnalysisPage, HistoryPage, HomePage, RecruitmentCreatePage,
    RecruitmentDetailPage, RecruitmentListPage,
};

/// 화면 라우트
///
/// URL 라우터 없이 탭・상세 전환만 하므로 컨텍스트의
/// `RwSignal<Route>` 하나로 관리한다. 뒤로 가기는 각 화면의
/// 버튼으로만 지원한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Analysis,
    AnalysisDetail(u32),
    History,
    RecruitmentList,
    RecruitmentDetail(u32),
    RecruitmentCreate(u32),
}

/// 하단 탭
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Analysis,
    History,
    Recruitment,
}

impl Route {
    /// 이 라우트가 속한 탭 (탭 바 활성 표시용)
    pub fn tab(&self) -> Tab {
        match self {
            Route::Home => Tab::Home,
            Route::Analysis | Route::AnalysisDetail(_) => Tab::Analysis,
            Route::History => Tab::History,
            Route::RecruitmentList | Route::RecruitmentDetail(_) | Route::RecruitmentCreate(_) => {
                Tab::Recruitment
            }
        }
    }
}

/// 현재 라우트 시그널. [`App`] 아래 어디서든 꺼내 쓴다
pub fn use_route() -> RwSignal<Route> {
    use_context::<RwSignal<Route>>().unwrap_or_else(|| RwSignal::new(Route::Home))
}

#[component]
pub fn App() -> impl IntoView {
    let route = RwSignal::new(Route::Home);
    provide_context(route);

    // 기동 시 백엔드 생존 확인. 실패해도 로그만 남긴다
    spawn_local(async {
        match api::health().await {
            Ok(resp) => console::log!(format!("백엔드 연결됨: {}", resp.status)),
            Err(err) => console::warn!(format!("백엔드 연결 실패: {err}")),
        }
    });

    view! {
        <Layout>
            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Analysis => view! { <AnalysisPage /> }.into_any(),
                Route::AnalysisDetail(id) => view! { <AnalysisDetailPage id=id /> }.into_any(),
                Route::History => view! { <HistoryPage /> }.into_any(),
                Route::RecruitmentList => view! { <RecruitmentListPage /> }.into_any(),
                Route::RecruitmentDetail(id) => {
                    view! { <RecruitmentDetailPage id=id /> }.into_any()
                }
                Route::RecruitmentCreate(analysis_id) => {
                    view! { <RecruitmentCreatePage analysis_id=analysis_id /> }.into_any()
                }
            }}
        </Layout>
    }
}
