//! 화면(페이지) 컴포넌트

mod analysis;
mod analysis_detail;
mod history;
mod home;
mod recruitment_create;
mod recruitment_detail;
mod recruitment_list;

pub use analysis::AnalysisPage;
pub use analysis_detail::AnalysisDetailPage;
pub use history::HistoryPage;
pub use home::HomePage;
pub use recruitment_create::RecruitmentCreatePage;
pub use recruitment_detail::RecruitmentDetailPage;
pub use recruitment_list::RecruitmentListPage;
