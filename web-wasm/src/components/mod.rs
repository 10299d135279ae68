//! UI 컴포넌트

pub mod layout;
pub mod loading;
pub mod recruitment_card;
