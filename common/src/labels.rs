//! 라벨 레지스트리
//!
//! 백엔드의 영문 쓰레기・도구 키를 한국어 표시명으로 변환한다.
//! 매핑이 여기 한 곳에만 존재하므로 매퍼마다 표가 어긋날 일이 없다.
//! 등록되지 않은 키는 원래 키를 그대로 돌려준다 (빈 라벨・패닉 금지).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 쓰레기 분류・도구 라벨 표
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelRegistry {
    /// 쓰레기 분류 키 → 한국어 라벨
    pub trash: HashMap<String, String>,
    /// 도구 키 → 한국어 라벨
    pub tools: HashMap<String, String>,
}

impl Default for LabelRegistry {
    fn default() -> Self {
        let mut trash = HashMap::new();
        trash.insert("plastic".into(), "플라스틱".into());
        trash.insert("can".into(), "캔".into());
        trash.insert("vinyl".into(), "비닐".into());
        trash.insert("net".into(), "그물".into());
        trash.insert("glass".into(), "유리".into());
        trash.insert("paper".into(), "종이".into());
        trash.insert("other".into(), "기타".into());

        let mut tools = HashMap::new();
        tools.insert("tongs".into(), "집게".into());
        tools.insert("bags".into(), "마대".into());
        tools.insert("gloves".into(), "장갑".into());
        tools.insert("cutter".into(), "커터".into());

        Self { trash, tools }
    }
}

impl LabelRegistry {
    /// JSON 문자열에서 읽기 (기본 표를 덮어쓰는 확장용)
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        Ok(registry)
    }

    /// 쓰레기 분류 라벨. 미등록 키는 그대로 반환
    pub fn trash_label(&self, key: &str) -> String {
        self.trash
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// 도구 라벨. 미등록 키는 그대로 반환
    pub fn tool_label(&self, key: &str) -> String {
        self.tools
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_trash_labels() {
        let registry = LabelRegistry::default();
        assert_eq!(registry.trash_label("plastic"), "플라스틱");
        assert_eq!(registry.trash_label("can"), "캔");
        assert_eq!(registry.trash_label("net"), "그물");
        assert_eq!(registry.trash_label("other"), "기타");
    }

    #[test]
    fn test_builtin_tool_labels() {
        let registry = LabelRegistry::default();
        assert_eq!(registry.tool_label("tongs"), "집게");
        assert_eq!(registry.tool_label("bags"), "마대");
        assert_eq!(registry.tool_label("gloves"), "장갑");
        assert_eq!(registry.tool_label("cutter"), "커터");
    }

    #[test]
    fn test_unknown_key_passes_through() {
        let registry = LabelRegistry::default();
        assert_eq!(registry.trash_label("styrofoam"), "styrofoam");
        assert_eq!(registry.tool_label("rake"), "rake");
        // 백엔드가 이미 한국어 키를 보낸 경우도 그대로 통과
        assert_eq!(registry.trash_label("플라스틱"), "플라스틱");
    }

    #[test]
    fn test_from_json_overrides() {
        let json = r#"{"trash": {"plastic": "PET"}, "tools": {}}"#;
        let registry = LabelRegistry::from_json(json).unwrap();
        assert_eq!(registry.trash_label("plastic"), "PET");
        // from_json은 전체 교체. 기본 표가 섞이지 않는다
        assert_eq!(registry.trash_label("can"), "can");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(LabelRegistry::from_json("{ not json").is_err());
    }
}
