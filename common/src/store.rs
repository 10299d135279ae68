//! 로컬 이력 저장소
//!
//! 백엔드에 사용자 인증이 없으므로, 어떤 분석・공고가 "내 것"인지를
//! 브라우저 로컬에 기록해서 이력 화면을 구성한다. 정답 원장이 아니라
//! 휴리스틱 대용물이다. 브라우저를 공유하면 섞일 수 있고 백엔드와
//! 대조하지 않는다.
//!
//! 모든 연산은 fail-soft: 저장소가 막혀 있거나 값이 깨져 있어도
//! 빈 목록・false를 돌려줄 뿐 패닉하거나 Err를 내지 않는다.

use std::cell::RefCell;
use std::collections::HashMap;

/// 내가 생성한 공고 ID 목록 키
pub const KEY_MY_RECRUITMENTS: &str = "my_recruitments";
/// 내가 참여한 공고 ID 목록 키
pub const KEY_MY_PARTICIPATIONS: &str = "my_participations";
/// 내가 분석한 이미지 ID 목록 키
pub const KEY_MY_ANALYSES: &str = "my_analyses";

/// 키-값 저장소 추상화
///
/// 브라우저에서는 localStorage, 테스트에서는 [`MemoryStorage`]를 꽂는다.
/// 구현체는 실패를 스스로 로깅하고 None/false로 삼킨다.
pub trait KeyStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

/// 인메모리 구현 (테스트용)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// 내 공고・참여・분석 이력 저장소
pub struct OwnershipStore<S: KeyStorage> {
    storage: S,
}

impl<S: KeyStorage> OwnershipStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 내가 생성한 공고 ID 목록
    pub fn my_recruitments(&self) -> Vec<u32> {
        self.read_ids(KEY_MY_RECRUITMENTS)
    }

    /// 내가 생성한 공고 추가 (이미 있으면 no-op)
    pub fn add_recruitment(&self, id: u32) {
        self.push_id(KEY_MY_RECRUITMENTS, id);
    }

    pub fn is_my_recruitment(&self, id: u32) -> bool {
        self.my_recruitments().contains(&id)
    }

    /// 내가 참여한 공고 ID 목록
    pub fn my_participations(&self) -> Vec<u32> {
        self.read_ids(KEY_MY_PARTICIPATIONS)
    }

    pub fn add_participation(&self, id: u32) {
        self.push_id(KEY_MY_PARTICIPATIONS, id);
    }

    pub fn is_my_participation(&self, id: u32) -> bool {
        self.my_participations().contains(&id)
    }

    /// 내가 분석한 이미지 ID 목록
    pub fn my_analyses(&self) -> Vec<u32> {
        self.read_ids(KEY_MY_ANALYSES)
    }

    pub fn add_analysis(&self, id: u32) {
        self.push_id(KEY_MY_ANALYSES, id);
    }

    /// 세 목록 전부 삭제 (테스트・초기화 플로우 전용)
    pub fn clear(&self) {
        self.storage.remove(KEY_MY_RECRUITMENTS);
        self.storage.remove(KEY_MY_PARTICIPATIONS);
        self.storage.remove(KEY_MY_ANALYSES);
    }

    /// JSON 정수 배열을 읽는다. 없거나 깨져 있으면 빈 목록
    fn read_ids(&self, key: &str) -> Vec<u32> {
        self.storage
            .get(key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// ID 추가. 중복이면 아무것도 하지 않는다 (멱등)
    fn push_id(&self, key: &str, id: u32) {
        let mut ids = self.read_ids(key);
        if ids.contains(&id) {
            return;
        }
        ids.push(id);
        if let Ok(raw) = serde_json::to_string(&ids) {
            self.storage.set(key, &raw);
        }
    }
}
