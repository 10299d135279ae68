//! localStorage 기반 소유 기록 저장소
//!
//! [`cleanup_ai_common::KeyStorage`]의 브라우저 구현.
//! localStorage가 막혀 있어도 (시크릿 모드 등) 앱은 계속 동작해야
//! 하므로 실패는 로그만 남기고 조용히 무시한다.

use cleanup_ai_common::{KeyStorage, OwnershipStore};
use gloo::console;

pub struct BrowserStorage;

impl BrowserStorage {
    fn backend(&self) -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                console::error!("localStorage 접근 실패", err);
                None
            }
        }
    }
}

impl KeyStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.backend()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                console::error!("localStorage 읽기 실패", err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let Some(storage) = self.backend() else {
            return false;
        };
        match storage.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                console::error!("localStorage 쓰기 실패", err);
                false
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.backend() {
            if let Err(err) = storage.remove_item(key) {
                console::error!("localStorage 삭제 실패", err);
            }
        }
    }
}

/// 소유 기록 저장소 핸들. 상태가 없으므로 필요할 때마다 만들면 된다.
pub fn ownership() -> OwnershipStore<BrowserStorage> {
    OwnershipStore::new(BrowserStorage)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_ownership_roundtrip_via_local_storage() {
        let store = ownership();
        store.clear();

        store.add_recruitment(11);
        store.add_recruitment(11);
        store.add_participation(12);
        store.add_analysis(1);

        assert_eq!(store.my_recruitments(), vec![11]);
        assert!(store.is_my_recruitment(11));
        assert!(store.is_my_participation(12));
        assert!(!store.is_my_participation(11));
        assert_eq!(store.my_analyses(), vec![1]);

        store.clear();
        assert!(store.my_recruitments().is_empty());
        assert!(store.my_participations().is_empty());
        assert!(store.my_analyses().is_empty());
    }

    #[wasm_bindgen_test]
    fn wasm_corrupt_value_reads_as_empty() {
        let storage = BrowserStorage;
        storage.set(cleanup_ai_common::store::KEY_MY_RECRUITMENTS, "깨진 값");

        let store = ownership();
        assert!(store.my_recruitments().is_empty());

        store.add_recruitment(7);
        assert_eq!(store.my_recruitments(), vec![7]);
        store.clear();
    }
}
