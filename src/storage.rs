//! Browser Storage
//!
//! The only durable client state: which person is "me".

/// localStorage key holding the active person id
pub const CURRENT_USER_KEY: &str = "userId";

/// Minimal string key-value store (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; silently does nothing when storage is unavailable
/// (private mode, sandboxed iframes, native test builds).
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Stored person id, ignoring blank values
pub fn load_current_user(store: &impl KeyValueStore) -> Option<String> {
    store
        .get(CURRENT_USER_KEY)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

pub fn save_current_user(store: &impl KeyValueStore, person_id: &str) {
    store.set(CURRENT_USER_KEY, person_id.trim());
}

pub fn clear_current_user(store: &impl KeyValueStore) {
    store.remove(CURRENT_USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_round_trip() {
        let store = MemoryStorage::default();
        assert_eq!(load_current_user(&store), None);

        save_current_user(&store, "u-17");
        assert_eq!(store.get("userId").as_deref(), Some("u-17"));
        assert_eq!(load_current_user(&store).as_deref(), Some("u-17"));

        clear_current_user(&store);
        assert_eq!(load_current_user(&store), None);
    }

    #[test]
    fn test_blank_stored_id_is_ignored() {
        let store = MemoryStorage::default();
        store.set(CURRENT_USER_KEY, "   ");
        assert_eq!(load_current_user(&store), None);
    }
}
