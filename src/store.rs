//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds the cached copies of backend data; every view reads from here.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Memory, Person};
use crate::profile_editor::ProfilePatch;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Whole directory (`/user/all`)
    pub users: Vec<Person>,
    /// Directory has been fetched at least once
    pub users_loaded: bool,
    /// All memories (`/memory/all`)
    pub memories: Vec<Memory>,
    pub memories_loaded: bool,
    /// Full profiles (`/user/find/{id}`) by person id
    pub profiles: HashMap<String, Person>,
    /// Person picked on the identity screen
    pub current_user_id: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_users(store: &AppStore, users: Vec<Person>) {
    store.users().set(users);
    store.users_loaded().set(true);
}

pub fn store_set_memories(store: &AppStore, memories: Vec<Memory>) {
    store.memories().set(memories);
    store.memories_loaded().set(true);
}

pub fn store_put_profile(store: &AppStore, person: Person) {
    store.profiles().write().insert(person.id.clone(), person);
}

/// Reflect a successful update in every cached copy of the person
pub fn store_apply_patch(store: &AppStore, patch: &ProfilePatch) {
    if let Some(person) = store.profiles().write().get_mut(&patch.id) {
        patch.apply(person);
    }
    if let Some(person) = store.users().write().iter_mut().find(|p| p.id == patch.id) {
        patch.apply(person);
    }
}

pub fn store_set_current_user(store: &AppStore, person_id: Option<String>) {
    store.current_user_id().set(person_id);
}

/// Directory lookup by id
pub fn store_find_user(store: &AppStore, person_id: &str) -> Option<Person> {
    store.users().with(|users| users.iter().find(|p| p.id == person_id).cloned())
}

pub fn store_find_memory(store: &AppStore, memory_id: &str) -> Option<Memory> {
    store.memories().with(|memories| memories.iter().find(|m| m.id == memory_id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::make_person;
    use crate::profile_editor::ListField;

    #[test]
    fn test_patch_reaches_directory_and_profile_cache() {
        let mut person = make_person("u1", "Иванов", "Андрей", "Петрович");
        person.hobbies = vec!["old".to_string()];
        let store = Store::new(AppState {
            users: vec![person.clone(), make_person("u2", "Иванова", "Мария", "")],
            ..Default::default()
        });
        store_put_profile(&store, person);

        let patch = ProfilePatch::list("u1", ListField::Hobbies, vec!["new".to_string()]);
        store_apply_patch(&store, &patch);

        let listed = store_find_user(&store, "u1").map(|p| p.hobbies);
        assert_eq!(listed, Some(vec!["new".to_string()]));
        let cached = store.profiles().with(|profiles| profiles.get("u1").map(|p| p.hobbies.clone()));
        assert_eq!(cached, Some(vec!["new".to_string()]));
        assert!(store_find_user(&store, "u2").is_some_and(|p| p.hobbies.is_empty()));
    }

    #[test]
    fn test_patch_for_unknown_person_is_ignored() {
        let store = Store::new(AppState {
            users: vec![make_person("u1", "Иванов", "Андрей", "")],
            ..Default::default()
        });
        store_apply_patch(&store, &ProfilePatch::list("u9", ListField::Hobbies, vec!["x".to_string()]));
        assert!(store.profiles().with(|profiles| profiles.is_empty()));
        assert!(store_find_user(&store, "u1").is_some_and(|p| p.hobbies.is_empty()));
    }
}
