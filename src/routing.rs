//! In-App Routing
//!
//! Pages are an enum switched in place (like the mobile view switcher),
//! mirrored into browser history so deep links and back/forward work.

use leptos::prelude::*;
use percent_encoding::percent_decode_str;

use crate::config::encode_segment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Identity picker ("who are you?")
    WhoAmI,
    Tree,
    Memories,
    Profile(String),
    MemoryDetail(String),
    AddMemory,
    CreateParent,
}

impl Page {
    /// Parse a location pathname; unknown paths land on the tree
    pub fn from_path(path: &str) -> Page {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or("")
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        match segments.as_slice() {
            [] => Page::WhoAmI,
            ["tree"] => Page::Tree,
            ["memories"] => Page::Memories,
            ["add-memory"] | ["addMemory"] => Page::AddMemory,
            ["create-parent"] | ["createParent"] => Page::CreateParent,
            ["profile", id] => decode(id).map(Page::Profile).unwrap_or(Page::Tree),
            ["memory", id] => decode(id).map(Page::MemoryDetail).unwrap_or(Page::Tree),
            _ => Page::Tree,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::WhoAmI => "/".to_string(),
            Page::Tree => "/tree".to_string(),
            Page::Memories => "/memories".to_string(),
            Page::Profile(id) => format!("/profile/{}", encode_segment(id)),
            Page::MemoryDetail(id) => format!("/memory/{}", encode_segment(id)),
            Page::AddMemory => "/add-memory".to_string(),
            Page::CreateParent => "/create-parent".to_string(),
        }
    }

    /// Which top-level nav entry to highlight
    pub fn nav_section(&self) -> Option<NavSection> {
        match self {
            Page::Tree | Page::Profile(_) => Some(NavSection::Tree),
            Page::Memories | Page::MemoryDetail(_) | Page::AddMemory => Some(NavSection::Memories),
            Page::WhoAmI | Page::CreateParent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Tree,
    Memories,
}

fn decode(segment: &str) -> Option<String> {
    let decoded = percent_decode_str(segment).decode_utf8().ok()?.into_owned();
    (!decoded.trim().is_empty()).then_some(decoded)
}

/// Current page, shared through `AppContext`
#[derive(Clone, Copy)]
pub struct Router {
    current: RwSignal<Page>,
}

impl Router {
    /// Start from the browser location and follow back/forward
    pub fn from_location() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        let router = Self {
            current: RwSignal::new(Page::from_path(&path)),
        };
        let current = router.current;
        // Lives as long as the app; the handle is intentionally not removed
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
                current.set(Page::from_path(&path));
            }
        });
        router
    }

    pub fn page(&self) -> ReadSignal<Page> {
        self.current.read_only()
    }

    pub fn navigate(&self, page: Page) {
        if self.current.get_untracked() == page {
            return;
        }
        let path = page.path();
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if history
                .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
                .is_err()
            {
                log::warn!("history.pushState failed for {}", path);
            }
        }
        log::debug!("navigate to {}", path);
        self.current.set(page);
    }

    /// Swap the current entry (redirects shouldn't leave a back step)
    pub fn replace(&self, page: Page) {
        let path = page.path();
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
        self.current.set(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Page::from_path("/"), Page::WhoAmI);
        assert_eq!(Page::from_path(""), Page::WhoAmI);
        assert_eq!(Page::from_path("/tree"), Page::Tree);
        assert_eq!(Page::from_path("/memories/"), Page::Memories);
        assert_eq!(Page::from_path("/profile/42"), Page::Profile("42".to_string()));
        assert_eq!(Page::from_path("/memory/m-1?x=1"), Page::MemoryDetail("m-1".to_string()));
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(Page::from_path("/addMemory"), Page::AddMemory);
        assert_eq!(Page::from_path("/createParent"), Page::CreateParent);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_tree() {
        assert_eq!(Page::from_path("/nowhere"), Page::Tree);
        assert_eq!(Page::from_path("/profile"), Page::Tree);
        assert_eq!(Page::from_path("/profile/%20"), Page::Tree);
    }

    #[test]
    fn test_path_round_trip_with_escaping() {
        let page = Page::Profile("a b/c".to_string());
        assert_eq!(page.path(), "/profile/a%20b%2Fc");
        assert_eq!(Page::from_path(&page.path()), page);

        for page in [Page::WhoAmI, Page::Tree, Page::Memories, Page::AddMemory, Page::CreateParent] {
            assert_eq!(Page::from_path(&page.path()), page);
        }
    }

    #[test]
    fn test_nav_sections() {
        assert_eq!(Page::Profile("1".to_string()).nav_section(), Some(NavSection::Tree));
        assert_eq!(Page::AddMemory.nav_section(), Some(NavSection::Memories));
        assert_eq!(Page::WhoAmI.nav_section(), None);
    }
}
