//! Profile Editing
//!
//! Draft state for the editable profile sections and the partial update
//! bodies sent to `PATCH /user/update`. Every update replaces a whole field.

use serde::Serialize;

use crate::models::Person;

/// String-list sections a person can edit on their profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Hobbies,
    Specializations,
    Achievements,
}

impl ListField {
    pub const ALL: [ListField; 3] = [ListField::Hobbies, ListField::Specializations, ListField::Achievements];

    /// JSON key on the wire
    pub fn key(&self) -> &'static str {
        match self {
            ListField::Hobbies => "hobbies",
            ListField::Specializations => "specializations",
            ListField::Achievements => "achievements",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListField::Hobbies => "Хобби",
            ListField::Specializations => "Специализации",
            ListField::Achievements => "Достижения",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ListField::Hobbies => "Название хобби",
            ListField::Specializations => "Название специализации",
            ListField::Achievements => "Название достижения",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ListField::Hobbies => "Хобби успешно сохранены",
            ListField::Specializations => "Специализации успешно сохранены",
            ListField::Achievements => "Достижения успешно сохранены",
        }
    }

    pub fn read<'a>(&self, person: &'a Person) -> &'a [String] {
        match self {
            ListField::Hobbies => &person.hobbies,
            ListField::Specializations => &person.specializations,
            ListField::Achievements => &person.achievements,
        }
    }
}

/// Local edit state of one list section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDraft {
    pub editing: bool,
    pub items: Vec<String>,
    /// The "new entry" input row is open
    pub adding: bool,
    pub new_item: String,
}

impl ListDraft {
    pub fn begin_edit(&mut self, source: &[String]) {
        self.editing = true;
        self.items = source.to_vec();
        self.adding = false;
        self.new_item.clear();
    }

    pub fn start_adding(&mut self) {
        if self.editing {
            self.adding = true;
        }
    }

    /// Append the trimmed input; blank input keeps the row open
    pub fn confirm_add(&mut self) -> bool {
        let value = self.new_item.trim();
        if value.is_empty() {
            return false;
        }
        self.items.push(value.to_string());
        self.new_item.clear();
        self.adding = false;
        true
    }

    pub fn cancel_add(&mut self) {
        self.new_item.clear();
        self.adding = false;
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Leave edit mode, discarding local changes
    pub fn reset(&mut self, source: &[String]) {
        self.editing = false;
        self.items = source.to_vec();
        self.adding = false;
        self.new_item.clear();
    }

    /// Empty sections are hidden on other people's profiles; on your own
    /// profile they stay visible so the first entry can be added
    pub fn is_visible(&self, source: &[String], own_profile: bool) -> bool {
        own_profile || self.editing || !source.is_empty()
    }
}

/// Partial update body; only the changed field is serialized
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specializations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_position: Option<String>,
}

impl ProfilePatch {
    pub fn list(person_id: &str, field: ListField, items: Vec<String>) -> Self {
        let mut patch = Self {
            id: person_id.to_string(),
            ..Default::default()
        };
        match field {
            ListField::Hobbies => patch.hobbies = Some(items),
            ListField::Specializations => patch.specializations = Some(items),
            ListField::Achievements => patch.achievements = Some(items),
        }
        patch
    }

    pub fn live_position(person_id: &str, text: &str) -> Self {
        Self {
            id: person_id.to_string(),
            live_position: Some(text.trim().to_string()),
            ..Default::default()
        }
    }

    /// Write the patched values into a cached copy of the person
    pub fn apply(&self, person: &mut Person) {
        if let Some(items) = &self.hobbies {
            person.hobbies = items.clone();
        }
        if let Some(items) = &self.specializations {
            person.specializations = items.clone();
        }
        if let Some(items) = &self.achievements {
            person.achievements = items.clone();
        }
        if let Some(text) = &self.live_position {
            person.live_position = text.clone();
        }
    }
}

/// `params` part of the multipart photo upload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoParams {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::make_person;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_draft_edit_cycle() {
        let source = strings(&["Рыбалка"]);
        let mut draft = ListDraft::default();
        assert!(draft.is_visible(&source, false));
        assert!(!draft.is_visible(&[], false));

        draft.begin_edit(&source);
        draft.start_adding();
        draft.new_item = "  Шахматы ".to_string();
        assert!(draft.confirm_add());
        assert_eq!(draft.items, strings(&["Рыбалка", "Шахматы"]));
        assert!(!draft.adding);

        draft.remove(0);
        assert_eq!(draft.items, strings(&["Шахматы"]));
        draft.remove(5);
        assert_eq!(draft.items.len(), 1);

        draft.reset(&source);
        assert!(!draft.editing);
        assert_eq!(draft.items, source);
    }

    #[test]
    fn test_blank_item_not_added() {
        let mut draft = ListDraft::default();
        draft.begin_edit(&[]);
        draft.start_adding();
        draft.new_item = "   ".to_string();
        assert!(!draft.confirm_add());
        assert!(draft.items.is_empty());
        assert!(draft.adding);
        draft.cancel_add();
        assert!(!draft.adding);
        assert!(draft.new_item.is_empty());
    }

    #[test]
    fn test_start_adding_requires_edit_mode() {
        let mut draft = ListDraft::default();
        draft.start_adding();
        assert!(!draft.adding);
    }

    #[test]
    fn test_patch_serializes_only_changed_field() {
        let patch = ProfilePatch::list("u1", ListField::Achievements, strings(&["КМС"]));
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"id": "u1", "achievements": ["КМС"]}));

        let patch = ProfilePatch::live_position("u1", " Инженер ");
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"id": "u1", "livePosition": "Инженер"}));
    }

    #[test]
    fn test_patch_apply_updates_cached_person() {
        let mut person = make_person("u1", "S", "N", "M");
        person.hobbies = strings(&["old"]);
        ProfilePatch::list("u1", ListField::Hobbies, strings(&["new"])).apply(&mut person);
        assert_eq!(ListField::Hobbies.read(&person), strings(&["new"]).as_slice());
        assert!(person.specializations.is_empty());
    }

    #[test]
    fn test_empty_section_editable_on_own_profile() {
        let mut draft = ListDraft::default();
        assert!(draft.is_visible(&[], true));

        draft.begin_edit(&[]);
        draft.start_adding();
        draft.new_item = "Шахматы".to_string();
        assert!(draft.confirm_add());
        assert!(draft.is_visible(&[], false));
        assert_eq!(draft.items, strings(&["Шахматы"]));
    }

    #[test]
    fn test_field_keys_match_wire_names() {
        let keys: Vec<_> = ListField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["hobbies", "specializations", "achievements"]);
    }
}
