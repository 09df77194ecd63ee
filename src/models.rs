//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Shown when a person has no usable photo
pub const USER_PLACEHOLDER: &str =
    "https://family-storage.storage.yandexcloud.net/images/user-placeholder.jpg";
/// Shown when a memory has no usable photo
pub const MEMORY_PLACEHOLDER: &str =
    "https://family-storage.storage.yandexcloud.net/images/memory-placeholder.jpg";

/// Person data structure (backend `User`)
///
/// Only `id` is mandatory on the wire; everything else decodes to empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub surname: String,
    #[serde(default, deserialize_with = "nullable")]
    pub middlename: String,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub live_position: String,
    #[serde(default, deserialize_with = "nullable")]
    pub hobbies: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub specializations: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub parents_id: Vec<String>,
    /// Memories this person is a subject of
    #[serde(default, deserialize_with = "nullable")]
    pub memories: Vec<Memory>,
    /// Memories this person wrote
    #[serde(default, deserialize_with = "nullable")]
    pub created_memories: Vec<Memory>,
}

impl Person {
    /// "Surname Name Middlename", skipping empty parts
    pub fn full_name(&self) -> String {
        [&self.surname, &self.name, &self.middlename]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First non-blank photo
    pub fn avatar(&self) -> Option<&str> {
        first_image(&self.images)
    }

    pub fn avatar_or_placeholder(&self) -> &str {
        self.avatar().unwrap_or(USER_PLACEHOLDER)
    }

    /// Exact match on trimmed name parts
    pub fn matches_name(&self, surname: &str, name: &str, middlename: &str) -> bool {
        self.surname.trim() == surname
            && self.name.trim() == name
            && self.middlename.trim() == middlename
    }
}

/// Memory data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub creator_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub creator: Person,
    #[serde(default, deserialize_with = "nullable")]
    pub relatives: Vec<Person>,
}

impl Memory {
    pub fn has_relative(&self, person_id: &str) -> bool {
        self.relatives.iter().any(|r| r.id == person_id)
    }

    pub fn cover(&self) -> Option<&str> {
        first_image(&self.images)
    }

    /// Non-empty title, if any
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Slides for the detail carousel; never empty
    pub fn gallery(&self) -> Vec<String> {
        let images: Vec<String> = self
            .images
            .iter()
            .filter(|img| !img.trim().is_empty())
            .cloned()
            .collect();
        if images.is_empty() {
            vec![MEMORY_PLACEHOLDER.to_string()]
        } else {
            images
        }
    }

    /// "Name" or "Name и еще N" for list cards
    pub fn about_summary(&self) -> String {
        match self.relatives.split_first() {
            None => String::new(),
            Some((first, [])) => first.name.clone(),
            Some((first, rest)) => format!("{} и еще {}", first.name, rest.len()),
        }
    }
}

/// Treat an explicit JSON `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn first_image(images: &[String]) -> Option<&str> {
    images.first().map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Builders shared by unit tests across the crate
#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Memory, Person};

    pub fn make_person(id: &str, surname: &str, name: &str, middlename: &str) -> Person {
        Person {
            id: id.to_string(),
            surname: surname.to_string(),
            name: name.to_string(),
            middlename: middlename.to_string(),
            ..Default::default()
        }
    }

    pub fn make_memory(id: &str, relative_ids: &[&str]) -> Memory {
        Memory {
            id: id.to_string(),
            text: format!("Memory {}", id),
            relatives: relative_ids
                .iter()
                .map(|rid| Person {
                    id: rid.to_string(),
                    name: rid.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::make_person;

    #[test]
    fn test_person_decodes_sparse_json() {
        let json = r#"{"id":"u1","name":"Андрей","parentsId":["p1","p2"],"birthDate":"01.02.1990"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id, "u1");
        assert_eq!(person.parents_id, vec!["p1", "p2"]);
        assert_eq!(person.birth_date, "01.02.1990");
        assert!(person.hobbies.is_empty());
        assert!(person.memories.is_empty());
    }

    #[test]
    fn test_person_without_id_is_rejected() {
        let result: Result<Person, _> = serde_json::from_str(r#"{"name":"X"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{"id":"u1","middlename":null,"images":null,"memories":null}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.middlename, "");
        assert!(person.images.is_empty());
    }

    #[test]
    fn test_full_name_skips_empty_parts() {
        let person = make_person("1", "Задворнов", "Андрей", "");
        assert_eq!(person.full_name(), "Задворнов Андрей");
        assert_eq!(Person::default().full_name(), "");
    }

    #[test]
    fn test_matches_name_trims_stored_parts() {
        let person = make_person("1", " Лобов ", "Юрий ", "Александрович");
        assert!(person.matches_name("Лобов", "Юрий", "Александрович"));
        assert!(!person.matches_name("Лобова", "Юрий", "Александрович"));
    }

    #[test]
    fn test_avatar_ignores_blank_first_image() {
        let mut person = make_person("1", "A", "B", "C");
        assert_eq!(person.avatar_or_placeholder(), USER_PLACEHOLDER);
        person.images = vec!["  ".to_string()];
        assert_eq!(person.avatar(), None);
        person.images = vec!["https://img/1.jpg".to_string()];
        assert_eq!(person.avatar(), Some("https://img/1.jpg"));
    }

    #[test]
    fn test_memory_decodes_nested_people() {
        let json = r#"{
            "id": "m1",
            "text": "Лето на даче",
            "creatorId": "u1",
            "creator": {"id": "u1", "name": "Андрей"},
            "relatives": [{"id": "u2", "name": "Мария"}, {"id": "u3", "name": "Дарья"}]
        }"#;
        let memory: Memory = serde_json::from_str(json).unwrap();
        assert_eq!(memory.title, None);
        assert!(memory.images.is_empty());
        assert_eq!(memory.creator.name, "Андрей");
        assert!(memory.has_relative("u3"));
        assert!(!memory.has_relative("u1"));
        assert_eq!(memory.about_summary(), "Мария и еще 1");
    }

    #[test]
    fn test_memory_gallery_falls_back_to_placeholder() {
        let mut memory = Memory::default();
        assert_eq!(memory.gallery(), vec![MEMORY_PLACEHOLDER.to_string()]);
        memory.images = vec!["a.jpg".to_string(), "".to_string(), "b.jpg".to_string()];
        assert_eq!(memory.gallery(), vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn test_display_title_hides_blank() {
        let mut memory = Memory::default();
        memory.title = Some("   ".to_string());
        assert_eq!(memory.display_title(), None);
        memory.title = Some("Дача".to_string());
        assert_eq!(memory.display_title(), Some("Дача"));
    }
}
