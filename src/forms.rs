//! Form Drafts
//!
//! Client-side state and validation for the "new memory" and "new relative"
//! forms. A draft that fails validation never reaches the network.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::FormError;

/// Expected birth date input, e.g. 09.05.1945
pub const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

/// A picked photo, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// Accept a file selection only if every entry is an image
pub fn check_image_types<'a>(mime_types: impl IntoIterator<Item = &'a str>) -> Result<(), FormError> {
    if mime_types.into_iter().all(is_image_mime) {
        Ok(())
    } else {
        Err(FormError::NotAnImage)
    }
}

/// Add `id` if absent, remove it if present
pub fn toggle_id(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|v| v == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}

// ========================
// New memory
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDraft {
    pub title: String,
    pub text: String,
    pub relatives_id: Vec<String>,
    pub creator_id: String,
    pub images: Vec<ImageUpload>,
}

/// JSON `params` part of `POST /memory/create`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemoryParams {
    pub title: String,
    pub text: String,
    pub relatives_id: Vec<String>,
    pub creator_id: String,
}

impl MemoryDraft {
    pub fn with_creator(creator_id: &str) -> Self {
        Self {
            creator_id: creator_id.to_string(),
            ..Default::default()
        }
    }

    /// Relatives are checked before the creator
    pub fn validate(&self) -> Result<NewMemoryParams, FormError> {
        if self.relatives_id.is_empty() {
            return Err(FormError::MissingFields);
        }
        if self.creator_id.trim().is_empty() {
            return Err(FormError::MissingCreator);
        }
        Ok(NewMemoryParams {
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
            relatives_id: self.relatives_id.clone(),
            creator_id: self.creator_id.trim().to_string(),
        })
    }

    /// A new pick replaces the previous one; an empty pick clears it
    pub fn set_images(&mut self, images: Vec<ImageUpload>) {
        self.images = images;
    }

    /// Clear everything but the creator
    pub fn reset(&mut self) {
        *self = Self::with_creator(&self.creator_id);
    }
}

// ========================
// New relative
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonDraft {
    pub surname: String,
    pub name: String,
    pub middlename: String,
    pub birth_date: String,
    pub parents_id: Vec<String>,
    pub images: Vec<ImageUpload>,
}

/// JSON `params` part of `POST /user/create`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPersonParams {
    pub name: String,
    pub surname: String,
    pub middlename: String,
    pub birth_date: String,
    pub parents_id: Vec<String>,
}

impl PersonDraft {
    pub fn set_images(&mut self, images: Vec<ImageUpload>) {
        self.images = images;
    }

    pub fn validate(&self) -> Result<NewPersonParams, FormError> {
        let surname = self.surname.trim();
        let name = self.name.trim();
        let birth_date = self.birth_date.trim();
        if surname.is_empty() || name.is_empty() || birth_date.is_empty() {
            return Err(FormError::MissingFields);
        }
        NaiveDate::parse_from_str(birth_date, BIRTH_DATE_FORMAT)
            .map_err(|_| FormError::InvalidBirthDate)?;
        Ok(NewPersonParams {
            name: name.to_string(),
            surname: surname.to_string(),
            middlename: self.middlename.trim().to_string(),
            birth_date: birth_date.to_string(),
            parents_id: self.parents_id.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, mime: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            mime_type: mime.to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_memory_without_relatives_rejected() {
        let draft = MemoryDraft {
            title: "Дача".to_string(),
            text: "Лето".to_string(),
            ..MemoryDraft::with_creator("u1")
        };
        assert_eq!(draft.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_memory_without_creator_rejected() {
        let mut draft = MemoryDraft::default();
        toggle_id(&mut draft.relatives_id, "u2");
        assert_eq!(draft.validate(), Err(FormError::MissingCreator));
    }

    #[test]
    fn test_memory_params_wire_shape() {
        let mut draft = MemoryDraft::with_creator("u1");
        draft.title = " Дача ".to_string();
        draft.text = "Лето".to_string();
        toggle_id(&mut draft.relatives_id, "u2");
        toggle_id(&mut draft.relatives_id, "u3");
        let params = draft.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "title": "Дача",
                "text": "Лето",
                "relativesId": ["u2", "u3"],
                "creatorId": "u1"
            })
        );
    }

    #[test]
    fn test_memory_reset_keeps_creator() {
        let mut draft = MemoryDraft::with_creator("u1");
        draft.title = "x".to_string();
        draft.images.push(image("a.jpg", "image/jpeg"));
        toggle_id(&mut draft.relatives_id, "u2");
        draft.reset();
        assert_eq!(draft, MemoryDraft::with_creator("u1"));
    }

    #[test]
    fn test_image_pick_replaces_previous_pick() {
        let mut memory = MemoryDraft::with_creator("u1");
        memory.set_images(vec![image("a.jpg", "image/jpeg"), image("b.png", "image/png")]);
        memory.set_images(vec![image("c.gif", "image/gif")]);
        assert_eq!(memory.images.len(), 1);
        assert_eq!(memory.images[0].file_name, "c.gif");

        // A rejected selection arrives as an empty pick
        let mut person = PersonDraft::default();
        person.set_images(vec![image("a.jpg", "image/jpeg")]);
        person.set_images(Vec::new());
        assert!(person.images.is_empty());
    }

    #[test]
    fn test_toggle_id_twice_is_noop() {
        let mut ids = vec!["a".to_string()];
        toggle_id(&mut ids, "b");
        toggle_id(&mut ids, "b");
        assert_eq!(ids, vec!["a".to_string()]);
    }

    #[test]
    fn test_image_selection_all_or_nothing() {
        assert!(check_image_types(["image/png", "IMAGE/JPEG"]).is_ok());
        assert_eq!(check_image_types(["image/png", "application/pdf"]), Err(FormError::NotAnImage));
        assert!(check_image_types(Vec::<&str>::new()).is_ok());
        assert!(is_image_mime(&image("a.heic", "image/heic").mime_type));
        assert!(!is_image_mime(&image("a.txt", "text/plain").mime_type));
    }

    #[test]
    fn test_person_requires_names_and_date() {
        let mut draft = PersonDraft {
            surname: "Иванов".to_string(),
            name: "Иван".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(FormError::MissingFields));

        draft.birth_date = "1990-01-31".to_string();
        assert_eq!(draft.validate(), Err(FormError::InvalidBirthDate));

        draft.birth_date = "31.02.1990".to_string();
        assert_eq!(draft.validate(), Err(FormError::InvalidBirthDate));

        draft.birth_date = "31.01.1990".to_string();
        toggle_id(&mut draft.parents_id, "p1");
        let params = draft.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "name": "Иван",
                "surname": "Иванов",
                "middlename": "",
                "birthDate": "31.01.1990",
                "parentsId": ["p1"]
            })
        );
    }

    #[test]
    fn test_person_reset() {
        let mut draft = PersonDraft {
            name: "x".to_string(),
            ..Default::default()
        };
        draft.reset();
        assert_eq!(draft, PersonDraft::default());
    }
}
