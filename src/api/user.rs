//! User Endpoints
//!
//! Directory reads, relative creation and profile updates.

use super::{multipart_form, ApiClient};
use crate::error::ApiResult;
use crate::forms::{ImageUpload, NewPersonParams};
use crate::models::Person;
use crate::profile_editor::{PhotoParams, ProfilePatch};

impl ApiClient {
    /// `GET /user/all`
    pub async fn list_users(&self) -> ApiResult<Vec<Person>> {
        self.get_json(self.config.endpoint("/user/all")).await
    }

    /// `GET /user/find/{id}`; the backend answers `null` for unknown ids
    pub async fn find_user(&self, id: &str) -> ApiResult<Option<Person>> {
        self.get_json(self.config.endpoint_with_id("/user/find", id)).await
    }

    /// `POST /user/create` (multipart)
    pub async fn create_user(&self, params: &NewPersonParams, images: &[ImageUpload]) -> ApiResult<()> {
        let url = self.config.endpoint("/user/create");
        let form = multipart_form(params, images)?;
        log::info!("creating relative {} {} with {} photo(s)", params.surname, params.name, images.len());
        self.send(&url, self.http.post(&url).multipart(form)).await?;
        Ok(())
    }

    /// `PATCH /user/update` with a JSON body replacing whole fields
    pub async fn update_user(&self, patch: &ProfilePatch) -> ApiResult<()> {
        let url = self.config.endpoint("/user/update");
        log::debug!("PATCH {} for {}", url, patch.id);
        self.send(&url, self.http.patch(&url).json(patch)).await?;
        Ok(())
    }

    /// `PATCH /user/update` (multipart) adding photos to a profile
    pub async fn upload_user_photos(&self, person_id: &str, images: &[ImageUpload]) -> ApiResult<()> {
        let url = self.config.endpoint("/user/update");
        let params = PhotoParams { id: person_id.to_string() };
        let form = multipart_form(&params, images)?;
        log::info!("uploading {} photo(s) for {}", images.len(), person_id);
        self.send(&url, self.http.patch(&url).multipart(form)).await?;
        Ok(())
    }
}
