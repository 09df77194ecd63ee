//! Memory Endpoints

use super::{multipart_form, ApiClient};
use crate::error::ApiResult;
use crate::forms::{ImageUpload, NewMemoryParams};
use crate::models::Memory;

impl ApiClient {
    /// `GET /memory/all`
    pub async fn list_memories(&self) -> ApiResult<Vec<Memory>> {
        self.get_json(self.config.endpoint("/memory/all")).await
    }

    /// `POST /memory/create` (multipart)
    pub async fn create_memory(&self, params: &NewMemoryParams, images: &[ImageUpload]) -> ApiResult<()> {
        let url = self.config.endpoint("/memory/create");
        let form = multipart_form(params, images)?;
        log::info!(
            "creating memory by {} about {} relative(s), {} photo(s)",
            params.creator_id,
            params.relatives_id.len(),
            images.len()
        );
        self.send(&url, self.http.post(&url).multipart(form)).await?;
        Ok(())
    }
}
