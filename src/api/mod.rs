//! Backend API Client
//!
//! Thin HTTP bindings to the family backend, organized by resource.
//! Any non-2xx response is an error; nothing is retried.

mod memory;
mod user;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::forms::ImageUpload;

/// Multipart field carrying each photo
const FILES_FIELD: &str = "files";
/// Multipart field carrying the JSON parameters
const PARAMS_FIELD: &str = "params";

/// Cheap to clone; the reqwest client is reference counted
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> ApiResult<T> {
        log::debug!("GET {}", url);
        let response = self.send(&url, self.http.get(&url)).await?;
        response.json::<T>().await.map_err(|e| {
            log::warn!("GET {} returned an unexpected body: {}", url, e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Send and reject non-2xx, keeping the body for the log
    async fn send(&self, url: &str, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            log::warn!("{} failed: {}", url, e);
            ApiError::from(e)
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} answered {}: {}", url, status.as_u16(), body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// `files` parts for every image, then the JSON `params` part
fn multipart_form<P: Serialize>(params: &P, images: &[ImageUpload]) -> ApiResult<Form> {
    let mut form = Form::new();
    for image in images {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        form = form.part(FILES_FIELD, part);
    }
    Ok(form.text(PARAMS_FIELD, params_json(params)?))
}

fn params_json<P: Serialize>(params: &P) -> ApiResult<String> {
    Ok(serde_json::to_string(params)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::NewMemoryParams;

    #[test]
    fn test_params_json_is_camel_case() {
        let params = NewMemoryParams {
            title: String::new(),
            text: "t".to_string(),
            relatives_id: vec!["a".to_string()],
            creator_id: "c".to_string(),
        };
        assert_eq!(
            params_json(&params).unwrap(),
            r#"{"title":"","text":"t","relativesId":["a"],"creatorId":"c"}"#
        );
    }

    #[test]
    fn test_multipart_rejects_bad_mime() {
        let images = vec![ImageUpload {
            file_name: "a.jpg".to_string(),
            mime_type: "not a mime".to_string(),
            bytes: vec![0],
        }];
        let result = multipart_form(&serde_json::json!({}), &images);
        assert!(matches!(result, Err(ApiError::Encode(_))));
    }
}
