//! Picked Files
//!
//! Turns an `<input type="file">` selection into in-memory uploads.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

use crate::error::{ApiError, ApiResult};
use crate::forms::{check_image_types, ImageUpload};

fn files_of(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Read every file, rejecting the whole selection if any one is not an image
pub async fn read_images(list: FileList) -> ApiResult<Vec<ImageUpload>> {
    let files = files_of(&list);
    let mime_types: Vec<String> = files.iter().map(|f| f.type_()).collect();
    check_image_types(mime_types.iter().map(String::as_str))?;

    let mut uploads = Vec::with_capacity(files.len());
    for (file, mime_type) in files.into_iter().zip(mime_types) {
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|_| ApiError::Encode(format!("could not read {}", file.name())))?;
        uploads.push(ImageUpload {
            file_name: file.name(),
            mime_type,
            bytes: Uint8Array::new(&buffer).to_vec(),
        });
    }
    log::debug!("read {} image(s)", uploads.len());
    Ok(uploads)
}
