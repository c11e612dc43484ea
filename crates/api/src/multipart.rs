//! Multipart form decoding for property create/update requests.
//!
//! Requests carry scalar columns as text fields, an optional `coverImage`
//! file, repeated `galleryImages` files, and the gallery instruction
//! fields `gallery_order` / `removed_images` (JSON string arrays).

use std::collections::HashMap;

use axum::extract::multipart::{Field, Multipart};

use haven_storage::ImageUpload;

use crate::error::AppError;

/// Decoded multipart body of a property create/update request.
#[derive(Default)]
pub struct PropertyForm {
    /// Scalar text fields by field name.
    pub fields: HashMap<String, String>,
    /// Uploaded cover file, if any.
    pub cover: Option<ImageUpload>,
    /// Uploaded gallery files in upload order.
    pub gallery: Vec<ImageUpload>,
}

impl PropertyForm {
    /// Drain a multipart stream into a [`PropertyForm`].
    ///
    /// File parts with no filename or no bytes (an empty file input) are
    /// ignored rather than rejected.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = PropertyForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "coverImage" | "cover_image" => {
                    if let Some(upload) = read_file(field).await? {
                        form.cover = Some(upload);
                    }
                }
                "galleryImages" | "gallery_images" => {
                    if let Some(upload) = read_file(field).await? {
                        form.gallery.push(upload);
                    }
                }
                _ => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Scalar field accessor.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Read one file part. Returns `None` for empty submissions (no filename
/// or zero bytes).
async fn read_file(field: Field<'_>) -> Result<Option<ImageUpload>, AppError> {
    let file_name = match field.file_name() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Ok(None),
    };
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(ImageUpload {
        file_name,
        content_type,
        bytes: bytes.to_vec(),
    }))
}
