//! Image ingestion: turn uploaded files into durably stored, publicly
//! addressable URLs.

use haven_core::error::CoreError;
use haven_core::naming::upload_key;

use crate::ObjectStore;

/// An uploaded file ready for ingestion.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original client-supplied file name.
    pub file_name: String,
    /// MIME type reported by the client.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Store a single upload and return its public URL.
///
/// On write failure the caller must abort the whole request: no record
/// write may follow a failed ingestion.
pub async fn ingest_image(store: &dyn ObjectStore, upload: ImageUpload) -> Result<String, CoreError> {
    ingest_at(store, chrono::Utc::now().timestamp_millis(), upload).await
}

/// Store a batch of gallery uploads concurrently, returning public URLs
/// in the original upload order.
///
/// Each task is tagged with its position before execution and the joined
/// results are re-sorted by that tag, so concurrency never reorders the
/// gallery. The position also offsets the key timestamp: same-named files
/// in one request get distinct keys.
pub async fn ingest_gallery(
    store: &dyn ObjectStore,
    uploads: Vec<ImageUpload>,
) -> Result<Vec<String>, CoreError> {
    let base_stamp = chrono::Utc::now().timestamp_millis();

    let tasks = uploads.into_iter().enumerate().map(|(position, upload)| async move {
        ingest_at(store, base_stamp + position as i64, upload)
            .await
            .map(|url| (position, url))
    });

    let mut tagged = futures::future::try_join_all(tasks).await?;
    tagged.sort_by_key(|(position, _)| *position);
    Ok(tagged.into_iter().map(|(_, url)| url).collect())
}

async fn ingest_at(
    store: &dyn ObjectStore,
    stamp_millis: i64,
    upload: ImageUpload,
) -> Result<String, CoreError> {
    let key = upload_key(stamp_millis, &upload.file_name);
    store.put(&key, upload.bytes, &upload.content_type).await?;
    Ok(store.public_url(&key))
}
