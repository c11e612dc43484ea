//! Object storage: durable blob writes and public URL resolution.
//!
//! The [`ObjectStore`] trait is the seam between the HTTP layer and the
//! backing store. Production uses [`S3ObjectStore`] against any
//! S3-compatible endpoint; tests use [`MemoryObjectStore`].

mod ingest;
mod memory;
mod s3;

use async_trait::async_trait;
use haven_core::error::CoreError;

pub use ingest::{ingest_gallery, ingest_image, ImageUpload};
pub use memory::MemoryObjectStore;
pub use s3::{S3ObjectStore, StorageConfig};

/// Durable blob storage with public addressing.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `bytes` under `key` with upsert semantics: a retry that
    /// reuses a key overwrites instead of failing.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), CoreError>;

    /// Resolve the public URL for a stored key.
    fn public_url(&self, key: &str) -> String;
}
