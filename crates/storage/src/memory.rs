//! In-memory [`ObjectStore`] used as a test fake.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use haven_core::error::CoreError;

use crate::ObjectStore;

/// Non-durable store keeping objects in a map. Never used as the
/// production record of anything; it exists so the HTTP layer can be
/// exercised without network access.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` has been stored.
    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), CoreError> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (bytes, content_type.to_string()));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://storage.test/property-images/{key}")
    }
}
