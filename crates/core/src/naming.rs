//! Storage key naming for uploaded images.

/// Reduce an uploaded file name to a safe storage key component.
///
/// Strips any client-supplied directory prefix and replaces whitespace
/// runs with underscores. Falls back to `"file"` when nothing usable
/// remains.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned = base.split_whitespace().collect::<Vec<_>>().join("_");
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

/// Build the object storage key for an upload.
///
/// Convention: `{unix_millis}_{sanitized_name}`. The timestamp keeps keys
/// collision-resistant across requests; a retry that reuses a key relies
/// on the store's upsert semantics.
pub fn upload_key(stamp_millis: i64, original_name: &str) -> String {
    format!("{stamp_millis}_{}", sanitize_file_name(original_name))
}
