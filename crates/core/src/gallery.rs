//! Gallery reconciliation: computes the next stored image list for a
//! property update.
//!
//! Three inputs may each be present or absent: the stored list (baseline),
//! a client-declared ordering instruction, and URLs ingested during the
//! same request. The ordering instruction, when supplied, is authoritative
//! both for order and for which previously stored images survive.

use std::collections::HashSet;

/// Parse a client-supplied image-list field (a JSON array of strings).
///
/// Anything that does not parse as `["url", ...]` is treated as absent,
/// not as an error: a malformed instruction must never fail the update.
pub fn parse_url_list(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).ok()
}

/// Compute the final ordered gallery list for an update.
///
/// - `order`: desired final order of existing images. Replaces the
///   baseline when present; baseline URLs it omits are dropped.
/// - `removals`: baseline URLs to exclude, applied regardless of `order`.
/// - `new_urls`: URLs ingested in this request, appended in upload order.
///
/// The result never contains duplicates (first occurrence wins). An empty
/// result is a valid final state and must be written by the caller.
pub fn reconcile(
    baseline: &[String],
    order: Option<Vec<String>>,
    removals: Option<Vec<String>>,
    new_urls: Vec<String>,
) -> Vec<String> {
    let mut kept = match order {
        Some(order) => order,
        None => baseline.to_vec(),
    };

    if let Some(removals) = removals {
        let removed: HashSet<&str> = removals.iter().map(String::as_str).collect();
        kept.retain(|url| !removed.contains(url.as_str()));
    }

    kept.extend(new_urls);

    let mut seen = HashSet::new();
    kept.retain(|url| seen.insert(url.clone()));
    kept
}
