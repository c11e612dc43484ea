//! Property entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use haven_core::types::{DbId, Timestamp};

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: DbId,
    pub name: String,
    pub price: Option<f64>,
    pub status: String,
    pub address: String,
    pub beds: Option<i32>,
    pub baths: Option<f64>,
    pub sqft: Option<i32>,
    pub property_type: Option<String>,
    pub lot_description: Option<String>,
    pub basement_description: Option<String>,
    pub description: Option<String>,
    pub listing_url: Option<String>,
    pub is_hot_deal: bool,
    /// Public URL of the cover image, if one has been uploaded.
    pub cover_image: Option<String>,
    /// Ordered public URLs of the gallery images.
    pub gallery_images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new property.
#[derive(Debug, Clone)]
pub struct CreateProperty {
    pub name: String,
    pub price: Option<f64>,
    pub status: String,
    pub address: String,
    pub beds: Option<i32>,
    pub baths: Option<f64>,
    pub sqft: Option<i32>,
    pub property_type: Option<String>,
    pub lot_description: Option<String>,
    pub basement_description: Option<String>,
    pub description: Option<String>,
    pub listing_url: Option<String>,
    pub is_hot_deal: bool,
    pub cover_image: Option<String>,
    pub gallery_images: Vec<String>,
}

/// DTO for updating an existing property.
///
/// `None` fields are left unchanged (partial update). The gallery list is
/// always supplied by the caller after reconciliation -- an empty vector
/// means "write an empty gallery", which is distinct from no change.
#[derive(Debug, Clone, Default)]
pub struct UpdateProperty {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub status: Option<String>,
    pub address: Option<String>,
    pub beds: Option<i32>,
    pub baths: Option<f64>,
    pub sqft: Option<i32>,
    pub property_type: Option<String>,
    pub lot_description: Option<String>,
    pub basement_description: Option<String>,
    pub description: Option<String>,
    pub listing_url: Option<String>,
    pub is_hot_deal: Option<bool>,
    pub cover_image: Option<String>,
    pub gallery_images: Option<Vec<String>>,
}
