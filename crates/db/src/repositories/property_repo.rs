//! Repository for the `properties` table.

use sqlx::PgPool;

use haven_core::types::DbId;

use crate::models::property::{CreateProperty, Property, UpdateProperty};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, status, address, beds, baths, sqft, property_type, \
     lot_description, basement_description, description, listing_url, is_hot_deal, \
     cover_image, gallery_images, created_at, updated_at";

/// Listing order for [`PropertyRepo::list`]. A configuration choice, not a
/// contract: clients must not rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    Asc,
    #[default]
    Desc,
}

/// Provides CRUD operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties (name, price, status, address, beds, baths, sqft,
                property_type, lot_description, basement_description, description,
                listing_url, is_hot_deal, cover_image, gallery_images)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.status)
            .bind(&input.address)
            .bind(input.beds)
            .bind(input.baths)
            .bind(input.sqft)
            .bind(&input.property_type)
            .bind(&input.lot_description)
            .bind(&input.basement_description)
            .bind(&input.description)
            .bind(&input.listing_url)
            .bind(input.is_hot_deal)
            .bind(&input.cover_image)
            .bind(&input.gallery_images)
            .fetch_one(pool)
            .await
    }

    /// Find a property by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all properties ordered by id.
    pub async fn list(pool: &PgPool, order: ListOrder) -> Result<Vec<Property>, sqlx::Error> {
        let direction = match order {
            ListOrder::Asc => "ASC",
            ListOrder::Desc => "DESC",
        };
        let query = format!("SELECT {COLUMNS} FROM properties ORDER BY id {direction}");
        sqlx::query_as::<_, Property>(&query).fetch_all(pool).await
    }

    /// Update a property. Only non-`None` fields in `input` are applied;
    /// omitted fields keep their stored values.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                status = COALESCE($4, status),
                address = COALESCE($5, address),
                beds = COALESCE($6, beds),
                baths = COALESCE($7, baths),
                sqft = COALESCE($8, sqft),
                property_type = COALESCE($9, property_type),
                lot_description = COALESCE($10, lot_description),
                basement_description = COALESCE($11, basement_description),
                description = COALESCE($12, description),
                listing_url = COALESCE($13, listing_url),
                is_hot_deal = COALESCE($14, is_hot_deal),
                cover_image = COALESCE($15, cover_image),
                gallery_images = COALESCE($16, gallery_images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.status)
            .bind(&input.address)
            .bind(input.beds)
            .bind(input.baths)
            .bind(input.sqft)
            .bind(&input.property_type)
            .bind(&input.lot_description)
            .bind(&input.basement_description)
            .bind(&input.description)
            .bind(&input.listing_url)
            .bind(input.is_hot_deal)
            .bind(&input.cover_image)
            .bind(&input.gallery_images)
            .fetch_optional(pool)
            .await
    }

    /// Delete a property by ID. Returns `true` if a row was removed.
    ///
    /// Associated image blobs are not touched; see DESIGN.md on orphaned
    /// objects.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
