//! Handlers for the `/properties` resource.
//!
//! Create and update accept multipart bodies: scalar fields as text parts,
//! an optional `coverImage` file, repeated `galleryImages` files, and on
//! update the `gallery_order` / `removed_images` instruction fields. All
//! image ingestion completes (or fails the request) before any record
//! write, so a storage failure never leaves a partially applied record.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use haven_core::error::CoreError;
use haven_core::gallery::{parse_url_list, reconcile};
use haven_core::listing::{non_empty, parse_count, parse_decimal, parse_flag, validate_status};
use haven_core::types::DbId;
use haven_db::models::property::{CreateProperty, Property, UpdateProperty};
use haven_db::repositories::PropertyRepo;
use haven_storage::{ingest_gallery, ingest_image};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::multipart::PropertyForm;
use crate::state::AppState;

/// Response body for `DELETE /properties/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /properties
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Property>>> {
    let properties = PropertyRepo::list(&state.pool, state.config.list_order).await?;
    Ok(Json(properties))
}

/// GET /public/properties
///
/// Same payload as the admin listing (the entity has no sensitive fields),
/// but mounted separately so the public CORS policy applies.
pub async fn public_list(State(state): State<AppState>) -> AppResult<Json<Vec<Property>>> {
    let properties = PropertyRepo::list(&state.pool, state.config.list_order).await?;
    Ok(Json(properties))
}

/// GET /properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;
    Ok(Json(property))
}

/// POST /properties
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Property>)> {
    let form = PropertyForm::from_multipart(multipart).await?;
    let mut input = build_create_input(&form)?;
    let PropertyForm { cover, gallery, .. } = form;

    if let Some(upload) = cover {
        input.cover_image = Some(ingest_image(state.store.as_ref(), upload).await?);
    }
    input.gallery_images = ingest_gallery(state.store.as_ref(), gallery).await?;

    let property = PropertyRepo::create(&state.pool, &input).await?;
    tracing::info!(id = property.id, "Property created");
    Ok((StatusCode::CREATED, Json(property)))
}

/// PUT /properties/{id}
///
/// Partial update: omitted scalar fields keep their stored values. The
/// gallery is reconciled from the stored list (baseline), the optional
/// `gallery_order` / `removed_images` instructions, and files uploaded in
/// this request; the reconciled list is always written, even when empty.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Property>> {
    let form = PropertyForm::from_multipart(multipart).await?;

    let existing = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;

    let mut input = build_update_input(&form)?;
    let order = form.field("gallery_order").and_then(parse_url_list);
    let removals = form.field("removed_images").and_then(parse_url_list);
    let PropertyForm { cover, gallery, .. } = form;

    if let Some(upload) = cover {
        input.cover_image = Some(ingest_image(state.store.as_ref(), upload).await?);
    }
    let new_urls = ingest_gallery(state.store.as_ref(), gallery).await?;
    input.gallery_images = Some(reconcile(&existing.gallery_images, order, removals, new_urls));

    let property = PropertyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;
    Ok(Json(property))
}

/// DELETE /properties/{id}
///
/// Removes the record only; image blobs stay in the object store (see
/// DESIGN.md on orphaned objects).
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    let deleted = PropertyRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Field normalization
// ---------------------------------------------------------------------------

/// Assemble a [`CreateProperty`] from form fields.
///
/// `name`, `status`, and `address` are required; other scalars become null
/// when absent or empty. Malformed numeric input is rejected.
fn build_create_input(form: &PropertyForm) -> Result<CreateProperty, AppError> {
    let name = required(form, "name")?;
    let status = required(form, "status")?;
    validate_status(&status).map_err(AppError::Core)?;
    let address = required(form, "address")?;

    Ok(CreateProperty {
        name,
        status,
        address,
        price: optional_decimal(form, "price")?,
        beds: optional_count(form, "beds")?,
        baths: optional_decimal(form, "baths")?,
        sqft: optional_count(form, "sqft")?,
        property_type: optional_text(form, "property_type")
            .or_else(|| optional_text(form, "type")),
        lot_description: optional_text(form, "lot_description"),
        basement_description: optional_text(form, "basement_description"),
        description: optional_text(form, "description"),
        listing_url: optional_text(form, "listing_url"),
        is_hot_deal: form.field("is_hot_deal").map(parse_flag).unwrap_or(false),
        cover_image: None,
        gallery_images: vec![],
    })
}

/// Assemble an [`UpdateProperty`] from form fields.
///
/// Only fields present in the form (with a non-empty value) are set;
/// everything else stays `None` and the repository leaves the stored
/// value untouched. The caller fills in cover/gallery after ingestion.
fn build_update_input(form: &PropertyForm) -> Result<UpdateProperty, AppError> {
    let status = match optional_text(form, "status") {
        Some(status) => {
            validate_status(&status).map_err(AppError::Core)?;
            Some(status)
        }
        None => None,
    };

    Ok(UpdateProperty {
        name: optional_text(form, "name"),
        status,
        address: optional_text(form, "address"),
        price: optional_decimal(form, "price")?,
        beds: optional_count(form, "beds")?,
        baths: optional_decimal(form, "baths")?,
        sqft: optional_count(form, "sqft")?,
        property_type: optional_text(form, "property_type")
            .or_else(|| optional_text(form, "type")),
        lot_description: optional_text(form, "lot_description"),
        basement_description: optional_text(form, "basement_description"),
        description: optional_text(form, "description"),
        listing_url: optional_text(form, "listing_url"),
        is_hot_deal: form.field("is_hot_deal").map(parse_flag),
        cover_image: None,
        gallery_images: None,
    })
}

fn required(form: &PropertyForm, field: &'static str) -> Result<String, AppError> {
    form.field(field)
        .and_then(non_empty)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Field '{field}' is required"
            )))
        })
}

fn optional_text(form: &PropertyForm, field: &str) -> Option<String> {
    form.field(field).and_then(non_empty).map(str::to_string)
}

fn optional_decimal(form: &PropertyForm, field: &'static str) -> Result<Option<f64>, AppError> {
    form.field(field)
        .and_then(non_empty)
        .map(|raw| parse_decimal(field, raw))
        .transpose()
        .map_err(AppError::Core)
}

fn optional_count(form: &PropertyForm, field: &'static str) -> Result<Option<i32>, AppError> {
    form.field(field)
        .and_then(non_empty)
        .map(|raw| parse_count(field, raw))
        .transpose()
        .map_err(AppError::Core)
}
