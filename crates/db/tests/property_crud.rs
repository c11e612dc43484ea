//! Integration tests for the property repository against a real database.
//!
//! Covers insert/fetch round-trips, partial update semantics, explicit
//! empty-gallery writes, list ordering, and deletion.

use sqlx::PgPool;

use haven_db::models::property::{CreateProperty, UpdateProperty};
use haven_db::repositories::{ListOrder, PropertyRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_property(name: &str) -> CreateProperty {
    CreateProperty {
        name: name.to_string(),
        price: Some(450_000.0),
        status: "active".to_string(),
        address: "12 Lake Rd".to_string(),
        beds: Some(3),
        baths: Some(2.5),
        sqft: Some(1850),
        property_type: Some("single-family".to_string()),
        lot_description: None,
        basement_description: None,
        description: Some("Bright lakeside home".to_string()),
        listing_url: None,
        is_hot_deal: false,
        cover_image: Some("https://img.test/1_a.jpg".to_string()),
        gallery_images: vec![
            "https://img.test/1_b.jpg".to_string(),
            "https://img.test/1_c.jpg".to_string(),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_then_fetch_round_trips(pool: PgPool) {
    let created = PropertyRepo::create(&pool, &new_property("Lakeview House"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let fetched = PropertyRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created property must be fetchable");

    assert_eq!(fetched.name, "Lakeview House");
    assert_eq!(fetched.price, Some(450_000.0));
    assert_eq!(fetched.status, "active");
    assert_eq!(fetched.address, "12 Lake Rd");
    assert_eq!(fetched.beds, Some(3));
    assert_eq!(fetched.baths, Some(2.5));
    assert_eq!(fetched.sqft, Some(1850));
    assert_eq!(fetched.cover_image.as_deref(), Some("https://img.test/1_a.jpg"));
    assert_eq!(fetched.gallery_images.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn optional_fields_default_to_null(pool: PgPool) {
    let input = CreateProperty {
        name: "Bare Minimum".to_string(),
        price: None,
        status: "pending".to_string(),
        address: "1 Main St".to_string(),
        beds: None,
        baths: None,
        sqft: None,
        property_type: None,
        lot_description: None,
        basement_description: None,
        description: None,
        listing_url: None,
        is_hot_deal: false,
        cover_image: None,
        gallery_images: vec![],
    };
    let created = PropertyRepo::create(&pool, &input).await.unwrap();

    assert_eq!(created.price, None);
    assert_eq!(created.cover_image, None);
    assert!(created.gallery_images.is_empty());
    assert!(!created.is_hot_deal);
}

#[sqlx::test(migrations = "./migrations")]
async fn partial_update_preserves_omitted_fields(pool: PgPool) {
    let created = PropertyRepo::create(&pool, &new_property("Keep Me")).await.unwrap();

    let input = UpdateProperty {
        price: Some(425_000.0),
        status: Some("pending".to_string()),
        ..Default::default()
    };
    let updated = PropertyRepo::update(&pool, created.id, &input)
        .await
        .unwrap()
        .expect("row must exist");

    assert_eq!(updated.price, Some(425_000.0));
    assert_eq!(updated.status, "pending");
    // Everything omitted keeps its stored value.
    assert_eq!(updated.name, "Keep Me");
    assert_eq!(updated.address, "12 Lake Rd");
    assert_eq!(updated.beds, Some(3));
    assert_eq!(updated.cover_image, created.cover_image);
    assert_eq!(updated.gallery_images, created.gallery_images);
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_gallery_is_written_not_skipped(pool: PgPool) {
    let created = PropertyRepo::create(&pool, &new_property("Gallery Wipe")).await.unwrap();
    assert_eq!(created.gallery_images.len(), 2);

    let input = UpdateProperty {
        gallery_images: Some(vec![]),
        ..Default::default()
    };
    let updated = PropertyRepo::update(&pool, created.id, &input)
        .await
        .unwrap()
        .expect("row must exist");

    assert!(updated.gallery_images.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn update_unknown_id_returns_none(pool: PgPool) {
    let input = UpdateProperty {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = PropertyRepo::update(&pool, 999_999, &input).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_orders_by_id(pool: PgPool) {
    let first = PropertyRepo::create(&pool, &new_property("First")).await.unwrap();
    let second = PropertyRepo::create(&pool, &new_property("Second")).await.unwrap();

    let desc = PropertyRepo::list(&pool, ListOrder::Desc).await.unwrap();
    assert_eq!(desc.first().unwrap().id, second.id);

    let asc = PropertyRepo::list(&pool, ListOrder::Asc).await.unwrap();
    assert_eq!(asc.first().unwrap().id, first.id);
    assert_eq!(asc.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_removes_row(pool: PgPool) {
    let created = PropertyRepo::create(&pool, &new_property("Doomed")).await.unwrap();

    let deleted = PropertyRepo::delete(&pool, created.id).await.unwrap();
    assert!(deleted);

    let fetched = PropertyRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(fetched.is_none());

    // Deleting again reports nothing removed.
    let deleted_again = PropertyRepo::delete(&pool, created.id).await.unwrap();
    assert!(!deleted_again);
}
