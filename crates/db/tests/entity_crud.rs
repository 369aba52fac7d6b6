//! Integration tests for the repository layer against a real database:
//! - Video/hotspot/product/CTA CRUD
//! - Cascade delete behaviour
//! - The one-CTA-per-video unique constraint
//! - Lifecycle state persistence through the store seam

use reelmark_core::lifecycle::{VideoState, VideoStateStore};
use reelmark_db::models::hotspot::{CreateHotspot, UpdateHotspot};
use reelmark_db::models::product::CreateProduct;
use reelmark_db::models::video::{CreateVideo, UpdateVideo};
use reelmark_db::models::video_cta::UpsertVideoCta;
use reelmark_db::repositories::{
    HotspotRepo, PgVideoStateStore, ProductRepo, VideoCtaRepo, VideoRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_video(title: &str) -> CreateVideo {
    CreateVideo {
        title: title.to_string(),
        duration_secs: 60.0,
    }
}

fn new_hotspot(start: f64, end: f64) -> CreateHotspot {
    CreateHotspot {
        time_start: start,
        time_end: end,
        x: 0.5,
        y: 0.5,
        product_id: None,
        style: None,
        cta_label: None,
        click_behavior: None,
        scale: None,
    }
}

fn new_product(title: &str) -> CreateProduct {
    CreateProduct {
        title: title.to_string(),
        price: "$19.90".to_string(),
        link: "https://shop.example.com/p/1".to_string(),
        description: None,
        thumbnail: None,
    }
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_create_starts_in_draft(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("Lookbook")).await.unwrap();
    assert_eq!(video.state.as_deref(), Some("draft"));
    assert!(!video.slug_finalized);
    assert_eq!(video.effective_state(false), VideoState::Draft);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_update_applies_only_provided_fields(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("Lookbook")).await.unwrap();

    let updated = VideoRepo::update(
        &pool,
        video.id,
        &UpdateVideo {
            title: None,
            duration_secs: None,
            slug: Some("spring-lookbook".to_string()),
            slug_finalized: Some(true),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "Lookbook");
    assert_eq!(updated.slug.as_deref(), Some("spring-lookbook"));
    assert!(updated.slug_finalized);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn video_delete_cascades_to_hotspots_and_cta(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("Lookbook")).await.unwrap();
    HotspotRepo::create(&pool, video.id, &new_hotspot(5.0, 10.0))
        .await
        .unwrap();
    VideoCtaRepo::upsert(
        &pool,
        video.id,
        &UpsertVideoCta {
            label: "Shop now".to_string(),
            url: "https://shop.example.com".to_string(),
            mode: "show_at_end".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(VideoRepo::delete(&pool, video.id).await.unwrap());

    assert_eq!(HotspotRepo::count_by_video(&pool, video.id).await.unwrap(), 0);
    assert!(VideoCtaRepo::find_by_video(&pool, video.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Hotspots
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn hotspot_crud_round_trip(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("Lookbook")).await.unwrap();
    let product = ProductRepo::create(&pool, &new_product("Overshirt")).await.unwrap();

    let hotspot = HotspotRepo::create(&pool, video.id, &new_hotspot(5.0, 10.0))
        .await
        .unwrap();
    assert!(hotspot.product_id.is_none());
    assert!(!hotspot.to_domain().is_complete());

    let updated = HotspotRepo::update(
        &pool,
        hotspot.id,
        &UpdateHotspot {
            time_start: None,
            time_end: None,
            x: None,
            y: None,
            product_id: Some(product.id),
            style: Some("card".to_string()),
            cta_label: None,
            click_behavior: None,
            scale: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.to_domain().is_complete());

    assert!(HotspotRepo::delete(&pool, hotspot.id).await.unwrap());
    assert!(HotspotRepo::find_by_id(&pool, hotspot.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hotspot_list_is_time_ordered(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("Lookbook")).await.unwrap();
    HotspotRepo::create(&pool, video.id, &new_hotspot(20.0, 25.0))
        .await
        .unwrap();
    HotspotRepo::create(&pool, video.id, &new_hotspot(5.0, 10.0))
        .await
        .unwrap();

    let listed = HotspotRepo::list_by_video(&pool, video.id).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].time_start, 5.0);
    assert_eq!(listed[1].time_start, 20.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_product_unassigns_hotspots(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("Lookbook")).await.unwrap();
    let product = ProductRepo::create(&pool, &new_product("Overshirt")).await.unwrap();

    let mut input = new_hotspot(5.0, 10.0);
    input.product_id = Some(product.id);
    input.style = Some("card".to_string());
    let hotspot = HotspotRepo::create(&pool, video.id, &input).await.unwrap();
    assert!(hotspot.to_domain().is_complete());

    sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(product.id)
        .execute(&pool)
        .await
        .unwrap();

    // ON DELETE SET NULL: the hotspot survives but loses its product.
    let reloaded = HotspotRepo::find_by_id(&pool, hotspot.id)
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.product_id.is_none());
    assert!(!reloaded.to_domain().is_complete());
}

// ---------------------------------------------------------------------------
// CTAs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cta_upsert_replaces_existing(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("Lookbook")).await.unwrap();

    let first = VideoCtaRepo::upsert(
        &pool,
        video.id,
        &UpsertVideoCta {
            label: "Shop now".to_string(),
            url: "https://shop.example.com".to_string(),
            mode: "off".to_string(),
        },
    )
    .await
    .unwrap();

    let second = VideoCtaRepo::upsert(
        &pool,
        video.id,
        &UpsertVideoCta {
            label: "See the drop".to_string(),
            url: "https://shop.example.com/drop".to_string(),
            mode: "always_visible".to_string(),
        },
    )
    .await
    .unwrap();

    // Same row, new content: the unique constraint turned the second
    // insert into an update.
    assert_eq!(first.id, second.id);
    assert_eq!(second.label, "See the drop");
    assert_eq!(second.mode, "always_visible");
}

// ---------------------------------------------------------------------------
// Lifecycle store seam
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn state_store_persists_tag(pool: PgPool) {
    let video = VideoRepo::create(&pool, &new_video("Lookbook")).await.unwrap();

    let store = PgVideoStateStore::new(pool.clone());
    store
        .persist_state(video.id, VideoState::Editing)
        .await
        .unwrap();

    let reloaded = VideoRepo::find_by_id(&pool, video.id).await.unwrap().unwrap();
    assert_eq!(reloaded.state.as_deref(), Some("editing"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn state_store_rejects_missing_video(pool: PgPool) {
    let store = PgVideoStateStore::new(pool);
    let err = store.persist_state(999_999, VideoState::Editing).await;
    assert!(err.is_err());
}
