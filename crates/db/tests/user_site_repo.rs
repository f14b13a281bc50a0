//! Integration tests for the user site store.

use assert_matches::assert_matches;
use archiveand_core::site::FavoritesInput;
use archiveand_db::models::user_site::{CreateUserSite, SiteView, UpdateUserSite};
use archiveand_db::repositories::UserSiteRepo;
use sqlx::PgPool;
use uuid::Uuid;

fn new_site(username: &str, color_theme: Option<&str>) -> CreateUserSite {
    CreateUserSite {
        username: username.to_string(),
        color_theme: color_theme.map(str::to_string),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_normalizes_username_and_theme(pool: PgPool) {
    let user_id = Uuid::new_v4();
    let site = UserSiteRepo::create(&pool, user_id, &new_site("  Aishu ", Some("sage green")))
        .await
        .unwrap();

    assert_eq!(site.username, "aishu");
    assert_eq!(site.color_theme, "sage");

    let by_name = UserSiteRepo::find_by_username(&pool, "AISHU")
        .await
        .unwrap()
        .expect("lookup should ignore case");
    assert_eq!(by_name.user_id, user_id);

    let by_user = UserSiteRepo::find_by_user_id(&pool, user_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_user.id, site.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_site_reads_with_defaults(pool: PgPool) {
    let site = UserSiteRepo::create(&pool, Uuid::new_v4(), &new_site("aishu", None))
        .await
        .unwrap();
    let view = SiteView::from(&site);

    assert_eq!(site.color_theme, "dusty_rose");
    assert_eq!(view.palette.main, "#c08a8a");
    assert!(view.welcome_message.starts_with("Welcome to my personal archive"));
    assert!(view.quote.contains("Albert Camus"));
    assert_eq!(view.current_favorites.music, "Heavy Metal Drummer - Wilco");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_is_unique_violation(pool: PgPool) {
    UserSiteRepo::create(&pool, Uuid::new_v4(), &new_site("aishu", None))
        .await
        .unwrap();

    let err = UserSiteRepo::create(&pool, Uuid::new_v4(), &new_site("Aishu", None))
        .await
        .unwrap_err();
    assert_matches!(
        &err,
        sqlx::Error::Database(db) if db.constraint() == Some("uq_user_sites_username")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_site_for_user_is_unique_violation(pool: PgPool) {
    let user_id = Uuid::new_v4();
    UserSiteRepo::create(&pool, user_id, &new_site("aishu", None))
        .await
        .unwrap();

    let err = UserSiteRepo::create(&pool, user_id, &new_site("aishu2", None))
        .await
        .unwrap_err();
    assert_matches!(
        &err,
        sqlx::Error::Database(db) if db.constraint() == Some("uq_user_sites_user_id")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_merges_favorites(pool: PgPool) {
    let user_id = Uuid::new_v4();
    UserSiteRepo::create(&pool, user_id, &new_site("aishu", None))
        .await
        .unwrap();

    let first = UpdateUserSite {
        current_favorites: Some(FavoritesInput {
            book: Some("Dune - Frank Herbert".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    UserSiteRepo::update_owned(&pool, user_id, &first)
        .await
        .unwrap()
        .unwrap();

    let second = UpdateUserSite {
        color_theme: Some("Lavender Grey".into()),
        quote: Some("Hello".into()),
        current_favorites: Some(FavoritesInput {
            music: Some("OK Computer - Radiohead".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let site = UserSiteRepo::update_owned(&pool, user_id, &second)
        .await
        .unwrap()
        .unwrap();
    let view = SiteView::from(&site);

    assert_eq!(site.color_theme, "lavender");
    assert_eq!(view.quote, "Hello");
    assert_eq!(view.current_favorites.book, "Dune - Frank Herbert");
    assert_eq!(view.current_favorites.music, "OK Computer - Radiohead");
    assert_eq!(view.current_favorites.other, "The Daily - The New York Times");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_frees_old_name(pool: PgPool) {
    let user_id = Uuid::new_v4();
    UserSiteRepo::create(&pool, user_id, &new_site("aishu", None))
        .await
        .unwrap();

    let rename = UpdateUserSite {
        username: Some("Aishu_Reads".into()),
        ..Default::default()
    };
    let site = UserSiteRepo::update_owned(&pool, user_id, &rename)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(site.username, "aishu_reads");

    assert!(UserSiteRepo::find_by_username(&pool, "aishu")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_site_returns_none(pool: PgPool) {
    let result = UserSiteRepo::update_owned(&pool, Uuid::new_v4(), &UpdateUserSite::default())
        .await
        .unwrap();
    assert!(result.is_none());
}
