//! HTTP-level integration tests for media record endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_media, get, get_auth, new_user_with_site, post_json,
    post_json_auth, put_json_auth, token_for,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_media_returns_201_with_labels(pool: PgPool) {
    let (user_id, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;

    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/media",
        &token,
        json!({ "type": "tv_film", "title": "Fleabag", "author_artist": "Phoebe Waller-Bridge" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["id"].is_number());
    assert_eq!(data["owner_id"], user_id.to_string());
    assert_eq!(data["type"], "tv_film");
    assert_eq!(data["type_label"], "TV/Film");
    assert_eq!(data["creator_label"], "Director");
    assert_eq!(data["is_public"], true);
    assert_eq!(data["notes_public"], true);
    assert_eq!(data["completed"], false);
    assert!(data["completed_date"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_blank_title_is_validation_error(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/media",
        &token,
        json!({ "type": "book", "title": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"], json!(["title"]));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM media_records")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "nothing may be stored on a validation failure");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_reports_every_bad_field(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;

    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/media",
        &token,
        json!({ "type": "podcast", "rating": 9 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 3, "type, rating and title are all at fault: {fields:?}");
    assert!(fields.contains(&json!("rating")));
    assert!(fields.contains(&json!("title")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_unrepresentable_values_by_field(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;

    let cases = [
        (json!({ "type": "book", "title": "Dune", "rating": 70000 }), "rating"),
        (json!({ "type": "book", "title": "Dune", "rating": 4.5 }), "rating"),
        (json!({ "type": "book", "title": null }), "title"),
        (json!({ "type": "book", "title": "Dune", "completed": "yes" }), "completed"),
    ];

    for (body, field) in cases {
        let response =
            post_json_auth(build_test_app(pool.clone()), "/api/v1/media", &token, body.clone())
                .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "{body}");
        assert_eq!(json["fields"], json!([field]), "{body}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_body_uses_error_envelope(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;

    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/media",
        &token,
        json!("Dune"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].is_string());
    assert_eq!(json["fields"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_id_uses_error_envelope(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;

    let response = get(build_test_app(pool.clone()), "/api/v1/media/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = put_json_auth(
        build_test_app(pool),
        "/api/v1/media/abc",
        &token,
        json!({ "title": "Dune" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_requires_authentication(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/media",
        json!({ "type": "book", "title": "Dune" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_site_is_conflict(pool: PgPool) {
    let token = token_for(Uuid::new_v4());

    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/media",
        &token,
        json!({ "type": "book", "title": "Dune" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_client_completed_date_is_ignored(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;

    let id = create_media(
        &pool,
        &token,
        json!({
            "type": "book",
            "title": "Dune",
            "completed": false,
            "completed_date": "1999-01-01T00:00:00Z"
        }),
    )
    .await;

    let response = get_auth(build_test_app(pool), &format!("/api/v1/media/{id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["completed"], false);
    assert!(json["data"]["completed_date"].is_null());
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_private_record_is_hidden_from_others(pool: PgPool) {
    let (_, owner) = new_user_with_site(&pool, "aishu", "dusty_rose").await;
    let (_, stranger) = new_user_with_site(&pool, "stranger", "sage").await;
    let id = create_media(
        &pool,
        &owner,
        json!({ "type": "music", "title": "OK Computer", "is_public": false }),
    )
    .await;
    let uri = format!("/api/v1/media/{id}");

    let anon = get(build_test_app(pool.clone()), &uri).await;
    assert_eq!(anon.status(), StatusCode::NOT_FOUND);

    let other = get_auth(build_test_app(pool.clone()), &uri, &stranger).await;
    assert_eq!(other.status(), StatusCode::NOT_FOUND);

    let mine = get_auth(build_test_app(pool), &uri, &owner).await;
    assert_eq!(mine.status(), StatusCode::OK);
    assert_eq!(body_json(mine).await["data"]["title"], "OK Computer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_private_notes_are_redacted_for_visitors(pool: PgPool) {
    let (_, owner) = new_user_with_site(&pool, "aishu", "dusty_rose").await;
    let id = create_media(
        &pool,
        &owner,
        json!({ "type": "book", "title": "Dune", "notes": "my secret", "notes_public": false }),
    )
    .await;
    let uri = format!("/api/v1/media/{id}");

    let anon = body_json(get(build_test_app(pool.clone()), &uri).await).await;
    assert_eq!(anon["data"]["title"], "Dune");
    assert!(anon["data"]["notes"].is_null());

    let mine = body_json(get_auth(build_test_app(pool), &uri, &owner).await).await;
    assert_eq!(mine["data"]["notes"], "my secret");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_token_reads_as_anonymous(pool: PgPool) {
    let (_, owner) = new_user_with_site(&pool, "aishu", "dusty_rose").await;
    let id = create_media(
        &pool,
        &owner,
        json!({ "type": "book", "title": "Dune", "is_public": false }),
    )
    .await;

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/media/{id}"),
        "not-a-real-token",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_round_trip(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;
    let id = create_media(
        &pool,
        &token,
        json!({ "type": "book", "title": "Dune", "author_artist": "Frank Herbert", "review": "Spice" }),
    )
    .await;

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/media/{id}"),
        &token,
        json!({ "rating": 4 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["rating"], 4);
    assert_eq!(data["title"], "Dune");
    assert_eq!(data["author_artist"], "Frank Herbert");
    assert_eq!(data["review"], "Spice");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completion_toggle_sets_and_clears_date(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;
    let id = create_media(&pool, &token, json!({ "type": "other", "title": "The Daily" })).await;
    let uri = format!("/api/v1/media/{id}");

    let done = body_json(
        put_json_auth(build_test_app(pool.clone()), &uri, &token, json!({ "completed": true }))
            .await,
    )
    .await;
    assert_eq!(done["data"]["completed"], true);
    assert!(done["data"]["completed_date"].is_string());

    let undone = body_json(
        put_json_auth(build_test_app(pool), &uri, &token, json!({ "completed": false })).await,
    )
    .await;
    assert_eq!(undone["data"]["completed"], false);
    assert!(undone["data"]["completed_date"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_owner_update_is_forbidden(pool: PgPool) {
    let (_, owner) = new_user_with_site(&pool, "aishu", "dusty_rose").await;
    let (_, intruder) = new_user_with_site(&pool, "intruder", "charcoal").await;
    let id = create_media(&pool, &owner, json!({ "type": "book", "title": "Dune" })).await;

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/media/{id}"),
        &intruder,
        json!({ "title": "Hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");

    let check = get(build_test_app(pool), &format!("/api/v1/media/{id}")).await;
    assert_eq!(body_json(check).await["data"]["title"], "Dune");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_record_is_forbidden(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;

    let response = put_json_auth(
        build_test_app(pool),
        "/api/v1/media/999999",
        &token,
        json!({ "title": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_blank_title_is_validation_error(pool: PgPool) {
    let (_, token) = new_user_with_site(&pool, "aishu", "dusty_rose").await;
    let id = create_media(&pool, &token, json!({ "type": "book", "title": "Dune" })).await;

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/media/{id}"),
        &token,
        json!({ "title": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["fields"], json!(["title"]));
}
