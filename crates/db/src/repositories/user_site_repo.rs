//! Repository for the `user_sites` table.

use archiveand_core::site::{merge_favorites, normalize_username, ColorTheme};
use archiveand_core::types::UserId;
use sqlx::PgPool;

use crate::models::user_site::{CreateUserSite, UpdateUserSite, UserSite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, username, color_theme, welcome_message, quote, \
     current_favorites, created_at, updated_at";

/// Map a user-chosen theme (key or label) to its stored key.
fn theme_key(choice: &str) -> &'static str {
    ColorTheme::parse_choice(choice)
        .unwrap_or(ColorTheme::DEFAULT)
        .as_str()
}

/// Provides CRUD operations for user sites.
pub struct UserSiteRepo;

impl UserSiteRepo {
    /// Claim a username and create the site for `user_id`.
    ///
    /// Fails with a unique violation on `uq_user_sites_username` if the name
    /// is taken, or `uq_user_sites_user_id` if the user already has a site.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        input: &CreateUserSite,
    ) -> Result<UserSite, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sites (user_id, username, color_theme)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSite>(&query)
            .bind(user_id)
            .bind(normalize_username(&input.username))
            .bind(input.color_theme.as_deref().map_or(ColorTheme::DEFAULT.as_str(), theme_key))
            .fetch_one(pool)
            .await
    }

    /// Find a site by username. The lookup is case-insensitive.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserSite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_sites WHERE username = $1");
        sqlx::query_as::<_, UserSite>(&query)
            .bind(normalize_username(username))
            .fetch_optional(pool)
            .await
    }

    /// Find the site belonging to `user_id`.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<UserSite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_sites WHERE user_id = $1");
        sqlx::query_as::<_, UserSite>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to the site owned by `user_id`.
    ///
    /// Favorites are merged field-by-field into the stored value under a row
    /// lock. Returns `None` if the user has no site.
    pub async fn update_owned(
        pool: &PgPool,
        user_id: UserId,
        input: &UpdateUserSite,
    ) -> Result<Option<UserSite>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let stored: Option<(Option<serde_json::Value>,)> = sqlx::query_as(
            "SELECT current_favorites FROM user_sites WHERE user_id = $1 FOR UPDATE",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((stored_favorites,)) = stored else {
            return Ok(None);
        };

        let favorites = input
            .current_favorites
            .as_ref()
            .map(|update| merge_favorites(stored_favorites.as_ref(), update));

        let query = format!(
            "UPDATE user_sites SET
                username = COALESCE($2, username),
                color_theme = COALESCE($3, color_theme),
                welcome_message = COALESCE($4, welcome_message),
                quote = COALESCE($5, quote),
                current_favorites = COALESCE($6, current_favorites)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        let site = sqlx::query_as::<_, UserSite>(&query)
            .bind(user_id)
            .bind(input.username.as_deref().map(normalize_username))
            .bind(input.color_theme.as_deref().map(theme_key))
            .bind(&input.welcome_message)
            .bind(&input.quote)
            .bind(favorites)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(site))
    }
}
