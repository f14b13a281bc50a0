//! User site entity model and DTOs.

use archiveand_core::ownership::Owned;
use archiveand_core::site::{
    text_or_default, ColorTheme, Favorites, FavoritesInput, Palette, DEFAULT_QUOTE,
    DEFAULT_WELCOME_MESSAGE,
};
use archiveand_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `user_sites` table, exactly as stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSite {
    pub id: DbId,
    pub user_id: UserId,
    pub username: String,
    pub color_theme: String,
    pub welcome_message: Option<String>,
    pub quote: Option<String>,
    pub current_favorites: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for UserSite {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// A site with every read-time default applied, as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    pub user_id: UserId,
    pub username: String,
    pub color_theme: ColorTheme,
    pub palette: Palette,
    pub welcome_message: String,
    pub quote: String,
    pub current_favorites: Favorites,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&UserSite> for SiteView {
    fn from(site: &UserSite) -> Self {
        let theme = ColorTheme::resolve(&site.color_theme);
        Self {
            user_id: site.user_id,
            username: site.username.clone(),
            color_theme: theme,
            palette: theme.palette(),
            welcome_message: text_or_default(
                site.welcome_message.as_deref(),
                DEFAULT_WELCOME_MESSAGE,
            ),
            quote: text_or_default(site.quote.as_deref(), DEFAULT_QUOTE),
            current_favorites: Favorites::resolve(site.current_favorites.as_ref()),
            created_at: site.created_at,
            updated_at: site.updated_at,
        }
    }
}

/// DTO for claiming a username and creating the caller's site.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserSite {
    #[serde(default)]
    #[validate(custom(function = "archiveand_core::validation::validate_username"))]
    pub username: String,
    /// Defaults to `dusty_rose` if omitted.
    #[validate(custom(function = "archiveand_core::validation::validate_color_theme"))]
    pub color_theme: Option<String>,
}

/// DTO for updating the caller's site. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserSite {
    #[validate(custom(function = "archiveand_core::validation::validate_username"))]
    pub username: Option<String>,
    #[validate(custom(function = "archiveand_core::validation::validate_color_theme"))]
    pub color_theme: Option<String>,
    pub welcome_message: Option<String>,
    pub quote: Option<String>,
    /// Merged field-by-field into the stored favorites.
    pub current_favorites: Option<FavoritesInput>,
}
