use serde::{Deserialize, Serialize};
use serenity::all::UserId;

use crate::server::model::guild::UserGuild;

/// The authenticated user's Discord profile.
///
/// Deserialized from `GET /users/@me` with the user's bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordProfile {
    /// Discord user ID.
    pub id: UserId,
    /// Unique Discord username.
    pub username: String,
    /// Display name, if the user has set one.
    #[serde(default)]
    pub global_name: Option<String>,
    /// Optional avatar hash for constructing avatar URLs.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Everything the session holds about a logged-in user.
///
/// Ephemeral: lives only in the server-side session store for the browser's
/// lifetime and is rebuilt from Discord on the next login. The profile fields
/// are flattened so `/api/user` serves the familiar profile-with-guilds shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(flatten)]
    pub profile: DiscordProfile,
    /// Guild memberships fetched during login.
    pub guilds: Vec<UserGuild>,
}
