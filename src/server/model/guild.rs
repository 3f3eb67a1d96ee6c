use serde::{Deserialize, Serialize};
use serenity::all::GuildId;

/// Partial guild information returned from Discord API.
///
/// Contains the minimal guild data returned from Discord's guild list
/// endpoint. Used for the bot's own guild list, where only the identifiers
/// matter.
#[derive(Debug, Deserialize)]
pub struct PartialGuild {
    /// Discord guild ID.
    pub id: GuildId,
}

/// A guild membership as reported by Discord for the logged-in user.
///
/// Deserialized from `GET /users/@me/guilds` with the user's bearer token and
/// kept in the session for the lifetime of the login. Display fields are
/// carried through to the dashboard unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGuild {
    /// Discord guild ID.
    pub id: GuildId,
    /// Guild display name.
    pub name: String,
    /// Optional guild icon hash for constructing icon URLs.
    pub icon: Option<String>,
    /// Whether the session user owns this guild.
    #[serde(default)]
    pub owner: bool,
}

/// An owned guild annotated with bot presence, as served to the dashboard.
///
/// Produced by the reconciliation service; `bot_in_guild` is derived at
/// response time from the bot guild cache and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnedGuild {
    /// Discord guild ID.
    pub id: GuildId,
    /// Guild display name.
    pub name: String,
    /// Optional guild icon hash for constructing icon URLs.
    pub icon: Option<String>,
    /// Always true for reconciled guilds; kept for wire compatibility.
    pub owner: bool,
    /// Whether the bot is currently a member of this guild.
    #[serde(rename = "botInGuild")]
    pub bot_in_guild: bool,
}
