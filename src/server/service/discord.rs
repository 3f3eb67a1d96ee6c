//! Thin client for the Discord REST endpoints this application uses.
//!
//! All upstream calls go through `DiscordApi` so the rate-limit classification
//! (HTTP 429 → `DiscordApiError::RateLimited`) is written exactly once. Both
//! the login flow (user bearer token) and the bot guild cache (service bot
//! token) depend on it.

use serde::de::DeserializeOwned;

use crate::server::{
    error::discord::DiscordApiError,
    model::{
        guild::{PartialGuild, UserGuild},
        user::DiscordProfile,
    },
};

pub struct DiscordApi<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a str,
}

impl<'a> DiscordApi<'a> {
    pub fn new(http_client: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Retrieves the authenticated user's profile using their access token.
    pub async fn current_user(&self, access_token: &str) -> Result<DiscordProfile, DiscordApiError> {
        self.get_json("/users/@me", format!("Bearer {}", access_token))
            .await
    }

    /// Retrieves the authenticated user's guild memberships using their access token.
    pub async fn current_user_guilds(
        &self,
        access_token: &str,
    ) -> Result<Vec<UserGuild>, DiscordApiError> {
        self.get_json("/users/@me/guilds", format!("Bearer {}", access_token))
            .await
    }

    /// Retrieves the guilds the bot account belongs to using the service bot token.
    pub async fn bot_guilds(&self, bot_token: &str) -> Result<Vec<PartialGuild>, DiscordApiError> {
        self.get_json("/users/@me/guilds", format!("Bot {}", bot_token))
            .await
    }

    /// Performs a GET request against the Discord API and decodes the JSON body.
    ///
    /// # Returns
    /// - `Ok(T)` - 2xx response with a decodable body
    /// - `Err(DiscordApiError::RateLimited)` - Discord answered 429
    /// - `Err(DiscordApiError::UnexpectedStatus(_))` - Any other non-success status
    /// - `Err(DiscordApiError::Request(_))` - Transport or decode failure
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        authorization: String,
    ) -> Result<T, DiscordApiError> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .header("Authorization", authorization)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DiscordApiError::RateLimited);
        }
        if !status.is_success() {
            return Err(DiscordApiError::UnexpectedStatus(status));
        }

        let body = response.json::<T>().await?;

        Ok(body)
    }
}
