//! OAuth2 login with Discord.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::server::{
    error::{auth::AuthError, discord::DiscordApiError, AppError},
    model::user::SessionUser,
    service::discord::DiscordApi,
    state::OAuth2Client,
};

/// Outcome of the OAuth callback.
///
/// Discord's rate-limit condition during the handshake is part of the normal
/// control flow (it redirects to the backoff page), so it is a variant here
/// rather than an error.
pub enum AuthOutcome {
    /// Handshake succeeded; the profile and guild list are ready for the session.
    Success(SessionUser),
    /// Discord rate-limited the profile or guild fetch.
    RateLimited,
}

pub struct DiscordAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub discord_api_base_url: &'a str,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        discord_api_base_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            discord_api_base_url,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Returns both the URL and the CSRF token so the caller can stash the
    /// token in the session for callback validation.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            // Request scope to retrieve user information and their guild list
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and assembles the session user.
    ///
    /// Exchanges the authorization code for an access token, then fetches the
    /// user's profile and guild memberships. A 429 from either fetch maps to
    /// `AuthOutcome::RateLimited`; any other upstream failure is an error.
    ///
    /// # Arguments
    /// - `authorization_code` - OAuth2 authorization code from the Discord callback
    ///
    /// # Returns
    /// - `Ok(AuthOutcome::Success(_))` - Authenticated user with guild list attached
    /// - `Ok(AuthOutcome::RateLimited)` - Discord rate-limited the handshake
    /// - `Err(AppError::AuthErr(_))` - Token exchange failed
    /// - `Err(AppError::DiscordErr(_))` - Profile or guild fetch failed
    pub async fn callback(&self, authorization_code: String) -> Result<AuthOutcome, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let access_token = token.access_token().secret();
        let api = DiscordApi::new(self.http_client, self.discord_api_base_url);

        let profile = match api.current_user(access_token).await {
            Ok(profile) => profile,
            Err(DiscordApiError::RateLimited) => return Ok(AuthOutcome::RateLimited),
            Err(err) => return Err(err.into()),
        };

        let guilds = match api.current_user_guilds(access_token).await {
            Ok(guilds) => guilds,
            Err(DiscordApiError::RateLimited) => return Ok(AuthOutcome::RateLimited),
            Err(err) => return Err(err.into()),
        };

        Ok(AuthOutcome::Success(SessionUser { profile, guilds }))
    }
}
