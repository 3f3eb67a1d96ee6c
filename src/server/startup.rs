use std::time::Duration;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_sessions::{
    cookie::Key, service::SignedCookie, Expiry, MemoryStore, SessionManagerLayer,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Upstream requests that take longer than this are aborted.
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared HTTP client used for all Discord API requests.
///
/// Redirects are disabled so a malicious or misconfigured upstream cannot
/// bounce requests to arbitrary hosts, and every request carries an explicit
/// timeout rather than relying on client defaults.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_REQUEST_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the Discord authorization-code flow.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with Discord's auth/token endpoints and the
///   configured redirect URL
/// - `Err(AppError::ConfigErr(_))` - One of the configured URLs is invalid
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|_| ConfigError::InvalidEnvVar("DISCORD_AUTH_URL".to_string()))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|_| ConfigError::InvalidEnvVar("DISCORD_TOKEN_URL".to_string()))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|_| ConfigError::InvalidEnvVar("DISCORD_REDIRECT_URL".to_string()))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Builds the session layer backed by an in-memory store.
///
/// Sessions hold the logged-in user's profile and guild list for the
/// browser's lifetime; nothing survives a process restart. Session cookies
/// are signed with a key derived from `SESSION_SECRET` (length validated at
/// config load) and expire when the browser session ends.
pub fn setup_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let store = MemoryStore::default();
    let key = Key::from(config.session_secret.as_bytes());

    SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(key)
}
