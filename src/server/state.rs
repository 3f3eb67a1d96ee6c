//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - HTTP client for Discord API requests
//! - OAuth2 client for Discord authentication
//! - The process-wide bot guild cache
//! - Service-level bot token and the Discord REST base URL

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::sync::Arc;

use crate::server::service::guild_cache::BotGuildCache;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `Arc<BotGuildCache>` is a reference-counted pointer, so every handler
///   sees the same cache entry
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for Discord API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities, and an explicit request timeout so a hung upstream
    /// call cannot pin a request handler indefinitely.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    ///
    /// Handles generating login URLs and exchanging authorization codes for
    /// access tokens.
    pub oauth_client: OAuth2Client,

    /// Process-wide cache of the guild IDs the bot belongs to.
    ///
    /// The single shared mutable resource in the application; see
    /// `service::guild_cache` for its refresh and staleness rules.
    pub bot_guild_cache: Arc<BotGuildCache>,

    /// Service-level bot token used to fetch the bot's own guild list.
    pub bot_token: String,

    /// Base URL of the Discord REST API.
    ///
    /// Points at discord.com in production; tests repoint it at a local mock
    /// server.
    pub discord_api_base_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized. The resulting state is then provided to the Axum router
    /// for use in request handlers.
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        bot_guild_cache: Arc<BotGuildCache>,
        bot_token: String,
        discord_api_base_url: String,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            bot_guild_cache,
            bot_token,
            discord_api_base_url,
        }
    }
}
