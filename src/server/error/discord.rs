use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::server::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum DiscordApiError {
    /// Discord answered with HTTP 429.
    ///
    /// The caller decides whether to degrade (serve a stale cache, show the
    /// backoff page) or surface this as a 429 response.
    #[error("Rate limited by Discord")]
    RateLimited,

    /// Discord answered with an unexpected non-success status.
    #[error("Discord API returned status {0}")]
    UnexpectedStatus(StatusCode),

    /// The request never produced a usable response (connect failure, timeout,
    /// body decode failure).
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Converts Discord API errors into HTTP responses.
///
/// Only the guild listing endpoint surfaces these directly; the login path
/// intercepts rate limits and redirects to the backoff page instead.
///
/// # Returns
/// - 429 Too Many Requests - For `RateLimited`, with a human-readable message
/// - 500 Internal Server Error - For any other upstream failure
impl IntoResponse for DiscordApiError {
    fn into_response(self) -> Response {
        match self {
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorDto {
                    error: "Rate limited by Discord. Please try again in a few minutes."
                        .to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("Discord API error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Failed to fetch bot guilds".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
