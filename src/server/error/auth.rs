use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::server::{error::InternalServerError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// Raised by the auth guard when a protected API route is hit without a
    /// logged-in session. Results in a 401 Unauthorized response. Page routes
    /// redirect to the login entry point instead of surfacing this error.
    #[error("Not logged in")]
    UserNotInSession,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The OAuth2 authorization code could not be exchanged for an access token.
    ///
    /// The underlying oauth2 error is stringified here to keep the enum free of
    /// the crate's deeply generic error types.
    #[error("OAuth2 token exchange failed: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `UserNotInSession`
/// - 400 Bad Request - For `CsrfValidationFailed`
/// - 500 Internal Server Error - For token exchange failures reaching this point
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            err @ Self::TokenExchange(_) => InternalServerError(err).into_response(),
        }
    }
}
