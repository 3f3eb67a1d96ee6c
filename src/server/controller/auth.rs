use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession},
    model::api::UserResponse,
    service::auth::{AuthOutcome, DiscordAuthService},
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// Both fields are optional because Discord omits them when the user denies
/// the authorization request; the handler treats that as an ordinary failed
/// login rather than a malformed request.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Authorization code from Discord for token exchange.
    pub code: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// OAuth redirect target.
///
/// Every failure mode on this path returns the browser to a page rather than
/// a JSON error: a rate-limited handshake goes to the backoff page, anything
/// else falls back to the anonymous landing page.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<Redirect, AppError> {
    if let Err(err) = validate_csrf(&session, params.0.state.as_deref()).await {
        tracing::warn!("OAuth callback rejected: {}", err);
        return Ok(Redirect::to("/"));
    }

    let Some(code) = params.0.code else {
        tracing::warn!("OAuth callback missing authorization code");
        return Ok(Redirect::to("/"));
    };

    let auth_service = DiscordAuthService::new(
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    );

    match auth_service.callback(code).await {
        Ok(AuthOutcome::Success(user)) => {
            AuthSession::new(&session).set_user(&user).await?;
            Ok(Redirect::to("/servers"))
        }
        Ok(AuthOutcome::RateLimited) => Ok(Redirect::to("/login-rate-limit")),
        Err(err) => {
            tracing::warn!("OAuth callback failed: {}", err);
            Ok(Redirect::to("/"))
        }
    }
}

pub async fn logout(session: Session) -> Redirect {
    AuthSession::new(&session).clear().await;

    Redirect::to("/")
}

pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthSession::new(&session).get_user().await?;

    Ok(Json(UserResponse { user }))
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let (Some(stored), Some(received)) = (stored_state, csrf_state) {
        if stored == received {
            return Ok(());
        }
    }

    Err(AuthError::CsrfValidationFailed.into())
}
