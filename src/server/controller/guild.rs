use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::api::GuildsResponse,
    service::{guild::reconcile_owned_guilds, guild_cache::BotGuildService},
    state::AppState,
};

/// GET /api/guilds - The logged-in user's owned guilds with bot presence.
///
/// # Returns
/// - `200 OK`: `{ "guilds": [...] }`, owned guilds only, each with `botInGuild`
/// - `401 Unauthorized`: no session user
/// - `429 Too Many Requests`: bot guild cache empty and Discord rate-limited the refresh
/// - `500 Internal Server Error`: any other upstream failure
pub async fn get_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require().await?;

    let bot_guild_service = BotGuildService::new(
        &state.http_client,
        &state.discord_api_base_url,
        &state.bot_guild_cache,
        &state.bot_token,
    );

    let bot_guild_ids = bot_guild_service.get_bot_guild_ids(Utc::now()).await?;

    let guilds = reconcile_owned_guilds(&user.guilds, &bot_guild_ids);

    Ok((StatusCode::OK, Json(GuildsResponse { guilds })))
}
