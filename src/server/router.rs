use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::server::{
    controller::{auth, guild, page},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login))
        .route("/callback", get(auth::callback))
        .route("/logout", get(auth::logout))
        .route("/api/user", get(auth::get_user))
        .route("/api/guilds", get(guild::get_guilds))
        .route("/servers", get(page::servers))
        .route("/dashboard.html", get(page::dashboard_redirect))
        .route("/login-rate-limit", get(page::login_rate_limit))
        .route_service("/", ServeFile::new("public/index.html"))
        .nest_service("/styles", ServeDir::new("public/styles"))
}
