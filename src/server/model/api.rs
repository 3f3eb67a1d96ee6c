use serde::{Deserialize, Serialize};

use crate::server::model::{guild::OwnedGuild, user::SessionUser};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Response envelope for `GET /api/user`.
///
/// `user` is `null` when no session user exists; the endpoint itself always
/// answers 200.
#[derive(Serialize)]
pub struct UserResponse {
    pub user: Option<SessionUser>,
}

/// Response envelope for `GET /api/guilds`.
#[derive(Serialize)]
pub struct GuildsResponse {
    pub guilds: Vec<OwnedGuild>,
}
