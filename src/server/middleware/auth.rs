use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::SessionUser,
};

/// Guard for routes that require an authenticated user.
///
/// API routes let the resulting `UserNotInSession` error surface as a 401
/// response; page routes check `AuthSession::is_authenticated` themselves and
/// redirect instead.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the session user, or `AuthError::UserNotInSession` if nobody
    /// is logged in.
    pub async fn require(&self) -> Result<SessionUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        Ok(user)
    }
}
